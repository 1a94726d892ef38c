//! Visualization seam.
//!
//! The engine produces data; drawing it is a host concern. Implement
//! [`EnsembleRenderer`] in the embedding application (terminal table,
//! plotting backend, report generator) and hand it finished ensembles.

use crate::error::ComputationError;
use crate::model::Ensemble;

/// Turns simulation output into some host-defined artifact.
pub trait EnsembleRenderer {
    type Artifact;

    /// Render the full path ensemble, e.g. a fan chart.
    fn render_ensemble(&mut self, ensemble: &Ensemble) -> Self::Artifact;

    /// Render a one-dimensional outcome sample, e.g. a histogram of
    /// final growth factors.
    fn render_sample(&mut self, sample: &[f64]) -> Self::Artifact;

    /// Render an ensemble's final trading day as an outcome sample.
    fn render_final_day(
        &mut self,
        ensemble: &Ensemble,
    ) -> Result<Self::Artifact, ComputationError> {
        let sample = ensemble.final_row();
        if sample.is_empty() {
            return Err(ComputationError::EmptySample);
        }
        Ok(self.render_sample(&sample))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingRenderer {
        samples_seen: usize,
    }

    impl EnsembleRenderer for CountingRenderer {
        type Artifact = usize;

        fn render_ensemble(&mut self, ensemble: &Ensemble) -> usize {
            ensemble.num_paths()
        }

        fn render_sample(&mut self, sample: &[f64]) -> usize {
            self.samples_seen += 1;
            sample.len()
        }
    }

    #[test]
    fn default_final_day_render_goes_through_render_sample() {
        let paths = vec![vec![1.0, 1.1], vec![1.0, 0.9]];
        let ensemble = Ensemble::new(1, paths, 0, false);

        let mut renderer = CountingRenderer { samples_seen: 0 };
        assert_eq!(renderer.render_ensemble(&ensemble), 2);
        let rendered = renderer.render_final_day(&ensemble).unwrap();
        assert_eq!(rendered, 2);
        assert_eq!(renderer.samples_seen, 1);
    }
}
