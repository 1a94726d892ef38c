//! Statistical model of joint daily returns.
//!
//! Summarizes aligned historical return series into a mean vector and a
//! covariance matrix, and samples synthetic daily return vectors from the
//! corresponding multivariate normal. Sampling goes through the covariance
//! matrix's Cholesky factor so cross-asset correlation observed in the
//! history is preserved in every draw; sampling each asset independently
//! would understate portfolio risk whenever assets move together.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::returns::ReturnSeries;

/// Residuals at or below this are treated as exactly zero when factoring.
///
/// Degenerate histories (constant prices, perfectly collinear assets) make
/// the covariance matrix positive-semidefinite rather than positive-definite.
/// Clamping keeps the factorization exact for those cases: a zero-variance
/// asset samples exactly its mean, with no injected jitter.
const PSD_CLAMP: f64 = 1e-12;

/// Immutable mean vector + covariance matrix derived from one historical
/// window, with the Cholesky factor precomputed for sampling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionModel {
    means: Vec<f64>,
    covariance: Vec<Vec<f64>>,
    cholesky: Vec<Vec<f64>>,
}

impl DistributionModel {
    /// Build the model from per-asset return series.
    ///
    /// All series must have equal length (alignment by trading day) and at
    /// least 2 observations, otherwise the sample covariance is undefined.
    pub fn from_returns(series: &[ReturnSeries]) -> Result<Self, DataError> {
        let Some(first) = series.first() else {
            return Err(DataError::UnequalReturnLengths {
                expected: 2,
                actual: 0,
            });
        };
        let n_obs = first.len();
        for s in series {
            if s.len() != n_obs {
                return Err(DataError::UnequalReturnLengths {
                    expected: n_obs,
                    actual: s.len(),
                });
            }
        }
        if n_obs < 2 {
            return Err(DataError::TooFewObservations {
                ticker: first.ticker.clone(),
                len: n_obs,
            });
        }

        let n_assets = series.len();
        let means: Vec<f64> = series
            .iter()
            .map(|s| s.returns.iter().sum::<f64>() / n_obs as f64)
            .collect();

        // Sample covariance with n-1 denominator; symmetric by construction.
        let mut covariance = vec![vec![0.0; n_assets]; n_assets];
        for i in 0..n_assets {
            for j in 0..=i {
                let mut acc = 0.0;
                for t in 0..n_obs {
                    acc += (series[i].returns[t] - means[i]) * (series[j].returns[t] - means[j]);
                }
                let cov = acc / (n_obs - 1) as f64;
                covariance[i][j] = cov;
                covariance[j][i] = cov;
            }
        }

        let cholesky = cholesky_lower(&covariance);

        Ok(Self {
            means,
            covariance,
            cholesky,
        })
    }

    #[must_use]
    pub fn num_assets(&self) -> usize {
        self.means.len()
    }

    #[must_use]
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    #[must_use]
    pub fn covariance(&self) -> &[Vec<f64>] {
        &self.covariance
    }

    /// Draw one correlated per-asset daily return vector: `mean + L * z`
    /// with `z` i.i.d. standard normal.
    pub fn sample_returns<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        let n = self.num_assets();
        let z: Vec<f64> = (0..n).map(|_| StandardNormal.sample(rng)).collect();

        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            let mut value = self.means[i];
            for j in 0..=i {
                value += self.cholesky[i][j] * z[j];
            }
            out.push(value);
        }
        out
    }
}

/// Lower-triangular Cholesky factor of a symmetric PSD matrix.
///
/// Non-positive diagonal residuals are clamped to zero so that
/// positive-semidefinite input (degenerate or collinear histories)
/// factors without injected noise.
fn cholesky_lower(matrix: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n = matrix.len();
    let mut l = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in 0..=i {
            let mut sum = 0.0;
            for k in 0..j {
                sum += l[i][k] * l[j][k];
            }

            if i == j {
                let residual = matrix[i][i] - sum;
                l[i][j] = if residual > PSD_CLAMP {
                    residual.sqrt()
                } else {
                    0.0
                };
            } else if l[j][j] > 0.0 {
                l[i][j] = (matrix[i][j] - sum) / l[j][j];
            }
            // l[i][j] stays 0.0 when the pivot collapsed to zero.
        }
    }

    l
}
