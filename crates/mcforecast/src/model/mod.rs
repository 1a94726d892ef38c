mod ensemble;
mod portfolio;
mod prices;

pub use ensemble::Ensemble;
pub use portfolio::{Portfolio, PortfolioError, WEIGHT_SUM_TOLERANCE};
pub use prices::{Asset, PricePoint};

pub(crate) use portfolio::validate_weights;
