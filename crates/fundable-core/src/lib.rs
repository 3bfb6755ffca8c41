pub mod error;
pub mod funding;
pub mod listing;
pub mod types;

#[cfg(feature = "edgar")]
pub mod edgar;

pub use error::FundableError;
pub use types::*;

/// Standard result type for all fundable operations
pub type FundableResult<T> = Result<T, FundableError>;
