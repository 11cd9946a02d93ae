//! Compound growth engine behind the interactive calculator.
//!
//! `growth` holds the simulation and the figures derived from it;
//! `format` turns those figures into display strings.

pub mod error;
pub mod format;
pub mod growth;
pub mod types;

pub use error::GrowthError;
pub use types::*;

/// Standard result type for all compound-growth operations
pub type GrowthResult<T> = Result<T, GrowthError>;
