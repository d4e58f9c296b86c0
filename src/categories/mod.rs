//! Emission category modules
//!
//! Each category is implemented in its own module and owns its emission
//! factors plus the raw (unrounded) annual formula. Rounding and totalling
//! happen in the estimator, not here.

pub mod electricity;
pub mod food;
pub mod transport;
