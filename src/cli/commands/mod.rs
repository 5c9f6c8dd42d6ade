//! CLI command implementations.

pub mod correlate;
pub mod eda;
pub mod technicals;
pub mod validate;
