//! coursecraft-core — Shared primitives for the coursecraft components.
//!
//! This crate holds the small pieces every component crate needs:
//! opaque identifier generation, decimal rounding, and the label-parse
//! error type.

pub mod error;
pub mod ident;
pub mod round;

pub use error::LabelError;
pub use ident::short_id;
pub use round::round_dp;
