//! Individual transformation stages
//!
//! Each stage implements the `Runnable` trait.

pub mod expansion;
pub mod normalization;
pub mod parsing;

pub use expansion::Expansion;
pub use normalization::Normalization;
pub use parsing::Parsing;
