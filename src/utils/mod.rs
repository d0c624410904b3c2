//! Utility functions

mod humanize;
mod normalize;

pub use humanize::{MIN_SIGN, SEC_SIGN, humanized_duration, humanized_duration_with};
pub use normalize::normalize_name;
