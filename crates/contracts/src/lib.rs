//! Data contract shared between the portfolio frontend and its backend.
//!
//! Everything here is plain data plus pure helpers, so it builds and tests
//! on any target.

pub mod domain;
pub mod enums;
pub mod shared;

pub use domain::portfolio::Portfolio;
