//! Step definitions for board move scenarios.

pub mod given;
pub mod then;
pub mod when;
