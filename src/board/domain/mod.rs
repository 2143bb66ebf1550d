//! Domain model for the Kanban board projection.
//!
//! The board is a presentation-layer derivation over task store contents and
//! is never the system of record.

mod board;
mod column;

pub use board::Board;
pub use column::BoardColumn;
