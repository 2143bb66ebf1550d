//! Application services for the board projection.

mod projector;

pub use projector::{BoardProjector, BoardProjectorError, BoardProjectorResult};
