//! Task store: validated task records scoped to projects.
//!
//! Tasks carry a title, an enumerated status and priority, a deadline and
//! the project they belong to. The store validates writes, answers filtered
//! and paginated per-project listings, and supports partial updates and
//! irreversible deletes. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
