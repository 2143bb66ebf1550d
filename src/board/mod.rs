//! Kanban board projection over the task store.
//!
//! The board groups one project's tasks into three columns and mirrors
//! drag-and-drop moves and removals back to storage:
//!
//! - Column vocabulary and grouping in [`domain`]
//! - The gateway contract to storage in [`ports`]
//! - In-process and HTTP gateways in [`adapters`]
//! - The stateful projector in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
