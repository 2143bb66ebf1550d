//! Taskboard: project task store, REST API and Kanban board projection.
//!
//! The crate stores tasks scoped to projects, serves them over an
//! authenticated JSON API, and projects a project's tasks onto a
//! three-column board whose moves are persisted back to the store.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP, etc.)
//!
//! # Modules
//!
//! - [`task`]: Task records, validation, filtering and pagination
//! - [`board`]: Status normalisation, column grouping and board moves
//! - [`http`]: Axum router, authentication and request tracing
//! - [`client`]: Typed client for the task API
//! - [`config`]: Environment-driven server configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod board;
pub mod client;
pub mod config;
pub mod http;
pub mod task;
pub mod telemetry;
