//! HTTP client for the task API.
//!
//! Credentials travel in an explicit [`Session`] passed to every call; the
//! client itself holds no ambient authentication state.

mod api;
mod error;
mod session;

pub use api::{TaskApiClient, TaskListing};
pub use error::{ClientError, ClientResult};
pub use session::Session;

#[cfg(test)]
mod tests;
