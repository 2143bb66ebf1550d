//! Board gateway implementations.
//!
//! [`service::ServiceBoardGateway`] calls the task store in-process;
//! [`http::HttpBoardGateway`] reaches it over the task API.

pub mod http;
pub mod service;

pub use http::HttpBoardGateway;
pub use service::ServiceBoardGateway;
