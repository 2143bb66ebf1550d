//! Port contracts for the board projection.

pub mod gateway;

pub use gateway::{BoardGateway, BoardGatewayError, BoardGatewayResult};

#[cfg(test)]
pub use gateway::MockBoardGateway;
