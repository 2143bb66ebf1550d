//! Unit tests for the board projection.
