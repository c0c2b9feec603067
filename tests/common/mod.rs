//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

pub use mock_backend::{MockResponse, MockServer};
