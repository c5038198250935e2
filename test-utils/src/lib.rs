//! VPS Panel Test Utils
//!
//! Provides shared testing utilities for exercising the panel's live backend without a
//! real management API. This crate offers a builder pattern for starting a fake API
//! server on an ephemeral port, seeded with JSON fixtures.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for seeding the fake API and injecting failures
//! - **TestContext**: Running fake API with its base URLs and request log
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: JSON factories for users, servers and nodes
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_servers() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_server(factory::server::create_server())
//!         .build()
//!         .await?;
//!
//!     // Point the backend at test.api_url ...
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
