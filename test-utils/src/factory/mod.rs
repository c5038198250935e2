//! Factory methods for creating test data.
//!
//! Every factory produces the camelCase JSON the management API speaks, with
//! unique ids drawn from `helpers::next_id`. Each resource has a `Factory` struct
//! for customization and a `create_*` convenience function for the defaults.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let server = factory::server::ServerFactory::new()
//!     .name("db-1")
//!     .status("stopped")
//!     .build();
//! ```

pub mod helpers;
pub mod node;
pub mod server;
pub mod user;
