//! Wire types exchanged with the management API.
//!
//! Every DTO serializes to the camelCase JSON the API speaks. The same types are
//! stored verbatim by the simulated backend, so anything that round-trips through
//! the live API also round-trips through local storage.

pub mod api;
pub mod billing;
pub mod catalog;
pub mod node;
pub mod proxmox;
pub mod server;
pub mod user;
