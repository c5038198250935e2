//! Plain-Rust logic behind the views: route guard, server lifecycle,
//! provisioning wizard, form validation, billing and dashboard summaries.

pub mod billing;
pub mod guard;
pub mod lifecycle;
pub mod provision;
pub mod summary;
pub mod validation;

#[cfg(test)]
mod test;
