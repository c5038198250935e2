use super::*;

mod auth;
mod errors;
mod server;
