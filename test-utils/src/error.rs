use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to bind or inspect the fake API's listening socket.
    #[error("Failed to start fake API: {0}")]
    Io(#[from] std::io::Error),
}
