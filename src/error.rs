use std::fmt;

/// Unified error type for pool operations
#[derive(Debug)]
pub enum Error {
    /// Requested size exceeds the largest configured size class
    BlockTooLarge { requested: usize, max: usize },

    /// Pool configuration rejected at construction
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BlockTooLarge { requested, max } => write!(
                f,
                "Requested block of {} bytes exceeds largest size class of {} bytes",
                requested, max
            ),
            Error::InvalidConfig(msg) => write!(f, "Invalid pool configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Result type alias for pool operations
pub type Result<T> = std::result::Result<T, Error>;
