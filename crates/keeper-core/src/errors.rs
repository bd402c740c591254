/// Core error type for the keeper.
///
/// Adapter crates map their specific errors into this type so the relay can
/// report every failure the same way (one generic notice to the user).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, Error>;
