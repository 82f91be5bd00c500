use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("network error: {0}")]
    NetworkError(#[from] std::io::Error),
    #[error("codec error: {0}")]
    CodecError(#[from] tokio_util::codec::LinesCodecError),
    #[error("serde error: {0}")]
    SerdeError(#[from] serde_json::error::Error),
    #[error("name pool exhausted after {retries} draws and suffixes up to {max_suffix}")]
    NamePoolExhausted { retries: usize, max_suffix: u32 },
    #[error("invalid word pool: {0}")]
    InvalidPool(String),
    #[error("name `{0}` is already taken")]
    NameTaken(String),
    #[error("chat error: {0}")]
    ChatError(String),
}
