use thiserror::Error;

pub type Result<T> = std::result::Result<T, FbbError>;

#[derive(Debug, Error)]
pub enum FbbError {
    #[error("municipality id does not round-trip as an integer: {0:?}")]
    InvalidMunicipalityId(String),

    #[error("page '{0}' is not in the cache")]
    PageNotCached(String),

    #[error(transparent)]
    Extract(#[from] fbb_extract::ExtractError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid request header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
