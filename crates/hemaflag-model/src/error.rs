use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown profile: {0} (expected v1 or v2)")]
    UnknownProfile(String),
    #[error("unknown marker: {0} (expected AWBC or SRBC)")]
    UnknownMarker(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
