use thiserror::Error;

/// Setup failures a front-end can degrade around instead of halting.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("audio output unavailable: {0}")]
    AudioUnavailable(String),
    #[error("graphics unavailable: {0}")]
    GraphicsUnavailable(String),
    #[error("missing UI element `{0}`")]
    MissingElement(String),
}

