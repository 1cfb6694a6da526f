use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no browser window available")]
    NoWindow,
    #[error("canvas element #{0} not found")]
    MissingCanvas(String),
    #[error("canvas #{0} has no 2d context")]
    NoContext(String),
    #[error("drawing surface unavailable")]
    NoSurface,
}
