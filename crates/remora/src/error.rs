pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no routing strategy registered for style {style:?}")]
    UnknownStyle { style: String },

    #[error("routing strategy {style:?} failed to construct: {message}")]
    Construction { style: String, message: String },
}
