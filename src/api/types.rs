#[derive(Debug, thiserror::Error)]
pub enum PhonyError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error(transparent)]
    Translate(#[from] phony_core::TranslateError),
    #[error("internal error: {msg}")]
    Internal { msg: String },
}
