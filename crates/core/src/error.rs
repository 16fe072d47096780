#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown {choice} value: {value:?}")]
    UnknownChoice { choice: &'static str, value: String },
}
