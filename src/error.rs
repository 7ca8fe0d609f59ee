/// Failures of the collaborators around the ranker: preference files,
/// the call-sign dictionary, the contest log and host colour settings.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Preference parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Invalid colour: {0}")]
    Color(String),
}
