use thiserror::Error;

/// Reasons a trigger table override can be rejected
#[derive(Error, Debug)]
pub enum TableError {
    #[error("trigger map is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("trigger map must be a JSON object keyed by phrase")]
    NotAnObject,

    #[error("trigger map contains an empty phrase")]
    EmptyPhrase,

    #[error("phrase \"{0}\" appears more than once")]
    DuplicatePhrase(String),

    #[error("phrase \"{phrase}\": {reason}")]
    InvalidEntry { phrase: String, reason: String },

    #[error("phrase \"{phrase}\": degree must be 1 or 2, got {degree}")]
    InvalidDegree { phrase: String, degree: u64 },
}
