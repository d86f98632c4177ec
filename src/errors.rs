use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnexError {
    #[error(
        "Component already registered for target \"{name}\", cannot register multiple components for the same extension point in the same extension registry."
    )]
    DuplicateRegistration { name: String },

    #[error("Props must be a JSON object, got {0}")]
    InvalidProps(String),

    #[error("Override for slot '{slot}' requires a text value")]
    MissingText { slot: String },

    #[error("Unsupported manifest format: {0}")]
    UnsupportedManifest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, AnnexError>;
