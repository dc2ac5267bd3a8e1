use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("No item titled '{title}' in the catalog")]
    NotFound { title: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl LibraryError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn not_found(title: impl Into<String>) -> Self {
        Self::NotFound {
            title: title.into(),
        }
    }

    /// Short message suitable for printing to the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { message } => message.clone(),
            Self::NotFound { title } => format!("Could not find '{}'", title),
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::ConfigParseError { .. } => "The catalog file is not valid TOML".to_string(),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Catalog file has a bad '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "Use 'book' or 'magazine' and a whole-number issue",
            Self::NotFound { .. } => "Check the title spelling; case does not matter",
            Self::IoError(_) => "Make sure the file exists and is readable",
            Self::ConfigParseError { .. } => "Check the file against the [[items]] layout",
            Self::InvalidConfigValueError { .. } => "Fix the named field and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;
