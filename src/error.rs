use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Empty menu: {0}")]
    EmptyMenu(String),

    #[error("Invalid dish: {0}")]
    InvalidDish(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Observer failed: {0}")]
    Observer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl MenuError {
    /// The human-readable message carried by the error, without the kind prefix.
    pub fn message(&self) -> String {
        match self {
            MenuError::InvalidTime(msg)
            | MenuError::EmptyMenu(msg)
            | MenuError::InvalidDish(msg)
            | MenuError::NotFound(msg)
            | MenuError::Observer(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind() {
        let err = MenuError::InvalidTime("25:00 is out of range".to_string());
        assert_eq!(err.to_string(), "Invalid time: 25:00 is out of range");
    }

    #[test]
    fn test_message_strips_kind() {
        let err = MenuError::EmptyMenu("The menu is empty.".to_string());
        assert_eq!(err.message(), "The menu is empty.");
    }
}
