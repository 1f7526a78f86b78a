use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MenuLoadError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {text}")]
    Http { status: u16, text: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("No menu data available")]
    NoData,
    /// Every source failed; carries the last cause
    #[error("Failed to load any menu data format ({0})")]
    AllSourcesExhausted(Box<MenuLoadError>),
}

impl From<serde_json::Error> for MenuLoadError {
    fn from(e: serde_json::Error) -> Self {
        MenuLoadError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_message_includes_cause() {
        let err = MenuLoadError::AllSourcesExhausted(Box::new(MenuLoadError::Http {
            status: 404,
            text: "Not Found".into(),
        }));
        assert_eq!(err.to_string(), "Failed to load any menu data format (HTTP 404: Not Found)");
    }
}
