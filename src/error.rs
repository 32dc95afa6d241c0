use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid state transition: {current} -> {requested}")]
    InvalidTransition { current: String, requested: String },

    #[error("Element not found: #{id}")]
    ElementNotFound { id: String },

    #[error("Unknown sample preset: {name}")]
    UnknownPreset { name: String },
}

impl Clone for Error {
    fn clone(&self) -> Self {
        match self {
            Self::Config(s) => Self::Config(s.clone()),
            Self::Transport(s) => Self::Transport(s.clone()),
            Self::Dom(s) => Self::Dom(s.clone()),
            Self::InvalidTransition { current, requested } => Self::InvalidTransition {
                current: current.clone(),
                requested: requested.clone(),
            },
            Self::ElementNotFound { id } => Self::ElementNotFound { id: id.clone() },
            Self::UnknownPreset { name } => Self::UnknownPreset { name: name.clone() },
            // Wrapped library errors are not Clone; keep their message
            Self::Serialization(e) => Self::Transport(format!("Serialization error: {}", e)),
            Self::Yaml(e) => Self::Config(format!("YAML error: {}", e)),
            Self::Io(e) => Self::Config(format!("IO error: {}", e)),
            Self::Network(e) => Self::Transport(format!("Network error: {}", e)),
        }
    }
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn dom(msg: impl Into<String>) -> Self {
        Self::Dom(msg.into())
    }

    pub fn element_not_found(id: impl Into<String>) -> Self {
        Self::ElementNotFound { id: id.into() }
    }

    /// True for failures that happened while talking to the endpoint
    /// (connection, HTTP body, JSON decoding) rather than a reply the server
    /// chose to send.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Network(_) | Self::Serialization(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_classification() {
        assert!(Error::transport("connection refused").is_transport());
        assert!(Error::Serialization(serde_json::from_str::<u8>("x").unwrap_err()).is_transport());
        assert!(!Error::config("bad level").is_transport());
        assert!(!Error::element_not_found("churnBar").is_transport());
    }

    #[test]
    fn test_clone_keeps_message() {
        let err = Error::Serialization(serde_json::from_str::<u8>("x").unwrap_err());
        let cloned = err.clone();
        assert!(cloned.is_transport());
        assert!(cloned.to_string().contains("Serialization error"));
    }
}
