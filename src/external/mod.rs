use thiserror::Error;

pub mod dmenu;
pub mod process;
pub mod xprop;

#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// Non-zero exit without any stderr text, e.g. the menu was cancelled
    #[error("cancelled")]
    SilentAbort,
    #[error("{0}")]
    Fatal(String),
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Window property access on the browser window.
pub trait Properties {
    fn get(&self, name: &str) -> Result<String, CollaboratorError>;
    fn set(&self, name: &str, value: &str) -> Result<(), CollaboratorError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRequest {
    pub prompt: String,
    pub candidates: Vec<String>,
    /// Overrides the configured row count
    pub lines: Option<u32>,
}

/// An interactive picker returning the chosen or typed line, trimmed.
pub trait Menu {
    fn prompt(&self, request: &MenuRequest) -> Result<String, CollaboratorError>;
}
