#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    Message(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Message(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<anyhow::Error> for SourceError {
    fn from(err: anyhow::Error) -> Self {
        SourceError::Message(format!("{err:#}"))
    }
}

/// Supplies an already materialized record set. Where the records come from
/// is the adapter's business; list views only ever see the loaded `Vec`.
pub trait RecordSource<R>: Send + Sync {
    fn load(&self) -> Result<Vec<R>, SourceError>;
}
