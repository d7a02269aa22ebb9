use crate::usecase::ports::repo::{RecordSource, SourceError};

/// A record set compiled into the app or built at startup.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource<R> {
    records: Vec<R>,
}

impl<R> InMemorySource<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }
}

impl<R: Clone + Send + Sync> RecordSource<R> for InMemorySource<R> {
    fn load(&self) -> Result<Vec<R>, SourceError> {
        Ok(self.records.clone())
    }
}
