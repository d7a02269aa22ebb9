use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::page::ResultPage;
use crate::domain::entities::query::Query;
use crate::domain::entities::record::Record;
use crate::usecase::ports::repo::{RecordSource, SourceError};
use crate::usecase::services::list_view::ListViewController;

/// Holds one loaded record set and answers list queries against it.
pub struct QueryService<R> {
    source: Arc<dyn RecordSource<R>>,
    controller: ListViewController<R>,
    records: Vec<R>,
}

impl<R: Record> QueryService<R> {
    pub fn new(source: Arc<dyn RecordSource<R>>, controller: ListViewController<R>) -> Self {
        Self {
            source,
            controller,
            records: Vec::new(),
        }
    }

    /// Reloads the record set from the source. On failure the previous
    /// records stay in place.
    pub fn refresh(&mut self) -> Result<usize, SourceError> {
        let records = self.source.load()?;
        debug!(count = records.len(), "record set loaded");
        self.records = records;
        Ok(self.records.len())
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn controller(&self) -> &ListViewController<R> {
        &self.controller
    }

    pub fn query(&self, query: &Query) -> ResultPage<&R> {
        self.controller.compute(&self.records, query)
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }
}
