use dioxus::prelude::*;

use crate::domain::entities::query::{FilterValue, Query};
use crate::usecase::services::list_view::toggle_sort;

/// The query a list view currently shows, owned by the view.
#[derive(Clone, Copy)]
pub struct ListViewState {
    pub query: Signal<Query>,
    pub selected_id: Signal<Option<String>>,
}

impl ListViewState {
    pub fn new(page_size: i64) -> Self {
        Self {
            query: use_signal(|| Query::default().with_page(1, page_size)),
            selected_id: use_signal(|| None::<String>),
        }
    }

    pub fn set_search(&mut self, text: String) {
        let mut query = self.query.write();
        query.search_text = text;
        query.page.number = 1;
    }

    pub fn set_filter(&mut self, field: &str, value: &str) {
        let mut query = self.query.write();
        query
            .filters
            .insert(field.to_string(), FilterValue::parse(value));
        query.page.number = 1;
    }

    pub fn toggle_sort(&mut self, field: &str) {
        let next = toggle_sort(self.query.read().sort.as_ref(), field);
        self.query.write().sort = next;
    }

    pub fn go_to_page(&mut self, number: i64) {
        self.query.write().page.number = number.max(1);
    }

    pub fn select(&mut self, id: Option<String>) {
        self.selected_id.set(id);
    }
}
