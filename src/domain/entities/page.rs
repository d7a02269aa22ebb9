#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPage<T> {
    pub items: Vec<T>,
    /// Records left after search and filters, before pagination.
    pub total_matched: usize,
    pub total_pages: usize,
    /// The page actually served, after clamping.
    pub page_number: i64,
}

impl<T> ResultPage<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_matched: 0,
            total_pages: 0,
            page_number: 1,
        }
    }

    /// True when the requested page lies past the last page of a non-empty
    /// result, so the caller can clamp back to `total_pages`.
    pub fn is_overrun(&self) -> bool {
        self.total_pages > 0 && self.page_number as usize > self.total_pages
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ResultPage<U> {
        ResultPage {
            items: self.items.into_iter().map(f).collect(),
            total_matched: self.total_matched,
            total_pages: self.total_pages,
            page_number: self.page_number,
        }
    }
}

impl<T: Clone> ResultPage<&T> {
    pub fn cloned(self) -> ResultPage<T> {
        self.map(T::clone)
    }
}
