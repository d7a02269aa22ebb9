//! List views and swipe gestures for the property-management dashboard.
//!
//! [`ListViewController`] turns a record set and a [`Query`] into one visible
//! page; [`SwipeGestureRecognizer`] turns a touch sequence into at most one
//! swipe. Both are plain synchronous values with no shared state.

pub mod domain {
    pub mod entities {
        pub mod gesture;
        pub mod page;
        pub mod query;
        pub mod record;
        pub mod records;
    }
}

pub mod usecase {
    pub mod ports {
        pub mod haptics;
        pub mod repo;
    }

    pub mod services {
        pub mod list_view;
        pub mod query_service;
        pub mod swipe;
    }
}

pub mod infra {
    pub mod config;

    pub mod import {
        pub mod csv;
        pub mod xlsx;
    }

    pub mod memory {
        pub mod source;
    }
}

#[cfg(any(feature = "desktop", feature = "web", feature = "mobile"))]
pub mod ui {
    pub mod state {
        pub mod list_state;
    }
}

#[cfg(any(feature = "desktop", feature = "web", feature = "mobile"))]
pub mod platform {
    pub mod desktop {
        pub mod touch;
    }
}

#[cfg(any(feature = "desktop", feature = "web", feature = "mobile"))]
pub mod app;

pub use domain::entities::gesture::{GestureState, Point, SwipeDirection, SwipeEvent};
pub use domain::entities::page::ResultPage;
pub use domain::entities::query::{FilterValue, PageRequest, Query, SortDirection, SortSpec};
pub use domain::entities::record::{FieldValue, Record, RecordSchema};
pub use usecase::services::list_view::ListViewController;
pub use usecase::services::swipe::SwipeGestureRecognizer;
