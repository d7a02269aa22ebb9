use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use tracing::warn;

use crate::domain::entities::gesture::{SwipeDirection, SwipeEvent};
use crate::domain::entities::query::{FilterValue, Query, SortDirection};
use crate::domain::entities::records::Transaction;
use crate::infra::config::{default_config_path, load_config, DashboardConfig};
use crate::infra::import::csv::CsvSource;
use crate::infra::memory::source::InMemorySource;
use crate::platform::desktop::touch::use_swipe;
use crate::ui::state::list_state::ListViewState;
use crate::usecase::services::list_view::ListViewController;
use crate::usecase::services::query_service::QueryService;

const TRANSACTIONS_FILE: &str = "transactions.csv";

const COLUMNS: &[(&str, &str)] = &[
    ("date", "Date"),
    ("description", "Description"),
    ("property", "Property"),
    ("category", "Category"),
    ("amount", "Amount"),
    ("status", "Status"),
];

const STATUS_OPTIONS: &[&str] = &["completed", "pending", "failed"];
const KIND_OPTIONS: &[&str] = &["income", "expense"];

fn load_startup_config() -> DashboardConfig {
    match default_config_path().and_then(|path| load_config(&path)) {
        Ok(config) => config,
        Err(err) => {
            warn!("falling back to default config: {err:#}");
            DashboardConfig::default()
        }
    }
}

fn load_transactions(data_dir: &Path) -> (QueryService<Transaction>, String) {
    let source = Arc::new(CsvSource::<Transaction>::new(data_dir.join(TRANSACTIONS_FILE)));
    let mut service = QueryService::<Transaction>::new(source, ListViewController::for_schema());
    let status = match service.refresh() {
        Ok(count) => format!("Loaded {count} transactions"),
        Err(err) => format!("Failed to load transactions: {err}"),
    };
    (service, status)
}

fn sort_marker(query: &Query, field: &str) -> &'static str {
    match &query.sort {
        Some(sort) if sort.field == field => match sort.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => "",
    }
}

#[component]
fn FilterSelect(
    label: &'static str,
    options: Vec<&'static str>,
    selected: String,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            style: "display: inline-flex; align-items: center; gap: 6px;",
            span { "{label}" }
            select {
                value: "{selected}",
                onchange: move |event| on_select.call(event.value()),
                option { value: "all", "All" }
                for opt in options.iter() {
                    option { value: "{opt}", "{opt}" }
                }
            }
        }
    }
}

#[component]
fn TransactionRow(
    txn: Transaction,
    threshold: f64,
    pulse: Duration,
    selected: bool,
    on_swipe: EventHandler<SwipeEvent>,
) -> Element {
    let mut swipe = use_swipe(threshold, pulse);
    let scale = if swipe.is_tracking() { "0.98" } else { "1" };
    let background = if selected { "#eef4ff" } else { "transparent" };
    let amount = format!("{:.2}", txn.amount);

    rsx! {
        tr {
            style: "transform: scale({scale}); background: {background};",
            ontouchstart: move |event| swipe.touch_start(&event),
            ontouchmove: move |event| swipe.touch_move(&event),
            ontouchend: move |_| {
                if let Some(swipe_event) = swipe.touch_end() {
                    on_swipe.call(swipe_event);
                }
            },
            ontouchcancel: move |_| swipe.touch_cancel(),
            td { "{txn.date}" }
            td { "{txn.description}" }
            td { "{txn.property}" }
            td { "{txn.category}" }
            td { style: "text-align: right;", "{amount}" }
            td { "{txn.status}" }
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(load_startup_config);
    let loaded = use_hook(|| {
        let (service, status) = match config.data_dir() {
            Ok(data_dir) => load_transactions(&data_dir),
            Err(err) => (
                QueryService::<Transaction>::new(
                    Arc::new(InMemorySource::new(Vec::new())),
                    ListViewController::for_schema(),
                ),
                format!("Failed to resolve data directory: {err:#}"),
            ),
        };
        Rc::new((service, status))
    });
    let mut list = ListViewState::new(config.list.page_size);
    let threshold = config.swipe.threshold;
    let pulse = config.swipe.haptic_pulse();

    let (service, status) = &*loaded;
    let query = list.query.read().clone();
    let page = service.query(&query);
    let rows: Vec<Transaction> = page.items.iter().map(|txn| (*txn).clone()).collect();
    let selected_id = list.selected_id.read().clone();
    let selected = selected_id.as_deref().and_then(|id| service.find(id)).cloned();
    let status_filter = query
        .filters
        .get("status")
        .map(FilterValue::as_str)
        .unwrap_or("all")
        .to_string();
    let kind_filter = query
        .filters
        .get("kind")
        .map(FilterValue::as_str)
        .unwrap_or("all")
        .to_string();
    let headers: Vec<(&'static str, String)> = COLUMNS
        .iter()
        .map(|(field, label)| (*field, format!("{label}{}", sort_marker(&query, field))))
        .collect();
    let page_number = page.page_number;
    let total_pages = page.total_pages.max(1);
    let total_matched = page.total_matched;

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 12px;",
            nav {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                input {
                    placeholder: "Search transactions",
                    value: "{query.search_text}",
                    oninput: move |event| list.set_search(event.value()),
                }
                FilterSelect {
                    label: "Status",
                    options: STATUS_OPTIONS.to_vec(),
                    selected: status_filter,
                    on_select: move |value: String| list.set_filter("status", &value),
                }
                FilterSelect {
                    label: "Type",
                    options: KIND_OPTIONS.to_vec(),
                    selected: kind_filter,
                    on_select: move |value: String| list.set_filter("kind", &value),
                }
                span { "{status}" }
            }

            table {
                style: "width: 100%; border-collapse: collapse;",
                thead {
                    tr {
                        for (field, label) in headers {
                            th {
                                style: "cursor: pointer; text-align: left;",
                                onclick: move |_| list.toggle_sort(field),
                                "{label}"
                            }
                        }
                    }
                }
                tbody {
                    {rows.into_iter().map(|txn| {
                        let row_key = txn.id.clone();
                        let id = txn.id.clone();
                        let is_selected = selected_id.as_deref() == Some(id.as_str());
                        rsx!(
                            TransactionRow {
                                key: "{row_key}",
                                txn,
                                threshold,
                                pulse,
                                selected: is_selected,
                                on_swipe: move |event: SwipeEvent| match event.direction {
                                    SwipeDirection::Left => list.select(Some(id.clone())),
                                    SwipeDirection::Right => list.select(None),
                                    SwipeDirection::Up | SwipeDirection::Down => {}
                                },
                            }
                        )
                    })}
                }
            }

            div {
                style: "display: flex; gap: 8px; align-items: center; padding: 8px 0;",
                button {
                    disabled: page_number <= 1,
                    onclick: move |_| list.go_to_page(page_number - 1),
                    "Previous"
                }
                span { "Page {page_number} of {total_pages} ({total_matched} matched)" }
                button {
                    disabled: page_number as usize >= total_pages,
                    onclick: move |_| list.go_to_page(page_number + 1),
                    "Next"
                }
            }

            if let Some(txn) = selected {
                aside {
                    style: "border-top: 1px solid #bbb; margin-top: 12px; padding-top: 8px;",
                    h3 { "{txn.description}" }
                    p { "{txn.date} · {txn.property} · {txn.category}" }
                    p { "{txn.kind} {txn.amount} ({txn.status})" }
                    button { onclick: move |_| list.select(None), "Close" }
                }
            }
        }
    }
}
