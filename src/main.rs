use estate_lists::app::App;
use estate_lists::infra::config::{ensure_webview_data_dir, project_dirs};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    init_tracing();

    let webview_data_dir = project_dirs()
        .and_then(|dirs| ensure_webview_data_dir(dirs.data_local_dir()))
        .expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new().with_title("Estate Dashboard"),
                )
                .with_data_directory(webview_data_dir),
        )
        .launch(App);
}
