//! Fench's Navigator - neon landing page for the FenchsApps projects
//!
//! Launches the page in a desktop window or in the browser, depending on the
//! enabled platform feature. Without one, writes the page as static HTML.

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Logs go to stderr so an exported page on stdout stays clean
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fench_navigator=info")),
        )
        .init();

    info!("Starting Fench's Navigator v{}", env!("CARGO_PKG_VERSION"));

    launch();
}

#[cfg(feature = "desktop")]
fn launch() {
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
    use fench_navigator::app::App;

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::default().with_window(
                WindowBuilder::new()
                    .with_title(fench_navigator::view::SITE_TITLE)
                    .with_inner_size(LogicalSize::new(1200.0, 800.0)),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "web", not(feature = "desktop")))]
fn launch() {
    dioxus::LaunchBuilder::web().launch(fench_navigator::app::App);
}

/// Write the default page to the path in the first argument, or to stdout
#[cfg(not(any(feature = "desktop", feature = "web")))]
fn launch() {
    use fench_navigator::export::{render_document, write_document};
    use fench_navigator::state::PageState;
    use std::io::Write;

    let state = PageState::default();
    let result = match std::env::args_os().nth(1) {
        Some(path) => write_document(path, &state),
        None => render_document(&state).and_then(|html| {
            std::io::stdout().lock().write_all(html.as_bytes())?;
            Ok(())
        }),
    };

    if let Err(error) = result {
        tracing::error!("Failed to export page: {}", error);
        std::process::exit(1);
    }
}
