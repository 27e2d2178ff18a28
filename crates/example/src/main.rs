//! Demo: bind, tear down, and re-bind the banner widgets.
//!
//! Builds a small document with three marked sections, initializes the
//! widgets bound to them, logs the injected content, destroys everything in
//! reverse order, and re-initializes to show the tree is cleanly re-bindable.
//!
//! # Usage
//!
//! ```bash
//! banners
//! ```

use std::sync::Arc;

use example::{demo_document, demo_registry};
use trellis_core::{LogObserver, WidgetCore};
use trellis_widget::WidgetFactory;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .ok();

    let (document, sections) = demo_document();
    let mut core = WidgetCore::new(Arc::clone(&document), WidgetFactory::new(demo_registry()))
        .with_observer(Arc::new(LogObserver::new()));

    if let Err(error) = core.init(document.root()).await {
        tracing::error!(%error, "widget initialization failed");
        return;
    }

    for &section in &sections {
        if let Some(banner) = document.first_child(section) {
            tracing::info!(
                section = %section,
                content = document.text(banner).as_deref().unwrap_or(""),
                "mounted banner"
            );
        }
    }

    if let Err(error) = core.destroy(document.root()) {
        tracing::error!(%error, "widget teardown failed");
        return;
    }

    // A clean teardown leaves every section re-bindable.
    if let Err(error) = core.init(document.root()).await {
        tracing::error!(%error, "widget re-initialization failed");
    }
}
