//! Navigation Views - Main Entry Point
//!
//! Renders the views with the configured locale and token sheet and prints
//! the result to stdout.
//!
//! Usage: `navigation-views [S|M|L] [--json]`

use std::io::Write;

use anyhow::Context;
use navigation_views::components::layout::NavigationMainLayout;
use navigation_views::components::primitives::NativeBlock;
use navigation_views::config::ViewConfig;
use navigation_views::render::{Node, RenderContext, RenderOnce, div};

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut json = false;
    let mut size = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ => size = Some(arg),
        }
    }

    let config = ViewConfig::from_env().context("failed to load view config")?;
    let cx = RenderContext::from_config(&config).context("failed to build render context")?;
    tracing::info!(locale = cx.locale().as_str(), "Rendering navigation views");

    let mut layout = NavigationMainLayout::new(div().child("Menu"));
    if let Some(size) = &size {
        layout = layout.list_size_token(size);
    }

    let page = Node::Fragment {
        children: vec![layout.render(&cx), NativeBlock::new().render(&cx)],
    };

    let output = if json { page.to_json()? } else { page.to_html() };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}")?;

    Ok(())
}
