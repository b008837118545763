//! Odekake CLI
//!
//! Loads `config.json` and `data.json` from a base URL or local directory
//! and writes the rendered gallery page. A failed load is logged and
//! halts rendering, leaving no partial output.

use clap::Parser;
use odekake::fetch::Loader;
use odekake::render::render_page;
use odekake::session::Session;
use odekake::view::card::CardList;
use odekake::view::filter::FilterBar;
use odekake::view::format_date_short;
use odekake::view::overlay::DetailOverlay;
use odekake::ALL_CATEGORIES;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "odekake")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Renders a place-log card gallery from config.json and data.json")]
struct Cli {
    /// Base URL or local directory holding config.json and data.json
    #[arg(long, default_value = ".")]
    source: String,

    /// Initial category filter ("all" or a category id)
    #[arg(long, default_value = ALL_CATEGORIES)]
    filter: String,

    /// Open the detail overlay for the place with this name
    #[arg(long)]
    detail: Option<String>,

    /// Write the rendered page here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "odekake=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let loader = if cli.source.starts_with("http://") || cli.source.starts_with("https://") {
        Loader::http(&cli.source)
    } else {
        Loader::dir(&cli.source)
    };

    // A failed load halts initialization; nothing past this point renders.
    let session = match Session::initialize(&loader).await {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("Failed to load: {e}");
            return Ok(());
        }
    };

    let mut bar = FilterBar::new(&session.config().categories);
    let selection = bar.select(&cli.filter);
    if selection != cli.filter {
        tracing::warn!(filter = %cli.filter, "no such filter, keeping \"all\"");
    }

    let visible = session.places().filter_by_category(bar.active_id());
    let cards = CardList::build(&visible, session.categories());

    let mut overlay = DetailOverlay::default();
    if let Some(name) = &cli.detail {
        match visible.iter().find(|p| &p.name == name) {
            Some(place) => overlay.open(place, session.categories()),
            None => tracing::warn!(name = %name, "no visible place with that name"),
        }
    }

    let html = render_page(&session, &bar, &cards, &overlay);
    match &cli.out {
        Some(path) => {
            tokio::fs::write(path, &html).await?;
            tracing::info!(?path, cards = cards.len(), "page written");
        }
        None => print!("{html}"),
    }

    if let Some(latest) = session.places().latest_date() {
        tracing::info!("last updated {}", format_date_short(latest));
    }

    Ok(())
}
