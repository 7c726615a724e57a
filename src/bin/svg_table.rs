// Generates the README benchmark table badge (dark + light variants).
//
// Usage: svg-table [OUTPUT_PATH]
//   OUTPUT_PATH  dark-variant path; light lands at <base>-light.svg
//                (default from config.toml, else benchmark-table.svg)

use anyhow::Result;
use benchviz::config::AppConfig;
use benchviz::store::FsSource;
use benchviz::svg::{self, Scheme};
use benchviz::{logging, version};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    info!(name = version::NAME, version = version::VERSION, "svg-table generator");

    let config = AppConfig::load()?;
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.output.table.clone());

    let source = FsSource::new(&config.results.dir);
    let data = svg::load_badge_data(&source, false).await;
    if data.is_empty() {
        anyhow::bail!("no aggregation data found in {}", config.results.dir);
    }

    info!(libraries = data.len(), "loaded aggregation data");
    for entry in &data {
        info!(
            library = entry.library.display_name,
            version = %entry.version,
            "latest stable"
        );
    }

    std::fs::write(&output, svg::table::generate(&data, Scheme::Dark))?;
    info!(path = %output, "dark table written");

    let light_output = svg::light_variant(&output);
    std::fs::write(&light_output, svg::table::generate(&data, Scheme::Light))?;
    info!(path = %light_output, "light table written");

    Ok(())
}
