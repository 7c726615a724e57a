// Generates the README streaming-benchmark badge (dark + light variants).
//
// Usage: svg-streaming [OUTPUT_PATH]
//   OUTPUT_PATH  dark-variant path; light lands at <base>-light.svg
//                (default from config.toml, else benchmark-streaming.svg)

use anyhow::Result;
use benchviz::config::AppConfig;
use benchviz::store::FsSource;
use benchviz::svg::{self, Scheme};
use benchviz::{logging, version};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    info!(name = version::NAME, version = version::VERSION, "svg-streaming generator");

    let config = AppConfig::load()?;
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.output.streaming.clone());

    let source = FsSource::new(&config.results.dir);
    let data = svg::load_badge_data(&source, true).await;
    if data.is_empty() {
        anyhow::bail!(
            "no streaming library data found in {}",
            config.results.dir
        );
    }

    info!(libraries = data.len(), "loaded streaming aggregation data");
    for entry in &data {
        info!(
            library = entry.library.display_name,
            version = %entry.version,
            "latest stable"
        );
    }

    std::fs::write(&output, svg::streaming::generate(&data, Scheme::Dark))?;
    info!(path = %output, "dark charts written");

    let light_output = svg::light_variant(&output);
    std::fs::write(&light_output, svg::streaming::generate(&data, Scheme::Light))?;
    info!(path = %light_output, "light charts written");

    Ok(())
}
