use serde::Deserialize;

/// Generator configuration, read from `config.toml` next to the binary.
/// Every field has a default so the file is optional.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub results: ResultsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResultsConfig {
    /// Directory holding the `<library>-aggregation.json` / `<library>.json` files.
    pub dir: String,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            dir: "results".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Base path for the table badge; the light variant lands next to it.
    pub table: String,
    /// Base path for the streaming badge.
    pub streaming: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            table: "benchmark-table.svg".into(),
            streaming: "benchmark-streaming.svg".into(),
        }
    }
}

impl AppConfig {
    /// Loads `config.toml`; built-in defaults when the file is absent.
    pub fn load() -> anyhow::Result<Self> {
        match std::fs::read_to_string("config.toml") {
            Ok(s) => Self::load_from_str(&s),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.results.dir.is_empty(), "results.dir must be non-empty");
        anyhow::ensure!(
            self.output.table.ends_with(".svg"),
            "output.table must end with .svg, got {}",
            self.output.table
        );
        anyhow::ensure!(
            self.output.streaming.ends_with(".svg"),
            "output.streaming must end with .svg, got {}",
            self.output.streaming
        );
        Ok(())
    }
}
