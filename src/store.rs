// Result store: loads per-library aggregation + raw JSON over a pluggable
// source (filesystem or HTTP). All libraries are fetched concurrently and
// fail independently; a missing/malformed aggregation excludes the library,
// a missing/malformed raw file only empties its raw list.

use crate::libraries::Library;
use crate::models::{AggregationFile, RawBenchmark, RawFile, VersionAggregate};
use futures_util::future::join_all;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Transport-level fetch failure.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("resource not found: {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

/// A resource failed to load: either the transport couldn't produce bytes
/// or the bytes weren't valid JSON for the expected shape.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Fatal store failure: not a single library produced usable data.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no benchmark data loaded for any library")]
    NoData,
}

/// Read-only byte source for result files, keyed by file name.
pub trait ResultSource: Sync {
    fn fetch(
        &self,
        file_name: &str,
    ) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

/// Reads result files from a local directory.
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResultSource for FsSource {
    async fn fetch(&self, file_name: &str) -> Result<Vec<u8>, FetchError> {
        let path = self.root.join(file_name);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(FetchError::NotFound(path.display().to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Fetches result files from a hosted results directory.
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

impl ResultSource for HttpSource {
    async fn fetch(&self, file_name: &str) -> Result<Vec<u8>, FetchError> {
        let url = format!("{}/{}", self.base_url, file_name);
        let response = self.client.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(url));
        }
        let response = response.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

async fn fetch_json<T, S>(source: &S, file_name: &str) -> Result<T, ResourceError>
where
    T: DeserializeOwned,
    S: ResultSource,
{
    let bytes = source.fetch(file_name).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Fetches and validates one library's aggregation resource.
pub async fn fetch_aggregations<S: ResultSource>(
    source: &S,
    library: &Library,
) -> Result<Vec<VersionAggregate>, ResourceError> {
    let file: AggregationFile = fetch_json(source, &library.aggregation_file()).await?;
    Ok(file.aggregations)
}

/// Everything loaded for one library.
#[derive(Debug, Clone, Default)]
pub struct LibraryData {
    pub aggregations: Vec<VersionAggregate>,
    pub raw_benchmarks: Vec<RawBenchmark>,
}

/// In-memory mapping of library name to its loaded results.
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    by_library: HashMap<String, LibraryData>,
}

impl ResultStore {
    /// Loads all libraries concurrently. Per-library failures degrade or
    /// exclude that library only; the load as a whole fails only when zero
    /// libraries produced data.
    pub async fn load<S: ResultSource>(
        source: &S,
        libraries: &[Library],
    ) -> Result<Self, StoreError> {
        let loads = libraries.iter().map(|lib| load_library(source, lib));
        let mut by_library = HashMap::new();
        for (name, data) in join_all(loads).await.into_iter().flatten() {
            by_library.insert(name, data);
        }
        if by_library.is_empty() {
            return Err(StoreError::NoData);
        }
        Ok(Self { by_library })
    }

    pub fn get(&self, library_name: &str) -> Option<&LibraryData> {
        self.by_library.get(library_name)
    }

    pub fn library_count(&self) -> usize {
        self.by_library.len()
    }

    /// Builds a store directly from entries (tests and fixtures).
    pub fn from_entries(entries: impl IntoIterator<Item = (String, LibraryData)>) -> Self {
        Self {
            by_library: entries.into_iter().collect(),
        }
    }
}

async fn load_library<S: ResultSource>(
    source: &S,
    library: &Library,
) -> Option<(String, LibraryData)> {
    let aggregations = match fetch_aggregations(source, library).await {
        Ok(aggregations) => aggregations,
        Err(e) => {
            warn!(
                library = library.name,
                error = %e,
                "aggregation resource unavailable; library excluded"
            );
            return None;
        }
    };

    let raw_benchmarks = match fetch_json::<RawFile, _>(source, &library.raw_file()).await {
        Ok(file) => file.benchmarks,
        Err(e) => {
            warn!(
                library = library.name,
                error = %e,
                "raw resource unavailable; keeping aggregations only"
            );
            Vec::new()
        }
    };

    Some((
        library.name.to_string(),
        LibraryData {
            aggregations,
            raw_benchmarks,
        },
    ))
}
