use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::catalog::{CatalogError, Snapshot};

pub const ITEMS_FILE: &str = "items.csv";
pub const USERS_FILE: &str = "users.csv";
pub const INTERACTIONS_FILE: &str = "interactions.csv";

/// Source of the dataset snapshot served by the API.
///
/// Implementations must return all three tables or fail; partial snapshots are
/// never handed to the catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SnapshotLoader: Send + Sync {
    async fn load(&self) -> Result<Snapshot, CatalogError>;

    /// Loader name for logging
    fn name(&self) -> &'static str;
}

/// Loads `items.csv`, `users.csv` and `interactions.csv` from a directory
#[derive(Debug, Clone)]
pub struct CsvSnapshotLoader {
    data_dir: PathBuf,
}

impl CsvSnapshotLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    async fn read_table<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, CatalogError> {
        let path = self.data_dir.join(file);
        let bytes = read_required(&path).await?;

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(bytes.as_slice());

        let rows = reader
            .deserialize()
            .collect::<Result<Vec<T>, _>>()
            .map_err(|source| CatalogError::Parse {
                file: path.display().to_string(),
                source,
            })?;

        tracing::debug!(file = %path.display(), rows = rows.len(), "Table read");
        Ok(rows)
    }
}

async fn read_required(path: &Path) -> Result<Vec<u8>, CatalogError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(CatalogError::MissingDataset(path.display().to_string()))
        }
        Err(source) => Err(CatalogError::Io {
            file: path.display().to_string(),
            source,
        }),
    }
}

#[async_trait::async_trait]
impl SnapshotLoader for CsvSnapshotLoader {
    async fn load(&self) -> Result<Snapshot, CatalogError> {
        tracing::info!(data_dir = %self.data_dir.display(), "Loading dataset snapshot");

        let items = self.read_table(ITEMS_FILE).await?;
        let users = self.read_table(USERS_FILE).await?;
        let interactions = self.read_table(INTERACTIONS_FILE).await?;

        Ok(Snapshot {
            items,
            users,
            interactions,
        })
    }

    fn name(&self) -> &'static str {
        "csv"
    }
}
