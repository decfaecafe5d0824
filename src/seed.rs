use crate::error::{Result, VocabError};
use crate::logger;
use crate::models::WordPair;
use crossbeam_channel::Sender;
use std::path::PathBuf;
use std::thread;

/// Supplies the initial word list when storage is empty.
pub trait SeedSource: Send {
    fn fetch(&self) -> Result<Vec<WordPair>>;
    fn describe(&self) -> String;
}

/// A JSON array of `{"en": ..., "ja": ...}` objects on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSeed {
    pub path: PathBuf,
}

impl JsonFileSeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read(&self) -> Result<Vec<WordPair>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let pairs = serde_json::from_str(&content)?;
        Ok(pairs)
    }
}

impl SeedSource for JsonFileSeed {
    fn fetch(&self) -> Result<Vec<WordPair>> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| VocabError::Seed(format!("Failed to start runtime: {}", e)))?;
        rt.block_on(self.read())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[derive(Debug)]
pub enum SeedEvent {
    Loaded(Vec<WordPair>),
    Failed(String),
}

impl SeedEvent {
    /// The fetch outcome the worker saw, as `SeedSource::fetch` would have returned it.
    pub fn into_result(self) -> Result<Vec<WordPair>> {
        match self {
            SeedEvent::Loaded(pairs) => Ok(pairs),
            SeedEvent::Failed(e) => Err(VocabError::Seed(e)),
        }
    }
}

/// Fetches the seed once on a background thread and reports the outcome on `tx`.
pub fn spawn_seed_worker(
    source: Box<dyn SeedSource>,
    tx: Sender<SeedEvent>,
) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("vocab-cards::seed_worker".to_string())
        .spawn(move || {
            logger::log(&format!("Seed worker fetching {}", source.describe()));
            let event = match source.fetch() {
                Ok(pairs) => {
                    logger::log(&format!("Seed worker read {} words", pairs.len()));
                    SeedEvent::Loaded(pairs)
                }
                Err(e) => {
                    logger::warn(&format!("Seed worker failed: {}", e));
                    SeedEvent::Failed(e.to_string())
                }
            };
            // Receiver may be gone if the app already quit
            let _ = tx.send(event);
        })
}
