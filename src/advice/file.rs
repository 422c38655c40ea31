use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::error::AdviceError;
use super::payload::parse_payload;
use super::{Advice, AdviceSource};
use crate::random::{RandomSource, StdRandom};

/// Reads advice from a local JSON file, re-reading it on every fetch.
///
/// The file usually holds a collection (`["...", "..."]`); single-advice
/// objects are accepted too.
pub struct FileAdviceSource {
    path: PathBuf,
    random: Mutex<Box<dyn RandomSource>>,
}

impl FileAdviceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            random: Mutex::new(Box::new(StdRandom::from_entropy())),
        }
    }

    pub fn with_random(mut self, random: Box<dyn RandomSource>) -> Self {
        self.random = Mutex::new(random);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AdviceSource for FileAdviceSource {
    async fn fetch_advice(&self) -> Result<Advice, AdviceError> {
        let body = tokio::fs::read(&self.path).await.map_err(|e| {
            AdviceError::transport(format!("failed to read '{}': {}", self.path.display(), e))
        })?;

        let mut random = self.random.lock();
        parse_payload(&body, &mut **random)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
