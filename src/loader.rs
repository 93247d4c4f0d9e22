use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, error};

use crate::profile::{EnrichedProfile, UserProfile};

/// Where raw profiles come from.
pub trait ProfileSource: Send + Sync {
    fn fetch(&self) -> anyhow::Result<Vec<UserProfile>>;

    /// Human-readable origin, used in log lines
    fn describe(&self) -> String;
}

/// A JSON array of profiles on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileSource for JsonFileSource {
    fn fetch(&self) -> anyhow::Result<Vec<UserProfile>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read '{}'", self.path.display()))?;
        let profiles = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse '{}'", self.path.display()))?;
        Ok(profiles)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Read every profile and attach its trust score.
///
/// Failures are logged and yield an empty list; callers must treat empty as
/// "data unavailable".
pub fn load(source: &dyn ProfileSource) -> Vec<EnrichedProfile> {
    match source.fetch() {
        Ok(profiles) => {
            debug!("Loaded {} profiles from {}", profiles.len(), source.describe());
            profiles.into_iter().map(EnrichedProfile::new).collect()
        }
        Err(e) => {
            error!("Error loading profiles from {}: {:#}", source.describe(), e);
            Vec::new()
        }
    }
}
