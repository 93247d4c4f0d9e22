use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::trust;

/// One record of the input file.
///
/// Fields other than the four below are kept in `extra` and written back out
/// unchanged. `category` and `swaps` keep their input JSON form so a record
/// is echoed exactly as read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    /// Any JSON value; non-strings count as unknown categories
    pub category: serde_json::Value,
    pub swaps: serde_json::Number,
    pub rating: f64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserProfile {
    /// None when the input carries a category outside the fixed table
    pub fn known_category(&self) -> Option<Category> {
        self.category.as_str().and_then(Category::from_key)
    }

    pub fn swaps_f64(&self) -> f64 {
        self.swaps.as_f64().unwrap_or_default()
    }
}

/// A profile with its derived trust score, recomputed on every load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedProfile {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub trust_score: f64,
}

impl EnrichedProfile {
    pub fn new(mut profile: UserProfile) -> Self {
        // a stale score in the input would otherwise be emitted twice
        profile.extra.remove("trust_score");
        let trust_score = trust::score(profile.swaps_f64(), profile.rating);
        Self { profile, trust_score }
    }
}
