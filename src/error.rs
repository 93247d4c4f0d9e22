//! Errors surfaced by the query engine.

use thiserror::Error;

use crate::category::Category;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// Source missing, unreadable, or empty.
    #[error("No users loaded.")]
    DataUnavailable,

    /// Request named a category outside the fixed table.
    #[error("Invalid category. Valid categories: {}", quoted_list(.valid))]
    InvalidCategory {
        given: String,
        valid: Vec<&'static str>,
    },
}

impl QueryError {
    pub fn invalid_category(given: impl Into<String>) -> Self {
        QueryError::InvalidCategory {
            given: given.into(),
            valid: Category::keys(),
        }
    }
}

/// `['a', 'b']`, the list form clients of this API match on
fn quoted_list(items: &[&str]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| format!("'{}'", s)).collect();
    format!("[{}]", quoted.join(", "))
}
