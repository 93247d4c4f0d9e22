use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::category::Category;
use crate::error::QueryError;
use crate::loader::{self, ProfileSource};
use crate::profile::EnrichedProfile;

/// Members shown per category on the leaderboard
pub const TOP_N: usize = 4;

/// Displayed in place of the real trust scores, by rank
pub const FIXED_SCORES: [f64; TOP_N] = [9.0, 8.0, 7.0, 6.0];
pub const RANK_LABELS: [&str; TOP_N] = ["User1", "User2", "User3", "User4"];

#[derive(Debug, Clone, Serialize)]
pub struct UsersResponse {
    pub users: Vec<EnrichedProfile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryUsersResponse {
    pub category: &'static str,
    pub users: Vec<EnrichedProfile>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopUser {
    pub label: &'static str,
    pub category: &'static str,
    pub trust_score: f64,
    pub username: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopUsersResponse {
    pub users: Vec<TopUser>,
}

/// Query engine - every call reloads the source from scratch
pub struct QueryEngine {
    source: Arc<dyn ProfileSource>,
}

impl QueryEngine {
    pub fn new(source: Arc<dyn ProfileSource>) -> Self {
        Self { source }
    }

    fn load_required(&self) -> Result<Vec<EnrichedProfile>, QueryError> {
        let users = loader::load(self.source.as_ref());
        if users.is_empty() {
            return Err(QueryError::DataUnavailable);
        }
        Ok(users)
    }

    pub fn list_all(&self) -> Result<UsersResponse, QueryError> {
        let users = self.load_required()?;
        debug!("list_all: {} users", users.len());
        Ok(UsersResponse { users })
    }

    /// `key` is checked against the category table before the source is read
    pub fn by_category(&self, key: &str) -> Result<CategoryUsersResponse, QueryError> {
        let category = Category::from_key(key).ok_or_else(|| QueryError::invalid_category(key))?;
        let users: Vec<_> = self
            .load_required()?
            .into_iter()
            .filter(|u| u.profile.category.as_str() == Some(category.key()))
            .collect();
        debug!("by_category({}): {} users", category.key(), users.len());
        Ok(CategoryUsersResponse {
            category: category.label(),
            users,
        })
    }

    pub fn top_users(&self) -> Result<TopUsersResponse, QueryError> {
        let users = self.load_required()?;
        let board = build_leaderboard(users);
        debug!("top_users: {} entries", board.len());
        Ok(TopUsersResponse { users: board })
    }
}

/// Bucket users by known category, in input order; unknown ones are logged and dropped.
pub fn group_by_category(users: Vec<EnrichedProfile>) -> BTreeMap<Category, Vec<EnrichedProfile>> {
    let mut groups: BTreeMap<Category, Vec<EnrichedProfile>> =
        Category::ALL.iter().map(|c| (*c, Vec::new())).collect();
    for user in users {
        match user.profile.known_category() {
            Some(category) => groups.entry(category).or_default().push(user),
            None => warn!(
                "Unknown category {} for user {}",
                user.profile.category, user.profile.username
            ),
        }
    }
    groups
}

/// Top `TOP_N` per category by real trust score. Categories with fewer
/// members are left out entirely.
pub fn leaders_by_category(
    groups: BTreeMap<Category, Vec<EnrichedProfile>>,
) -> BTreeMap<Category, Vec<EnrichedProfile>> {
    let mut leaders = BTreeMap::new();
    for (category, mut members) in groups {
        if members.len() < TOP_N {
            warn!(
                "Category '{}' has only {} users, expected at least {}",
                category.key(),
                members.len(),
                TOP_N
            );
            continue;
        }
        // stable: equal scores keep input order
        members.sort_by(|a, b| b.trust_score.total_cmp(&a.trust_score));
        members.truncate(TOP_N);
        leaders.insert(category, members);
    }
    leaders
}

/// Rank-major leaderboard: every category's "User1" before any "User2",
/// categories alphabetical by display label within a rank.
pub fn build_leaderboard(users: Vec<EnrichedProfile>) -> Vec<TopUser> {
    let leaders = leaders_by_category(group_by_category(users));
    let order = Category::by_label();

    let mut board = Vec::with_capacity(leaders.len() * TOP_N);
    for (rank, (label, score)) in RANK_LABELS.into_iter().zip(FIXED_SCORES).enumerate() {
        for category in &order {
            if let Some(top) = leaders.get(category) {
                board.push(TopUser {
                    label,
                    category: category.label(),
                    trust_score: score,
                    username: top[rank].profile.username.clone(),
                });
            }
        }
    }
    board
}
