use std::time::Duration;

use moka::ops::compute::{CompResult, Op};
use moka::Entry;

/// Session-scoped favorite restrooms
///
/// Each session maps to an ordered list of restroom ids. Entries live in memory
/// only and expire after the session has been idle for the configured TTL.
pub struct FavoritesStore {
    sessions: moka::future::Cache<String, Vec<String>>,
}

impl FavoritesStore {
    pub fn new(max_sessions: u64, idle_ttl_secs: u64) -> Self {
        let sessions = moka::future::CacheBuilder::new(max_sessions)
            .time_to_idle(Duration::from_secs(idle_ttl_secs))
            .build();

        Self { sessions }
    }

    /// Favorite ids for a session, oldest first
    pub async fn list(&self, session_id: &str) -> Vec<String> {
        self.sessions.get(session_id).await.unwrap_or_default()
    }

    /// Add a restroom; returns false if it was already a favorite
    pub async fn add(&self, session_id: &str, restroom_id: &str) -> bool {
        let result = self
            .sessions
            .entry(session_id.to_string())
            .and_compute_with(|current| {
                let mut favorites = current.map(Entry::into_value).unwrap_or_default();
                let op = if favorites.iter().any(|id| id == restroom_id) {
                    Op::Nop
                } else {
                    favorites.push(restroom_id.to_string());
                    Op::Put(favorites)
                };
                std::future::ready(op)
            })
            .await;

        let added = matches!(result, CompResult::Inserted(_) | CompResult::ReplacedWith(_));
        if added {
            tracing::trace!("Session {} favorited restroom {}", session_id, restroom_id);
        }
        added
    }

    /// Remove a restroom; returns false if it was not a favorite
    pub async fn remove(&self, session_id: &str, restroom_id: &str) -> bool {
        let result = self
            .sessions
            .entry(session_id.to_string())
            .and_compute_with(|current| {
                let op = match current.map(Entry::into_value) {
                    Some(mut favorites) if favorites.iter().any(|id| id == restroom_id) => {
                        favorites.retain(|id| id != restroom_id);
                        Op::Put(favorites)
                    }
                    _ => Op::Nop,
                };
                std::future::ready(op)
            })
            .await;

        matches!(result, CompResult::ReplacedWith(_))
    }

    /// Drop every favorite held by a session
    pub async fn clear(&self, session_id: &str) {
        self.sessions.invalidate(session_id).await;
        tracing::debug!("Cleared favorites for session {}", session_id);
    }
}
