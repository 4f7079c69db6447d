//! Per-user shortlists kept in process memory for mock mode.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use roost_core::{PropertyList, ShortlistStatus, DEFAULT_LIMIT};

use super::MockCatalog;

/// Id reported for every user's single mock shortlist.
pub const DEFAULT_SHORTLIST_ID: &str = "mock-shortlist-favorites";

/// Key used for a blank user token; it starts with a few seeded entries.
const DEMO_USER: &str = "demo";

const DEMO_SEED: &[&str] = &[
    "mock-res-uttara-01",
    "mock-res-uttara-03",
    "mock-com-gulshan-01",
    "mock-com-dhanmondi-01",
];

#[derive(Debug, Default)]
struct Shortlists {
    /// user -> asset id -> insertion sequence (higher is newer).
    users: HashMap<String, HashMap<String, u64>>,
    next_seq: u64,
}

impl Shortlists {
    fn user(&mut self, token: &str) -> &mut HashMap<String, u64> {
        let key = match token.trim() {
            "" => DEMO_USER,
            key => key,
        };
        self.users.entry(key.to_string()).or_default()
    }
}

#[derive(Debug)]
pub struct ShortlistStore {
    state: Mutex<Shortlists>,
}

impl Default for ShortlistStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortlistStore {
    /// A store whose demo user (blank token) starts with four catalog
    /// records shortlisted.
    #[must_use]
    pub fn new() -> Self {
        let mut state = Shortlists::default();
        let demo = state.users.entry(DEMO_USER.to_string()).or_default();
        for id in DEMO_SEED.iter().rev() {
            demo.insert((*id).to_string(), state.next_seq);
            state.next_seq += 1;
        }
        Self {
            state: Mutex::new(state),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Shortlists> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn status(&self, token: &str, asset_id: &str) -> ShortlistStatus {
        let mut state = self.lock();
        let listed = state.user(token).contains_key(asset_id);
        status(asset_id, listed)
    }

    pub fn add(&self, token: &str, asset_id: &str) -> ShortlistStatus {
        let mut state = self.lock();
        let seq = state.next_seq;
        state.next_seq += 1;
        state.user(token).insert(asset_id.to_string(), seq);
        status(asset_id, true)
    }

    pub fn remove(&self, token: &str, asset_id: &str) -> ShortlistStatus {
        let mut state = self.lock();
        state.user(token).remove(asset_id);
        status(asset_id, false)
    }

    /// The user's shortlisted catalog records, newest first, paginated like a
    /// search. Ids the catalog does not know are skipped.
    #[must_use]
    pub fn list(&self, token: &str, page: usize, limit: usize) -> PropertyList {
        let mut rows: Vec<(String, u64)> = {
            let mut state = self.lock();
            state
                .user(token)
                .iter()
                .map(|(id, seq)| (id.clone(), *seq))
                .collect()
        };
        rows.sort_by_key(|(_, seq)| Reverse(*seq));

        let items = rows
            .iter()
            .filter_map(|(id, _)| MockCatalog.property(id))
            .map(|mut prop| {
                prop.is_shortlisted = true;
                prop.shortlist_id = Some(DEFAULT_SHORTLIST_ID.to_string());
                prop
            })
            .collect();

        let limit = if limit == 0 { DEFAULT_LIMIT } else { limit };
        PropertyList::paginate(items, page.max(1), limit)
    }
}

fn status(asset_id: &str, is_shortlisted: bool) -> ShortlistStatus {
    ShortlistStatus {
        asset_id: asset_id.to_string(),
        shortlist_id: Some(DEFAULT_SHORTLIST_ID.to_string()),
        is_shortlisted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_user_starts_with_known_seeds_newest_first() {
        let store = ShortlistStore::new();
        let list = store.list("", 1, 9);
        let ids: Vec<&str> = list.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "mock-res-uttara-01",
                "mock-res-uttara-03",
                "mock-com-gulshan-01",
                "mock-com-dhanmondi-01"
            ]
        );
        assert!(list.items.iter().all(|p| p.is_shortlisted));
        assert_eq!(
            list.items[0].shortlist_id.as_deref(),
            Some(DEFAULT_SHORTLIST_ID)
        );
    }

    #[test]
    fn add_check_remove_round_trip_per_user() {
        let store = ShortlistStore::new();
        assert!(!store.status("alice", "mock-hostel-01").is_shortlisted);

        let added = store.add("alice", "mock-hostel-01");
        assert!(added.is_shortlisted);
        assert_eq!(added.asset_id, "mock-hostel-01");
        assert!(store.status("alice", "mock-hostel-01").is_shortlisted);
        assert!(!store.status("bob", "mock-hostel-01").is_shortlisted);

        let removed = store.remove("alice", "mock-hostel-01");
        assert!(!removed.is_shortlisted);
        assert!(!store.status("alice", "mock-hostel-01").is_shortlisted);
    }

    #[test]
    fn list_orders_by_most_recent_add_and_paginates() {
        let store = ShortlistStore::new();
        for id in ["mock-str-01", "mock-str-02", "mock-hostel-01"] {
            store.add("carol", id);
        }

        let first = store.list("carol", 1, 2);
        assert_eq!(first.total, 3);
        assert_eq!(first.pages, 2);
        let ids: Vec<&str> = first.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["mock-hostel-01", "mock-str-02"]);

        let empty = store.list("dave", 0, 0);
        assert_eq!(empty.total, 0);
        assert_eq!(empty.page, 1);
        assert_eq!(empty.pages, 1);
    }
}
