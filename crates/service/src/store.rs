use std::{collections::HashMap, sync::Arc};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ServiceError;

/// Immutable in-memory mapping of US state names to their capital cities.
///
/// Keys are case-sensitive and fixed at construction. The store is never
/// mutated for the lifetime of the process, so clones share one allocation
/// and concurrent reads need no locking.
#[derive(Debug, Clone)]
pub struct CapitalStore {
    entries: Arc<HashMap<String, String>>,
}

/// A single state/capital pair as returned by the read endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapitalRecord {
    pub state: String,
    pub capital: String,
}

impl CapitalStore {
    /// Build a store over the given entries.
    pub fn new(entries: HashMap<String, String>) -> Self {
        debug!(entries = entries.len(), "capital store initialized");
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Store holding the compiled-in sample dataset.
    pub fn with_sample_data() -> Self {
        let entries = HashMap::from([
            ("Arkansas".to_string(), "Little Rock".to_string()),
            ("Texas".to_string(), "Austin".to_string()),
            ("Idaho".to_string(), "Salem".to_string()),
        ]);
        Self::new(entries)
    }

    /// Look up the capital for a state; `None` when the key is absent.
    pub fn capital_of(&self, state: &str) -> Option<&str> {
        self.entries.get(state).map(String::as_str)
    }

    /// Lookup that surfaces the absent-key case as the domain error.
    pub fn lookup(&self, state: &str) -> Result<CapitalRecord, ServiceError> {
        match self.capital_of(state) {
            Some(capital) => Ok(CapitalRecord {
                state: state.to_owned(),
                capital: capital.to_owned(),
            }),
            None => Err(ServiceError::UnknownState(state.to_owned())),
        }
    }

    /// The full state→capital mapping.
    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }

    /// Number of states in the dataset.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_dataset_contents() {
        let store = CapitalStore::with_sample_data();
        assert_eq!(store.len(), 3);
        assert_eq!(store.capital_of("Arkansas"), Some("Little Rock"));
        assert_eq!(store.capital_of("Texas"), Some("Austin"));
        assert_eq!(store.capital_of("Idaho"), Some("Salem"));
    }

    #[test]
    fn lookup_is_exact_match_only() {
        let store = CapitalStore::with_sample_data();
        assert_eq!(store.capital_of("texas"), None);
        assert_eq!(store.capital_of("TEXAS"), None);
        assert_eq!(store.capital_of(" Texas"), None);
    }

    #[test]
    fn lookup_surfaces_unknown_state() {
        let store = CapitalStore::with_sample_data();
        let rec = store.lookup("Texas").expect("known state");
        assert_eq!(
            rec,
            CapitalRecord {
                state: "Texas".into(),
                capital: "Austin".into()
            }
        );

        let err = store.lookup("California").unwrap_err();
        assert!(matches!(err, ServiceError::UnknownState(ref s) if s == "California"));
        assert_eq!(err.to_string(), "unknown state: California");
    }

    #[test]
    fn alternate_dataset_is_injectable() {
        let store = CapitalStore::new(HashMap::from([(
            "Oregon".to_string(),
            "Salem".to_string(),
        )]));
        assert_eq!(store.len(), 1);
        assert_eq!(store.capital_of("Oregon"), Some("Salem"));
        assert_eq!(store.capital_of("Texas"), None);
    }

    #[test]
    fn record_serializes_with_state_and_capital_fields() {
        let rec = CapitalRecord {
            state: "Texas".into(),
            capital: "Austin".into(),
        };
        let json = serde_json::to_value(&rec).expect("serialize");
        assert_eq!(json, serde_json::json!({"state": "Texas", "capital": "Austin"}));
    }

    #[test]
    fn clones_share_the_same_entries() {
        let store = CapitalStore::with_sample_data();
        let clone = store.clone();
        assert!(std::ptr::eq(store.entries(), clone.entries()));
    }
}
