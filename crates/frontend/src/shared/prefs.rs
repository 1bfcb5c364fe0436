use contracts::shared::listing::{ListQuery, SortOrder};
use serde::{Deserialize, Serialize};

/// Where persisted UI preferences live.
///
/// The list widgets only ever talk to this trait; the browser build plugs
/// in [`LocalStorageStore`], tests use [`MemoryStore`].
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`-backed store. All failures (storage disabled,
/// quota, bad JSON) degrade to "no preference".
#[derive(Clone, Copy, Default)]
pub struct LocalStorageStore;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) {
        let Some(storage) = storage() else { return };
        let _ = storage.set_item(key, value);
    }

    fn remove(&self, key: &str) {
        let Some(storage) = storage() else { return };
        let _ = storage.remove_item(key);
    }
}

/// In-memory store for unit tests.
#[derive(Default)]
pub struct MemoryStore(std::cell::RefCell<std::collections::HashMap<String, String>>);

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.0.borrow_mut().remove(key);
    }
}

/// The slice of list state worth keeping across sessions: sorting and page
/// size. Page number and search text are deliberately not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPrefs {
    pub sort_by: String,
    pub sort_order: SortOrder,
    pub limit: u32,
}

pub fn load_list_prefs(store: &impl PreferenceStore, key: &str) -> Option<ListPrefs> {
    let raw = store.load(key)?;
    serde_json::from_str(&raw).ok()
}

pub fn save_list_prefs(store: &impl PreferenceStore, key: &str, prefs: &ListPrefs) {
    let Ok(raw) = serde_json::to_string(prefs) else {
        return;
    };
    store.save(key, &raw);
}

/// Apply persisted preferences on top of a page's default query.
pub fn restore_query<F>(store: &impl PreferenceStore, key: &str, mut query: ListQuery<F>) -> ListQuery<F> {
    if let Some(prefs) = load_list_prefs(store, key) {
        query.sort_by = prefs.sort_by;
        query.sort_order = prefs.sort_order;
        if prefs.limit > 0 {
            query.limit = prefs.limit;
        }
    }
    query
}

/// Persist the preference slice of the current query.
pub fn remember_query(store: &impl PreferenceStore, key: &str, sort_by: &str, sort_order: SortOrder, limit: u32) {
    save_list_prefs(
        store,
        key,
        &ListPrefs {
            sort_by: sort_by.to_string(),
            sort_order,
            limit,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::customer::ActivityFilter;

    #[test]
    fn roundtrips_through_the_store() {
        let store = MemoryStore::default();
        let prefs = ListPrefs {
            sort_by: "nama".to_string(),
            sort_order: SortOrder::Desc,
            limit: 50,
        };
        save_list_prefs(&store, "customers", &prefs);
        assert_eq!(load_list_prefs(&store, "customers"), Some(prefs));
        assert_eq!(load_list_prefs(&store, "orders"), None);
    }

    #[test]
    fn garbage_in_store_degrades_to_default() {
        let store = MemoryStore::default();
        store.save("customers", "{not json");
        assert_eq!(load_list_prefs(&store, "customers"), None);
    }

    #[test]
    fn restore_overrides_sort_and_limit_only() {
        let store = MemoryStore::default();
        save_list_prefs(
            &store,
            "customers",
            &ListPrefs {
                sort_by: "nama".to_string(),
                sort_order: SortOrder::Desc,
                limit: 50,
            },
        );
        let mut base = ListQuery::new("date_created", SortOrder::Asc, ActivityFilter::All);
        base.search = "siti".to_string();
        let restored = restore_query(&store, "customers", base);
        assert_eq!(restored.sort_by, "nama");
        assert_eq!(restored.sort_order, SortOrder::Desc);
        assert_eq!(restored.limit, 50);
        assert_eq!(restored.search, "siti");
        assert_eq!(restored.page, 1);
    }
}
