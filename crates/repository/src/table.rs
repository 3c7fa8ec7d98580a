//! Insertion-ordered, copy-on-every-access keyed table.
//!
//! Every write stores the table's own clone of the value and every read
//! returns a fresh clone, so no caller ever holds storage owned by the table.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

#[derive(Debug)]
struct Rows<T> {
    order: Vec<String>,
    entries: HashMap<String, T>,
}

impl<T> Default for Rows<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Table<T> {
    rows: Arc<RwLock<Rows<T>>>,
}

// Derived Clone would require `T: Clone` for sharing the handle.
impl<T> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Rows::default())),
        }
    }
}

impl<T: Clone> Table<T> {
    /// Stores a copy of `value` under `id`. Overwriting keeps the original
    /// insertion position.
    pub(crate) async fn put(&self, id: &str, value: &T) {
        let mut rows = self.rows.write().await;
        if rows.entries.insert(id.to_string(), value.clone()).is_none() {
            rows.order.push(id.to_string());
        }
    }

    pub(crate) async fn get(&self, id: &str) -> Option<T> {
        self.rows.read().await.entries.get(id).cloned()
    }

    /// Copies of every row, in insertion order.
    #[cfg(test)]
    pub(crate) async fn values(&self) -> Vec<T> {
        let rows = self.rows.read().await;
        rows.order
            .iter()
            .filter_map(|id| rows.entries.get(id))
            .cloned()
            .collect()
    }

    /// Applies `f` to every row in insertion order without copying the rows.
    pub(crate) async fn map<U>(&self, f: impl Fn(&T) -> U) -> Vec<U> {
        let rows = self.rows.read().await;
        rows.order
            .iter()
            .filter_map(|id| rows.entries.get(id))
            .map(f)
            .collect()
    }

    pub(crate) async fn remove(&self, id: &str) -> bool {
        let mut rows = self.rows.write().await;
        if rows.entries.remove(id).is_some() {
            rows.order.retain(|existing| existing != id);
            true
        } else {
            false
        }
    }

    pub(crate) async fn len(&self) -> usize {
        self.rows.read().await.entries.len()
    }

    pub(crate) async fn clear(&self) {
        let mut rows = self.rows.write().await;
        rows.order.clear();
        rows.entries.clear();
    }
}
