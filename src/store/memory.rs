use chrono::Utc;
use tokio::sync::RwLock;

use super::{ResourceStore, StoreError};
use crate::models::ResourceKind;

/// Process-local store. Ids start at 1 and are never reused.
pub struct MemoryStore<K: ResourceKind> {
    inner: RwLock<Inner<K::Record>>,
}

struct Inner<R> {
    next_id: i64,
    records: Vec<R>,
}

impl<K: ResourceKind> Default for MemoryStore<K> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                records: Vec::new(),
            }),
        }
    }
}

impl<K: ResourceKind> MemoryStore<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }
}

impl<K: ResourceKind> ResourceStore<K> for MemoryStore<K> {
    async fn list(&self) -> Result<Vec<K::Record>, StoreError> {
        let inner = self.inner.read().await;
        let mut records = inner.records.clone();
        records.sort_by(|a, b| {
            K::created_at(b)
                .cmp(&K::created_at(a))
                .then_with(|| K::id(b).cmp(&K::id(a)))
        });
        Ok(records)
    }

    async fn create(&self, new: K::NewRecord) -> Result<K::Record, StoreError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        let record = K::build(id, new, Utc::now());
        inner.records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: i64, patch: K::Patch) -> Result<K::Record, StoreError> {
        let mut inner = self.inner.write().await;
        let record = inner
            .records
            .iter_mut()
            .find(|r| K::id(r) == id)
            .ok_or(StoreError::NotFound(id))?;
        K::apply(record, patch);
        Ok(record.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.records.len();
        inner.records.retain(|r| K::id(r) != id);
        if inner.records.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::meeting::{
        Department, Meeting, MeetingPatch, MeetingStatus, NewMeetingRequest,
    };

    fn new_meeting(name: &str) -> NewMeetingRequest {
        NewMeetingRequest {
            name: name.to_string(),
            email: format!("{}@agric.gov.ng", name.to_lowercase()),
            department: Department::Planning,
            purpose: "Quarterly review".to_string(),
            date: "2026-03-01".to_string(),
            time: "09:00".to_string(),
        }
    }

    #[tokio::test]
    async fn ids_are_unique_and_never_reused() {
        let store = MemoryStore::<Meeting>::new();
        let a = store.create(new_meeting("Ada")).await.unwrap();
        let b = store.create(new_meeting("Bayo")).await.unwrap();
        assert_ne!(a.id, b.id);

        ResourceStore::<Meeting>::delete(&store, b.id).await.unwrap();
        let c = store.create(new_meeting("Chidi")).await.unwrap();
        assert!(c.id > b.id);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = MemoryStore::<Meeting>::new();
        for name in ["First", "Second", "Third"] {
            store.create(new_meeting(name)).await.unwrap();
        }
        let names: Vec<String> = store.list().await.unwrap().into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["Third", "Second", "First"]);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let store = MemoryStore::<Meeting>::new();
        let err = store
            .update(
                77,
                MeetingPatch {
                    status: Some(MeetingStatus::Approved),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(77)));
    }

    #[tokio::test]
    async fn delete_unknown_id_leaves_count_unchanged() {
        let store = MemoryStore::<Meeting>::new();
        store.create(new_meeting("Ada")).await.unwrap();
        let err = ResourceStore::<Meeting>::delete(&store, 999).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(999)));
        assert_eq!(store.len().await, 1);
    }
}
