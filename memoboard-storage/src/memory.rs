//! In-memory message store

use async_trait::async_trait;
use rand::Rng;
use tokio::sync::RwLock;

use memoboard_api_types::{ApiId, MessageFields, UnifiedMessage};
use memoboard_interfaces::{MessageRepository, Repository, StorageError};

/// Number of random bytes in a generated message id (rendered as hex)
const GENERATED_ID_BYTES: usize = 10;

const SEED_AUTHOR: &str = "Jose Fernando Lopez Fernandez";

/// Insertion-ordered, id-addressed message store guarded by a single lock
///
/// All operations take the lock, so concurrent writers are serialized and
/// no create/replace is ever lost between racing requests.
pub struct InMemoryMessageStore {
    records: RwLock<Vec<UnifiedMessage>>,
}

impl InMemoryMessageStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with the two demo records
    pub fn with_seed_messages() -> Self {
        let seeds = vec![
            UnifiedMessage::new(1, Some("Test 1".to_string()), Some(SEED_AUTHOR.to_string())),
            UnifiedMessage::new(2, Some("Test 2".to_string()), Some(SEED_AUTHOR.to_string())),
        ];
        Self {
            records: RwLock::new(seeds),
        }
    }

    /// Generate a fresh random id, wide enough that collisions are negligible
    fn generate_id() -> ApiId {
        let bytes: [u8; GENERATED_ID_BYTES] = rand::rng().random();
        ApiId::from_string(hex::encode(bytes))
    }
}

impl Default for InMemoryMessageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository for InMemoryMessageStore {
    async fn health_check(&self) -> Result<(), StorageError> {
        // Taking the lock proves the store is reachable
        let _records = self.records.read().await;
        Ok(())
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageStore {
    async fn find_by_id(&self, id: &ApiId) -> Result<Option<UnifiedMessage>, StorageError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|record| &record.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<UnifiedMessage>, StorageError> {
        let records = self.records.read().await;
        Ok(records.clone())
    }

    async fn create(&self, fields: MessageFields) -> Result<UnifiedMessage, StorageError> {
        let message = UnifiedMessage {
            id: Self::generate_id(),
            content: fields.content,
            author: fields.author,
        };

        let mut records = self.records.write().await;
        records.push(message.clone());
        Ok(message)
    }

    async fn replace(
        &self,
        id: &ApiId,
        fields: MessageFields,
    ) -> Result<UnifiedMessage, StorageError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|record| &record.id == id) {
            Some(slot) => {
                // Full overwrite, not a merge: omitted fields are dropped
                slot.content = fields.content;
                slot.author = fields.author;
                Ok(slot.clone())
            }
            None => Err(StorageError::not_found(id.as_str())),
        }
    }

    async fn count(&self) -> Result<u64, StorageError> {
        let records = self.records.read().await;
        Ok(records.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn fields(content: &str, author: &str) -> MessageFields {
        MessageFields {
            content: Some(content.to_string()),
            author: Some(author.to_string()),
        }
    }

    #[tokio::test]
    async fn seeded_store_holds_both_demo_records() {
        let store = InMemoryMessageStore::with_seed_messages();
        let all = store.find_all().await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, ApiId::from(1));
        assert_eq!(all[0].content.as_deref(), Some("Test 1"));
        assert_eq!(all[1].id, ApiId::from(2));
        assert_eq!(all[1].content.as_deref(), Some("Test 2"));
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = InMemoryMessageStore::new();
        assert!(store.find_all().await.unwrap().is_empty());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn find_by_id_misses_unknown_ids() {
        let store = InMemoryMessageStore::with_seed_messages();
        assert!(store
            .find_by_id(&ApiId::from(99))
            .await
            .unwrap()
            .is_none());
        assert!(store
            .find_by_id(&ApiId::from("-1"))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn create_appends_with_generated_hex_id() {
        let store = InMemoryMessageStore::with_seed_messages();
        let created = store.create(fields("hi", "B")).await.unwrap();

        assert_eq!(created.id.as_str().len(), 20);
        assert!(created.id.as_str().chars().all(|c| c.is_ascii_hexdigit()));

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all.last().unwrap(), &created);
    }

    #[tokio::test]
    async fn created_records_are_addressable_by_their_id() {
        let store = InMemoryMessageStore::new();
        let created = store.create(fields("hello", "A")).await.unwrap();

        let found = store.find_by_id(&created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn create_stores_absent_fields_as_none() {
        let store = InMemoryMessageStore::new();
        let created = store.create(MessageFields::default()).await.unwrap();

        assert_eq!(created.content, None);
        assert_eq!(created.author, None);
    }

    #[tokio::test]
    async fn replace_overwrites_the_whole_slot() {
        let store = InMemoryMessageStore::with_seed_messages();
        let id = ApiId::from(1);

        let replaced = store
            .replace(
                &id,
                MessageFields {
                    content: Some("new".to_string()),
                    author: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(replaced.id, id);
        assert_eq!(replaced.content.as_deref(), Some("new"));
        assert_eq!(replaced.author, None);

        // Re-fetch to confirm the overwrite stuck
        let fetched = store.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(fetched, replaced);
    }

    #[tokio::test]
    async fn replace_unknown_id_fails_with_not_found() {
        let store = InMemoryMessageStore::with_seed_messages();
        let err = store
            .replace(&ApiId::from(99), fields("x", "y"))
            .await
            .unwrap_err();

        match err {
            StorageError::NotFound { id } => assert_eq!(id, "99"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn concurrent_creates_both_land_with_distinct_ids() {
        let store = Arc::new(InMemoryMessageStore::new());

        let a = {
            let store = store.clone();
            tokio::spawn(async move { store.create(fields("first", "A")).await })
        };
        let b = {
            let store = store.clone();
            tokio::spawn(async move { store.create(fields("second", "B")).await })
        };

        let first = a.await.unwrap().unwrap();
        let second = b.await.unwrap().unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.count().await.unwrap(), 2);
    }
}
