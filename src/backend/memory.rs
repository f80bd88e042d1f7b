//! In-memory stand-ins for the hosted storage and database.
//!
//! Both can be told to fail, so tests can exercise the paths where a submission aborts.

use super::{FileStorage, InsertError, RecordStore, UploadError};
use crate::model::PaymentProof;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;
use uuid::Uuid;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A file held by [`InMemoryFileStorage`].
#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub bucket: String,
    pub path: String,
    pub content_type: String,
    pub size: usize,
}

/// Object storage that keeps uploads in a map and never overwrites an existing path.
pub struct InMemoryFileStorage {
    public_base_url: String,
    objects: Mutex<HashMap<(String, String), StoredObject>>,
    failure: Mutex<Option<UploadError>>,
}

impl InMemoryFileStorage {
    pub fn new(public_base_url: impl Into<String>) -> Self {
        Self {
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
            objects: Mutex::new(HashMap::new()),
            failure: Mutex::new(None),
        }
    }

    /// Makes every following upload fail with `error`, until [`Self::recover`].
    pub fn fail_with(&self, error: UploadError) {
        *lock(&self.failure) = Some(error);
    }

    pub fn recover(&self) {
        *lock(&self.failure) = None;
    }

    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.public_base_url, bucket, path
        )
    }

    pub fn objects(&self) -> Vec<StoredObject> {
        let mut objects: Vec<_> = lock(&self.objects).values().cloned().collect();
        objects.sort_by(|a, b| a.path.cmp(&b.path));
        objects
    }
}

#[async_trait]
impl FileStorage for InMemoryFileStorage {
    async fn upload(&self, bucket: &str, path: &str, file: &PaymentProof) -> Result<String, UploadError> {
        if let Some(error) = lock(&self.failure).clone() {
            return Err(error);
        }
        if path.is_empty() || file.bytes.is_empty() {
            return Err(UploadError::Rejected(format!("empty upload to '{path}'")));
        }

        let key = (bucket.to_string(), path.to_string());
        let mut objects = lock(&self.objects);
        if objects.contains_key(&key) {
            return Err(UploadError::AlreadyExists(path.to_string()));
        }
        objects.insert(
            key,
            StoredObject {
                bucket: bucket.to_string(),
                path: path.to_string(),
                content_type: file.content_type.clone(),
                size: file.bytes.len(),
            },
        );
        debug!(bucket, path, size = file.bytes.len(), "Stored object");

        Ok(self.public_url(bucket, path))
    }
}

/// Table store that keeps rows in insertion order per table.
///
/// Each inserted row gets a generated `id` and `created_at`/`updated_at` timestamps.
#[derive(Default)]
pub struct InMemoryRecordStore {
    tables: Mutex<HashMap<String, Vec<Value>>>,
    failure: Mutex<Option<InsertError>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following insert fail with `error`, until [`Self::recover`].
    pub fn fail_with(&self, error: InsertError) {
        *lock(&self.failure) = Some(error);
    }

    pub fn recover(&self) {
        *lock(&self.failure) = None;
    }

    pub fn rows(&self, table: &str) -> Vec<Value> {
        lock(&self.tables).get(table).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn insert(&self, table: &str, record: Value) -> Result<Value, InsertError> {
        if let Some(error) = lock(&self.failure).clone() {
            return Err(error);
        }
        if table.is_empty() {
            return Err(InsertError::UnknownTable(table.to_string()));
        }
        let Value::Object(mut row) = record else {
            return Err(InsertError::InvalidRecord(format!(
                "expected a JSON object for '{table}'"
            )));
        };

        let now = Utc::now().to_rfc3339();
        row.insert("id".into(), Value::String(Uuid::new_v4().to_string()));
        row.insert("created_at".into(), Value::String(now.clone()));
        row.insert("updated_at".into(), Value::String(now));
        let stored = Value::Object(row);

        let mut tables = lock(&self.tables);
        let rows = tables.entry(table.to_string()).or_default();
        rows.push(stored.clone());
        debug!(table, rows = rows.len(), "Inserted row");

        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn receipt() -> PaymentProof {
        PaymentProof::new("gcash.png", "image/png", vec![1, 2, 3])
    }

    #[tokio::test]
    async fn test_upload_returns_public_url() {
        let storage = InMemoryFileStorage::new("https://demo.supabase.co/");
        let url = storage
            .upload("payment-proofs", "receipts/food-delivery/1-gcash.png", &receipt())
            .await
            .unwrap();

        assert_eq!(
            url,
            "https://demo.supabase.co/storage/v1/object/public/payment-proofs/receipts/food-delivery/1-gcash.png"
        );
        assert_eq!(storage.objects()[0].size, 3);
    }

    #[tokio::test]
    async fn test_upload_never_overwrites() {
        let storage = InMemoryFileStorage::new("https://demo.supabase.co");
        storage.upload("b", "same.png", &receipt()).await.unwrap();

        let second = storage.upload("b", "same.png", &receipt()).await;
        assert_eq!(second, Err(UploadError::AlreadyExists("same.png".into())));
        assert_eq!(storage.objects().len(), 1);
    }

    #[tokio::test]
    async fn test_upload_failure_injection() {
        let storage = InMemoryFileStorage::new("https://demo.supabase.co");
        storage.fail_with(UploadError::Unavailable("timeout".into()));
        assert!(storage.upload("b", "a.png", &receipt()).await.is_err());

        storage.recover();
        assert!(storage.upload("b", "a.png", &receipt()).await.is_ok());
    }

    #[tokio::test]
    async fn test_insert_assigns_generated_columns() {
        let store = InMemoryRecordStore::new();
        let stored = store
            .insert("food_orders", json!({"customer_name": "Maria"}))
            .await
            .unwrap();

        assert_eq!(stored["customer_name"], "Maria");
        assert!(stored["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert!(stored["created_at"].is_string());
        assert_eq!(store.rows("food_orders"), vec![stored]);
        assert!(store.rows("catering_bookings").is_empty());
    }

    #[tokio::test]
    async fn test_insert_rejects_non_objects_and_injected_failures() {
        let store = InMemoryRecordStore::new();
        assert!(matches!(
            store.insert("food_orders", json!([1, 2])).await,
            Err(InsertError::InvalidRecord(_))
        ));

        store.fail_with(InsertError::Unavailable("connection reset".into()));
        assert_eq!(
            store.insert("food_orders", json!({})).await,
            Err(InsertError::Unavailable("connection reset".into()))
        );
        assert!(store.rows("food_orders").is_empty());
    }
}
