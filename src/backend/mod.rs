//! # Backend Ports
//!
//! The hosted file storage and database the submissions write to, hidden behind two async
//! traits. Actors only ever see [`Backend`], so the in-memory implementations in [`memory`]
//! can stand in for the real services in the demo and in tests.

pub mod memory;

pub use memory::*;

use crate::model::PaymentProof;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Storage failed to accept a file.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UploadError {
    /// Something is already stored at the destination path; uploads never overwrite.
    #[error("Object already exists: {0}")]
    AlreadyExists(String),

    #[error("Storage rejected upload: {0}")]
    Rejected(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// The database failed to store a row.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InsertError {
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Database unavailable: {0}")]
    Unavailable(String),
}

/// Remote object storage for payment proofs.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Stores `file` at `path` inside `bucket` and returns its public URL.
    async fn upload(&self, bucket: &str, path: &str, file: &PaymentProof) -> Result<String, UploadError>;
}

/// Hosted table store for submitted orders and bookings.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Inserts one row and returns it as stored, including generated columns.
    async fn insert(&self, table: &str, record: Value) -> Result<Value, InsertError>;
}

/// The two ports, shared by every actor that submits.
#[derive(Clone)]
pub struct Backend {
    pub storage: Arc<dyn FileStorage>,
    pub records: Arc<dyn RecordStore>,
}

impl Backend {
    pub fn new(storage: Arc<dyn FileStorage>, records: Arc<dyn RecordStore>) -> Self {
        Self { storage, records }
    }

    /// In-memory storage and records, returned alongside so tests can inspect them.
    pub fn in_memory(
        public_base_url: &str,
    ) -> (Self, Arc<InMemoryFileStorage>, Arc<InMemoryRecordStore>) {
        let storage = Arc::new(InMemoryFileStorage::new(public_base_url));
        let records = Arc::new(InMemoryRecordStore::new());
        (Self::new(storage.clone(), records.clone()), storage, records)
    }
}
