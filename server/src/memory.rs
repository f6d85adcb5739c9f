use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::record::{NewTodo, ProjectedRecord, TodoField, TodoRecord};
use crate::store::{RecordStore, StoreError};

/// `RecordStore` backed by a map behind a tokio `RwLock`.
///
/// Ids are random v4 UUIDs. `list` yields records in creation order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    table: RwLock<Table>,
}

#[derive(Debug, Default)]
struct Table {
    next_seq: u64,
    rows: HashMap<String, Row>,
}

#[derive(Debug)]
struct Row {
    seq: u64,
    record: TodoRecord,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn create(&self, fields: NewTodo) -> Result<String, StoreError> {
        let mut table = self.table.write().await;
        let mut id = Uuid::new_v4().to_string();
        while table.rows.contains_key(&id) {
            id = Uuid::new_v4().to_string();
        }
        let seq = table.next_seq;
        table.next_seq += 1;
        let record = TodoRecord {
            id: id.clone(),
            description: fields.description,
            status: fields.status,
        };
        table.rows.insert(id.clone(), Row { seq, record });
        Ok(id)
    }

    async fn get(&self, id: &str) -> Result<Option<TodoRecord>, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.get(id).map(|row| row.record.clone()))
    }

    async fn save(&self, record: &TodoRecord) -> Result<(), StoreError> {
        let mut table = self.table.write().await;
        let row = table
            .rows
            .get_mut(&record.id)
            .ok_or_else(|| StoreError::Missing(record.id.clone()))?;
        row.record = record.clone();
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(id).is_some())
    }

    async fn list(&self, fields: &[TodoField]) -> Result<Vec<ProjectedRecord>, StoreError> {
        let table = self.table.read().await;
        let mut rows: Vec<&Row> = table.rows.values().collect();
        rows.sort_by_key(|row| row.seq);
        Ok(rows
            .into_iter()
            .map(|row| ProjectedRecord::project(&row.record, fields))
            .collect())
    }
}
