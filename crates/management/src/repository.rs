//! Record repositories, the injected query provider behind every page.
//!
//! Pages never hold static arrays; they ask a [`Repository`] for records
//! matching a [`ListQuery`]. The in-memory backend keeps insertion order and
//! replaces records wholesale on update (last write wins). Status changes go
//! through [`Repository::modify`] so the check and the write see one value.

use async_trait::async_trait;
use creator_core::{CreatorError, CreatorResult, Record};
use creator_reporting::{RecordView, SortDirection};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

/// `list({ where, orderBy, limit })` in typed form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    /// Field-equality map. Array fields match by membership.
    #[serde(default, rename = "where")]
    pub where_eq: BTreeMap<String, Value>,
    #[serde(default)]
    pub order_by: Vec<(String, SortDirection)>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.where_eq.insert(field.into(), value.into());
        self
    }

    /// Equality on an optional query-string token; empty and `None` are no-ops.
    pub fn where_token(self, field: impl Into<String>, token: Option<&str>) -> Self {
        match token {
            Some(token) if !token.is_empty() => self.where_eq(field, token),
            _ => self,
        }
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.order_by.push((field.into(), direction));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The filter/sort view that evaluates this query.
    pub fn view(&self) -> RecordView {
        let mut view = RecordView::new();
        for (field, value) in &self.where_eq {
            view = view.filter_eq(field.clone(), value.clone());
        }
        for (field, direction) in &self.order_by {
            view = view.sort_by(field.clone(), *direction);
        }
        if let Some(limit) = self.limit {
            view = view.limit(limit);
        }
        view
    }
}

/// In-place edit applied by [`Repository::modify`]. An `Err` leaves the
/// stored record untouched.
pub type Mutation<R> = Box<dyn FnOnce(&mut R) -> CreatorResult<()> + Send>;

#[async_trait]
pub trait Repository<R: Record>: Send + Sync {
    async fn list(&self, query: &ListQuery) -> CreatorResult<Vec<R>>;
    async fn get(&self, id: Uuid) -> CreatorResult<R>;
    async fn create(&self, record: R) -> CreatorResult<R>;
    /// Replace the stored record with the same id.
    async fn update(&self, record: R) -> CreatorResult<R>;
    /// Read, edit and write back one record atomically with respect to every
    /// other write on this repository.
    async fn modify(&self, id: Uuid, mutation: Mutation<R>) -> CreatorResult<R>;
    async fn delete(&self, id: Uuid) -> CreatorResult<()>;
}

/// Process-local repository; records live as long as the value.
pub struct InMemoryRepository<R> {
    records: RwLock<Vec<R>>,
}

impl<R: Record> InMemoryRepository<R> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    pub fn with_records(records: Vec<R>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl<R: Record> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> Repository<R> for InMemoryRepository<R> {
    async fn list(&self, query: &ListQuery) -> CreatorResult<Vec<R>> {
        let records = self.records.read();
        Ok(query.view().apply(&records))
    }

    async fn get(&self, id: Uuid) -> CreatorResult<R> {
        self.records
            .read()
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| CreatorError::not_found(R::KIND, id))
    }

    async fn create(&self, record: R) -> CreatorResult<R> {
        let mut records = self.records.write();
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(CreatorError::Validation(format!(
                "{} {} already exists",
                R::KIND,
                record.id()
            )));
        }
        records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, record: R) -> CreatorResult<R> {
        let mut records = self.records.write();
        let slot = records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| CreatorError::not_found(R::KIND, record.id()))?;
        *slot = record.clone();
        Ok(record)
    }

    async fn modify(&self, id: Uuid, mutation: Mutation<R>) -> CreatorResult<R> {
        let mut records = self.records.write();
        let slot = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| CreatorError::not_found(R::KIND, id))?;
        let mut next = slot.clone();
        mutation(&mut next)?;
        *slot = next.clone();
        Ok(next)
    }

    async fn delete(&self, id: Uuid) -> CreatorResult<()> {
        let mut records = self.records.write();
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| CreatorError::not_found(R::KIND, id))?;
        records.remove(index);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
