// In memory implementation of the RecordStore port.
//
// Purpose
// - Exercise use case handlers without a hosted database.
//
// Responsibilities
// - Keep rows of one table in insertion order.
// - Enforce unique ids.
// - Enforce foreign keys and cascade deletes to dependent tables.
// - Apply filters, ordering and limit the way the hosted store does.

use crate::shared::infrastructure::record_store::{
    Direction, FieldValue, Filter, Query, Record, RecordStore, StoreError,
};
use async_trait::async_trait;
use std::cmp::Ordering;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Row storage of another table, as seen through a foreign key.
#[async_trait]
trait LinkedTable: Send + Sync {
    fn table(&self) -> &'static str;

    async fn contains_id(&self, id: &str) -> bool;

    async fn delete_referencing(&self, column: &'static str, ids: &[String]) -> u64;
}

#[async_trait]
impl<R: Record> LinkedTable for RwLock<Vec<R>> {
    fn table(&self) -> &'static str {
        R::TABLE
    }

    async fn contains_id(&self, id: &str) -> bool {
        self.read().await.iter().any(|row| row.id() == id)
    }

    async fn delete_referencing(&self, column: &'static str, ids: &[String]) -> u64 {
        let mut guard = self.write().await;
        let before = guard.len();
        guard.retain(|row| match row.field(column) {
            Some(FieldValue::Text(value)) => !ids.contains(&value),
            _ => true,
        });
        (before - guard.len()) as u64
    }
}

struct ForeignKey {
    column: &'static str,
    table: Arc<dyn LinkedTable>,
}

pub struct InMemoryRecordStore<R: Record> {
    rows: Arc<RwLock<Vec<R>>>,
    references: Vec<ForeignKey>,
    dependents: Vec<ForeignKey>,
    is_offline: bool,
}

impl<R: Record> Default for InMemoryRecordStore<R> {
    fn default() -> Self {
        Self::with_rows(Vec::new())
    }
}

impl<R: Record> InMemoryRecordStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<R>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
            references: Vec::new(),
            dependents: Vec::new(),
            is_offline: false,
        }
    }

    /// Inserts must name an existing `parent` row in `column`.
    pub fn references<P: Record>(mut self, column: &'static str, parent: &InMemoryRecordStore<P>) -> Self {
        self.references.push(ForeignKey {
            column,
            table: parent.rows.clone(),
        });
        self
    }

    /// Deleting a row also deletes the `child` rows naming it in `column`.
    pub fn cascades_to<C: Record>(mut self, column: &'static str, child: &InMemoryRecordStore<C>) -> Self {
        self.dependents.push(ForeignKey {
            column,
            table: child.rows.clone(),
        });
        self
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend(format!("{} store offline", R::TABLE)));
        }
        Ok(())
    }

    async fn ensure_references(&self, row: &R) -> Result<(), StoreError> {
        for key in &self.references {
            let exists = match row.field(key.column) {
                Some(FieldValue::Text(id)) => key.table.contains_id(&id).await,
                _ => false,
            };
            if !exists {
                return Err(StoreError::ConstraintViolation(format!(
                    "{}.{} of {} does not reference a row in {}",
                    R::TABLE,
                    key.column,
                    row.id(),
                    key.table.table()
                )));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for InMemoryRecordStore<R> {
    async fn insert(&self, row: R) -> Result<R, StoreError> {
        self.ensure_online()?;
        // Parent tables are read before this table is locked.
        self.ensure_references(&row).await?;
        let mut guard = self.rows.write().await;
        if guard.iter().any(|existing| existing.id() == row.id()) {
            return Err(StoreError::ConstraintViolation(format!(
                "duplicate key {} in {}",
                row.id(),
                R::TABLE
            )));
        }
        guard.push(row.clone());
        Ok(row)
    }

    async fn select(&self, query: &Query) -> Result<Vec<R>, StoreError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        let mut items: Vec<R> = guard
            .iter()
            .filter(|row| query.filters.iter().all(|filter| filter.matches(*row)))
            .cloned()
            .collect();

        if let Some(order) = &query.order {
            // Stable sort, rows without a comparable value keep their position.
            items.sort_by(|a, b| {
                let ordering = match (a.field(order.column), b.field(order.column)) {
                    (Some(left), Some(right)) => left.compare(&right).unwrap_or(Ordering::Equal),
                    _ => Ordering::Equal,
                };
                match order.direction {
                    Direction::Ascending => ordering,
                    Direction::Descending => ordering.reverse(),
                }
            });
        }

        if let Some(limit) = query.limit {
            items.truncate(limit);
        }
        Ok(items)
    }

    async fn delete(&self, filters: &[Filter]) -> Result<u64, StoreError> {
        self.ensure_online()?;
        if filters.is_empty() {
            return Err(StoreError::ConstraintViolation(format!(
                "delete on {} requires a filter",
                R::TABLE
            )));
        }
        let mut guard = self.rows.write().await;
        let (removed, kept): (Vec<R>, Vec<R>) = guard
            .drain(..)
            .partition(|row| filters.iter().all(|filter| filter.matches(row)));
        *guard = kept;
        drop(guard);

        if !removed.is_empty() {
            let ids: Vec<String> = removed.iter().map(|row| row.id().to_string()).collect();
            for key in &self.dependents {
                let cascaded = key.table.delete_referencing(key.column, &ids).await;
                if cascaded > 0 {
                    tracing::debug!(
                        "cascaded delete of {} {} rows from {}",
                        cascaded,
                        key.table.table(),
                        R::TABLE
                    );
                }
            }
        }
        Ok(removed.len() as u64)
    }
}
