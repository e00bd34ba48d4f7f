// Port for the hosted relational record store.
//
// Purpose
// - Describe the store client the dashboard talks to: insert, select with
//   filter/order/limit, and delete, per table.
//
// Boundaries
// - No concrete backend here. The in_memory adapter supports tests and local
//   development; a hosted store adapter implements the same trait.

pub mod in_memory;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use std::cmp::Ordering;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
}

/// A single column value as seen by filters and ordering.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Integer(i64),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    /// Values of different kinds never compare.
    pub fn compare(&self, other: &FieldValue) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => Some(a.cmp(b)),
            (FieldValue::Number(a), FieldValue::Number(b)) => a.partial_cmp(b),
            (FieldValue::Integer(a), FieldValue::Integer(b)) => Some(a.cmp(b)),
            (FieldValue::Date(a), FieldValue::Date(b)) => Some(a.cmp(b)),
            (FieldValue::Timestamp(a), FieldValue::Timestamp(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(value)
    }
}

/// A typed row of one table.
pub trait Record: Clone + Send + Sync + 'static {
    const TABLE: &'static str;

    fn id(&self) -> &str;

    fn field(&self, column: &str) -> Option<FieldValue>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Gte,
    Lte,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: &'static str,
    pub operator: Operator,
    pub value: FieldValue,
}

impl Filter {
    pub fn eq(column: &'static str, value: impl Into<FieldValue>) -> Self {
        Self {
            column,
            operator: Operator::Eq,
            value: value.into(),
        }
    }

    pub fn gte(column: &'static str, value: impl Into<FieldValue>) -> Self {
        Self {
            column,
            operator: Operator::Gte,
            value: value.into(),
        }
    }

    pub fn lte(column: &'static str, value: impl Into<FieldValue>) -> Self {
        Self {
            column,
            operator: Operator::Lte,
            value: value.into(),
        }
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        let Some(actual) = record.field(self.column) else {
            return false;
        };
        match (self.operator, actual.compare(&self.value)) {
            (Operator::Eq, Some(Ordering::Equal)) => true,
            (Operator::Gte, Some(Ordering::Greater | Ordering::Equal)) => true,
            (Operator::Lte, Some(Ordering::Less | Ordering::Equal)) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub column: &'static str,
    pub direction: Direction,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filters: Vec<Filter>,
    pub order: Option<OrderBy>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn order_by(mut self, column: &'static str, direction: Direction) -> Self {
        self.order = Some(OrderBy { column, direction });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    async fn insert(&self, row: R) -> Result<R, StoreError>;
    async fn select(&self, query: &Query) -> Result<Vec<R>, StoreError>;
    async fn delete(&self, filters: &[Filter]) -> Result<u64, StoreError>;
}

pub type SharedStore<R> = Arc<dyn RecordStore<R>>;
