//! List query descriptor and compiler
//!
//! A [`ListQuery`] carries equality filters, an optional sort key, a sort
//! direction, and limit/offset pagination. [`compile`] turns it into a
//! parameterized `SELECT` using [`sqlx::QueryBuilder`]:
//!
//! - filters are ANDed; empty text filters and `None` filters are skipped
//! - the sort key is looked up in the entity's allow-list and falls back to `id`
//! - ordering by anything other than `id` gets an `id ASC` tie-breaker
//! - a limit of 0 omits `LIMIT`; an offset of 0 omits `OFFSET`
//!
//! Column names only ever come from `&'static str` allow-lists; every value is
//! bound with `push_bind`.

use serde::{Deserialize, Serialize};
use sqlx::{Encode, Postgres, QueryBuilder, Type};

use crate::error::DatabaseError;

/// Largest page size a list call may request
pub const MAX_LIMIT: i64 = 1000;

/// Identity column every listed table is keyed by
pub const IDENTITY_COLUMN: &str = "id";

/// Sort order of a list query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Parses `ASC`/`DESC` exactly; anything else, lowercase included, is ascending
    pub fn parse(raw: &str) -> Self {
        match raw {
            "DESC" => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

/// Filter, sort, and pagination for a list call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery<F> {
    pub filter: F,
    /// Public sort key; resolved through the entity's allow-list
    pub sort_by: Option<String>,
    pub sort_direction: SortDirection,
    /// Page size; 0 means unlimited
    pub limit: i64,
    pub offset: i64,
}

impl<F: Default> ListQuery<F> {
    /// An unfiltered, unpaginated query in identity order
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F> ListQuery<F> {
    pub fn filtered(filter: F) -> Self {
        Self {
            filter,
            sort_by: None,
            sort_direction: SortDirection::Ascending,
            limit: 0,
            offset: 0,
        }
    }

    pub fn sorted_by(mut self, key: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_by = Some(key.into());
        self.sort_direction = direction;
        self
    }

    pub fn paginate(mut self, limit: i64, offset: i64) -> Self {
        self.limit = limit;
        self.offset = offset;
        self
    }

    /// Rejects negative values and limits above [`MAX_LIMIT`]
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::InvalidPagination`] when either value is out of range.
    pub fn validate_pagination(&self) -> Result<(), DatabaseError> {
        if self.limit < 0 || self.offset < 0 {
            return Err(DatabaseError::invalid_pagination(
                "limit and offset must not be negative",
            ));
        }
        if self.limit > MAX_LIMIT {
            return Err(DatabaseError::invalid_pagination(format!(
                "limit must not exceed {MAX_LIMIT}"
            )));
        }
        Ok(())
    }
}

/// Entity-specific half of a list query
pub trait ListFilter {
    /// `SELECT <columns> FROM <table>` the compiled statement starts with
    const SELECT: &'static str;

    /// Public sort key to column pairs
    const SORT_COLUMNS: &'static [(&'static str, &'static str)];

    /// Adds this filter's conditions to the `WHERE` clause
    fn push_conditions(&self, clause: &mut WhereClause<'_>);

    /// Resolves a public sort key, falling back to the identity column
    fn sort_column(key: Option<&str>) -> &'static str {
        key.and_then(|key| {
            Self::SORT_COLUMNS
                .iter()
                .find(|(public, _)| *public == key)
                .map(|(_, column)| *column)
        })
        .unwrap_or(IDENTITY_COLUMN)
    }
}

/// Accumulates `WHERE` conditions joined with `AND`
pub struct WhereClause<'q> {
    builder: &'q mut QueryBuilder<'static, Postgres>,
    started: bool,
}

impl<'q> WhereClause<'q> {
    fn new(builder: &'q mut QueryBuilder<'static, Postgres>) -> Self {
        Self {
            builder,
            started: false,
        }
    }

    fn keyword(&mut self) {
        self.builder.push(if self.started { " AND " } else { " WHERE " });
        self.started = true;
    }

    /// Adds a fixed condition with no bound values
    pub fn raw(&mut self, condition: &'static str) -> &mut Self {
        self.keyword();
        self.builder.push(condition);
        self
    }

    /// Adds `column = value` unless the value is empty
    pub fn text_eq(&mut self, column: &'static str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.keyword();
            self.builder.push(column).push(" = ").push_bind(value.to_owned());
        }
        self
    }

    /// Adds `column = value` when a value is present
    pub fn eq<T>(&mut self, column: &'static str, value: Option<T>) -> &mut Self
    where
        T: 'static + Encode<'static, Postgres> + Type<Postgres> + Send,
    {
        if let Some(value) = value {
            self.keyword();
            self.builder.push(column).push(" = ").push_bind(value);
        }
        self
    }
}

/// Compiles a list query into a parameterized statement
///
/// # Errors
///
/// Returns [`DatabaseError::InvalidPagination`] for out-of-range limit or offset.
pub fn compile<F: ListFilter>(
    query: &ListQuery<F>,
) -> Result<QueryBuilder<'static, Postgres>, DatabaseError> {
    query.validate_pagination()?;

    let mut builder = QueryBuilder::new(F::SELECT);
    query.filter.push_conditions(&mut WhereClause::new(&mut builder));

    let column = F::sort_column(query.sort_by.as_deref());
    builder
        .push(" ORDER BY ")
        .push(column)
        .push(" ")
        .push(query.sort_direction.as_sql());
    if column != IDENTITY_COLUMN {
        builder.push(", id ASC");
    }

    if query.limit > 0 {
        builder.push(" LIMIT ").push_bind(query.limit);
    }
    if query.offset > 0 {
        builder.push(" OFFSET ").push_bind(query.offset);
    }

    Ok(builder)
}
