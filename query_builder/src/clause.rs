//! Clause values
//!
//! This module defines the clauses a statement can declare and their default
//! rendering, used when no dialect builder is registered for the clause.

use crate::expression::Expression;
use crate::statement::Statement;

/// Clause keywords, in the order a SELECT compiles them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClauseKind {
    Where,
    OrderBy,
    Limit,
}

impl ClauseKind {
    pub const SELECT_ORDER: [ClauseKind; 3] =
        [ClauseKind::Where, ClauseKind::OrderBy, ClauseKind::Limit];

    pub fn name(&self) -> &'static str {
        match self {
            ClauseKind::Where => "WHERE",
            ClauseKind::OrderBy => "ORDER BY",
            ClauseKind::Limit => "LIMIT",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_uppercase().as_str() {
            "WHERE" => Some(ClauseKind::Where),
            "ORDER BY" => Some(ClauseKind::OrderBy),
            "LIMIT" => Some(ClauseKind::Limit),
            _ => None,
        }
    }
}

/// WHERE clause: top-level conditions, implicitly AND-joined
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Where {
    pub exprs: Vec<Expression>,
}

impl Where {
    pub fn new(exprs: Vec<Expression>) -> Self {
        Self { exprs }
    }

    pub fn push(mut self, expr: Expression) -> Self {
        self.exprs.push(expr);
        self
    }
}

/// Sort direction of an ORDER BY column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// ORDER BY clause
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderBy {
    pub columns: Vec<(String, SortOrder)>,
}

impl OrderBy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(mut self, column: &str, order: SortOrder) -> Self {
        self.columns.push((column.to_string(), order));
        self
    }
}

/// Row limit of a pagination request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowLimit {
    #[default]
    Unbounded,
    Bounded(u64),
}

impl RowLimit {
    /// Effective limit; `Bounded(0)` counts as no limit
    pub fn value(&self) -> Option<u64> {
        match self {
            RowLimit::Bounded(n) if *n > 0 => Some(*n),
            _ => None,
        }
    }
}

/// Plain integer limits: zero or negative means no limit
impl From<i64> for RowLimit {
    fn from(limit: i64) -> Self {
        match u64::try_from(limit) {
            Ok(n) if n > 0 => RowLimit::Bounded(n),
            _ => RowLimit::Unbounded,
        }
    }
}

impl From<i32> for RowLimit {
    fn from(limit: i32) -> Self {
        RowLimit::from(i64::from(limit))
    }
}

impl From<u64> for RowLimit {
    fn from(limit: u64) -> Self {
        if limit > 0 {
            RowLimit::Bounded(limit)
        } else {
            RowLimit::Unbounded
        }
    }
}

/// Optional limits: absent means no limit
impl<T> From<Option<T>> for RowLimit
where
    T: Into<RowLimit>,
{
    fn from(limit: Option<T>) -> Self {
        limit.map(Into::into).unwrap_or(RowLimit::Unbounded)
    }
}

/// LIMIT clause: a pagination request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Limit {
    pub offset: u64,
    pub limit: RowLimit,
}

impl Limit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: impl Into<RowLimit>) -> Self {
        self.limit = limit.into();
        self
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }
}

/// A declared clause
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    Where(Where),
    OrderBy(OrderBy),
    Limit(Limit),
}

impl Clause {
    pub fn kind(&self) -> ClauseKind {
        match self {
            Clause::Where(_) => ClauseKind::Where,
            Clause::OrderBy(_) => ClauseKind::OrderBy,
            Clause::Limit(_) => ClauseKind::Limit,
        }
    }

    /// Default rendering into the statement buffer
    pub fn build(&self, stmt: &mut Statement) {
        match self {
            Clause::Where(clause) => {
                if clause.exprs.is_empty() {
                    return;
                }
                stmt.write_str("WHERE ");
                for (idx, expr) in clause.exprs.iter().enumerate() {
                    if idx > 0 {
                        stmt.write_str(" AND ");
                    }
                    expr.build(stmt);
                }
            }
            Clause::OrderBy(clause) => {
                if clause.columns.is_empty() {
                    return;
                }
                stmt.write_str("ORDER BY ");
                for (idx, (column, order)) in clause.columns.iter().enumerate() {
                    if idx > 0 {
                        stmt.write_str(", ");
                    }
                    stmt.write_quoted(column);
                    stmt.write_char(' ');
                    stmt.write_str(order.to_sql());
                }
            }
            Clause::Limit(clause) => {
                if let Some(limit) = clause.limit.value() {
                    stmt.write_str("LIMIT ");
                    stmt.write_str(&limit.to_string());
                }
                if clause.offset > 0 {
                    if clause.limit.value().is_some() {
                        stmt.write_char(' ');
                    }
                    stmt.write_str("OFFSET ");
                    stmt.write_str(&clause.offset.to_string());
                }
            }
        }
    }
}

impl From<Where> for Clause {
    fn from(clause: Where) -> Self {
        Clause::Where(clause)
    }
}

impl From<OrderBy> for Clause {
    fn from(clause: OrderBy) -> Self {
        Clause::OrderBy(clause)
    }
}

impl From<Limit> for Clause {
    fn from(clause: Limit) -> Self {
        Clause::Limit(clause)
    }
}
