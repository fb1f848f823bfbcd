//! Predicate tree
//!
//! This module defines the structured WHERE condition handed to dialects,
//! together with its default, dialect-agnostic rendering.

use crate::statement::Statement;
use crate::value::Value;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,  // =
    Neq, // <>
    Gt,  // >
    Gte, // >=
    Lt,  // <
    Lte, // <=
    Like,
}

impl Operator {
    pub fn to_sql(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Neq => "<>",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Like => "LIKE",
        }
    }
}

/// Node of a predicate tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Raw SQL; each `?` consumes the next var
    Expr { sql: String, vars: Vec<Value> },
    Compare {
        column: String,
        operator: Operator,
        value: Value,
    },
    /// Membership test: `column IN (values)`
    In { column: String, values: Vec<Value> },
    And(Vec<Expression>),
    Or(Vec<Expression>),
}

impl Expression {
    /// Raw SQL expression with bind vars
    pub fn expr(sql: &str, vars: Vec<Value>) -> Self {
        Self::Expr {
            sql: sql.to_string(),
            vars,
        }
    }

    pub fn compare(column: &str, operator: Operator, value: impl Into<Value>) -> Self {
        Self::Compare {
            column: column.to_string(),
            operator,
            value: value.into(),
        }
    }

    pub fn eq(column: &str, value: impl Into<Value>) -> Self {
        Self::compare(column, Operator::Eq, value)
    }

    pub fn neq(column: &str, value: impl Into<Value>) -> Self {
        Self::compare(column, Operator::Neq, value)
    }

    pub fn gt(column: &str, value: impl Into<Value>) -> Self {
        Self::compare(column, Operator::Gt, value)
    }

    pub fn gte(column: &str, value: impl Into<Value>) -> Self {
        Self::compare(column, Operator::Gte, value)
    }

    pub fn lt(column: &str, value: impl Into<Value>) -> Self {
        Self::compare(column, Operator::Lt, value)
    }

    pub fn lte(column: &str, value: impl Into<Value>) -> Self {
        Self::compare(column, Operator::Lte, value)
    }

    pub fn like(column: &str, pattern: &str) -> Self {
        Self::compare(column, Operator::Like, pattern)
    }

    pub fn in_values(column: &str, values: Vec<Value>) -> Self {
        Self::In {
            column: column.to_string(),
            values,
        }
    }

    pub fn and(exprs: Vec<Expression>) -> Self {
        Self::And(exprs)
    }

    pub fn or(exprs: Vec<Expression>) -> Self {
        Self::Or(exprs)
    }

    /// An OR group holding exactly one condition
    pub fn is_single_or(&self) -> bool {
        matches!(self, Self::Or(exprs) if exprs.len() == 1)
    }

    /// An AND group holding exactly one condition
    pub fn is_single_and(&self) -> bool {
        matches!(self, Self::And(exprs) if exprs.len() == 1)
    }

    /// Default rendering into the statement buffer
    pub fn build(&self, stmt: &mut Statement) {
        match self {
            Self::Expr { sql, vars } => {
                let mut vars = vars.iter();
                for ch in sql.chars() {
                    if ch != '?' {
                        stmt.write_char(ch);
                        continue;
                    }
                    match vars.next() {
                        Some(value) => stmt.add_var(value.clone()),
                        None => stmt.write_char('?'),
                    }
                }
            }
            Self::Compare {
                column,
                operator,
                value,
            } => {
                stmt.write_quoted(column);
                match (operator, value.is_null()) {
                    (Operator::Eq, true) => stmt.write_str(" IS NULL"),
                    (Operator::Neq, true) => stmt.write_str(" IS NOT NULL"),
                    _ => {
                        stmt.write_char(' ');
                        stmt.write_str(operator.to_sql());
                        stmt.write_char(' ');
                        stmt.add_var(value.clone());
                    }
                }
            }
            Self::In { column, values } => {
                stmt.write_quoted(column);
                match values.as_slice() {
                    [] => stmt.write_str(" IN (NULL)"),
                    [value] => {
                        stmt.write_str(" = ");
                        stmt.add_var(value.clone());
                    }
                    values => {
                        stmt.write_str(" IN (");
                        stmt.add_vars(values);
                        stmt.write_char(')');
                    }
                }
            }
            Self::And(exprs) => build_group(exprs, " AND ", stmt),
            Self::Or(exprs) => build_group(exprs, " OR ", stmt),
        }
    }
}

fn build_group(exprs: &[Expression], joiner: &str, stmt: &mut Statement) {
    match exprs {
        [] => {}
        [expr] => expr.build(stmt),
        exprs => {
            stmt.write_char('(');
            for (idx, expr) in exprs.iter().enumerate() {
                if idx > 0 {
                    stmt.write_str(joiner);
                }
                expr.build(stmt);
            }
            stmt.write_char(')');
        }
    }
}
