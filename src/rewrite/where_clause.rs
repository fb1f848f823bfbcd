//! WHERE clause rewriting
//!
//! Oracle needs a non-trivial condition to lead the clause, explicit
//! parentheses around raw conditions that carry their own AND/OR, and
//! split membership lists.

use crate::rewrite::membership::expand_membership;
use query_builder::{Expression, Statement, Where};

/// Write ` WHERE ` and the clause's conditions
pub fn rewrite_where(clause: &Where, stmt: &mut Statement) {
    stmt.write_str(" WHERE ");

    let exprs = anchor_leading_condition(&clause.exprs);
    let grouped = exprs.len() > 1;

    for (idx, expr) in exprs.iter().enumerate() {
        if idx > 0 {
            if expr.is_single_or() {
                stmt.write_str(" OR ");
            } else {
                stmt.write_str(" AND ");
            }
        }

        if grouped && needs_parentheses(expr) {
            stmt.write_char('(');
            expr.build(stmt);
            stmt.write_char(')');
            continue;
        }

        match expr {
            Expression::In { column, values } if values.len() > 1 => {
                expand_membership(column, values, stmt);
            }
            _ => expr.build(stmt),
        }
    }

    crate::trace_log!("[WHERE] {} conditions -> {}", exprs.len(), stmt.sql());
}

/// Order conditions so the first one is not a single-condition OR group.
///
/// The first condition that is anything else swaps places with the head.
/// When every condition is a single-condition OR group the order is kept.
fn anchor_leading_condition(exprs: &[Expression]) -> Vec<&Expression> {
    let mut ordered: Vec<&Expression> = exprs.iter().collect();
    if let Some(anchor) = ordered.iter().position(|expr| !expr.is_single_or()) {
        ordered.swap(0, anchor);
    }
    ordered
}

/// Raw SQL conditions mentioning `and`/`or`, bare or as the only member of a group.
///
/// This is a text match: identifiers such as `order_id` also trigger it.
fn needs_parentheses(expr: &Expression) -> bool {
    match expr {
        Expression::Or(exprs) | Expression::And(exprs) => match exprs.as_slice() {
            [Expression::Expr { sql, .. }] => has_logical_keyword(sql),
            _ => false,
        },
        Expression::Expr { sql, .. } => has_logical_keyword(sql),
        _ => false,
    }
}

fn has_logical_keyword(sql: &str) -> bool {
    let sql = sql.to_lowercase();
    sql.contains("and") || sql.contains("or")
}
