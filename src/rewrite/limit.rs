//! Pagination rewriting
//!
//! Oracle pages with `OFFSET n ROWS FETCH NEXT m ROWS ONLY`, which is only
//! well-formed after an ORDER BY. Without a declared ordering one is
//! synthesized from the primary key, or from a constant subquery.

use query_builder::{Clause, ClauseKind, Limit, Statement};

/// Write the pagination for `clause`
pub fn rewrite_limit(clause: &Limit, stmt: &mut Statement) {
    if !has_ordering(stmt) {
        stmt.write_str("ORDER BY ");
        match stmt
            .schema
            .as_ref()
            .and_then(|schema| schema.prioritized_primary_field.clone())
        {
            Some(primary_field) => stmt.write_quoted(&primary_field),
            None => {
                let dummy_table = stmt.dialect().dummy_table_name();
                stmt.write_str("(SELECT NULL FROM ");
                stmt.write_str(dummy_table);
                stmt.write_char(')');
            }
        }
    }

    if clause.offset > 0 {
        stmt.write_str(" OFFSET ");
        stmt.write_str(&clause.offset.to_string());
        stmt.write_str(" ROWS");
    }

    if let Some(limit) = clause.limit.value() {
        stmt.write_str(" FETCH NEXT ");
        stmt.write_str(&limit.to_string());
        stmt.write_str(" ROWS ONLY");
    }

    crate::trace_log!(
        "[LIMIT] offset={} limit={:?} -> {}",
        clause.offset,
        clause.limit,
        stmt.sql()
    );
}

/// A declared ORDER BY with at least one column
fn has_ordering(stmt: &Statement) -> bool {
    matches!(
        stmt.clause(ClauseKind::OrderBy),
        Some(Clause::OrderBy(order_by)) if !order_by.columns.is_empty()
    )
}
