//! Membership list expansion
//!
//! Oracle rejects IN lists longer than 1000 expressions (ORA-01795), so
//! longer lists are split into OR-joined chunks.

use query_builder::{Statement, Value};

/// Most expressions Oracle accepts in one IN list
pub const MAX_IN_LIST_SIZE: usize = 1000;

/// Write `column IN (...)` for `values`, split into chunks when needed.
///
/// Placeholders are added in value order.
pub fn expand_membership(column: &str, values: &[Value], stmt: &mut Statement) {
    let chunked = values.len() > MAX_IN_LIST_SIZE;
    if chunked {
        stmt.write_char('(');
    }

    for (idx, chunk) in values.chunks(MAX_IN_LIST_SIZE).enumerate() {
        if idx > 0 {
            stmt.write_str(" OR ");
        }
        stmt.write_quoted(column);
        stmt.write_str(" IN (");
        stmt.add_vars(chunk);
        stmt.write_char(')');
    }

    if chunked {
        stmt.write_char(')');
    }

    crate::debug_log!("[IN] {} values for {}", values.len(), column);
}
