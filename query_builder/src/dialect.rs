//! Dialect extension points
//!
//! A dialect plugs into statement compilation through two traits: [`Dialect`]
//! for placeholders, quoting and diagnostics, and [`ClauseBuilder`] for the
//! clauses whose syntax it rewrites.

use crate::clause::{ClauseKind, Limit, Where};
use crate::statement::Statement;
use crate::value::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// SQL dialect hooks used while a statement is written
pub trait Dialect: Send + Sync {
    /// Dialect name
    fn name(&self) -> &'static str;

    /// Write the placeholder for the var about to be appended at `var_index`
    fn bind_var_to(&self, writer: &mut String, var_index: usize, value: &Value);

    /// Write an identifier in the dialect's quoting style
    fn quote_to(&self, writer: &mut String, identifier: &str);

    /// Render a statement with its vars inlined, for logging
    fn explain(&self, sql: &str, vars: &[Value]) -> String;

    /// Table usable in a FROM clause when no real table is involved
    fn dummy_table_name(&self) -> &'static str;

    /// Clause builders this dialect installs
    fn clause_builders(&self) -> ClauseBuilders {
        ClauseBuilders::new()
    }
}

/// Rewriters for clause kinds whose default syntax a dialect replaces
pub trait ClauseBuilder: Send + Sync {
    fn build_where(&self, clause: &Where, stmt: &mut Statement);

    fn build_limit(&self, clause: &Limit, stmt: &mut Statement);
}

/// Clause builders keyed by clause kind, held by the host
#[derive(Clone, Default)]
pub struct ClauseBuilders {
    builders: HashMap<ClauseKind, Arc<dyn ClauseBuilder>>,
}

impl ClauseBuilders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a builder, replacing any previous one for the same kind
    pub fn register(&mut self, kind: ClauseKind, builder: Arc<dyn ClauseBuilder>) {
        self.builders.insert(kind, builder);
    }

    /// Install every builder from `other`
    pub fn extend(&mut self, other: ClauseBuilders) {
        self.builders.extend(other.builders);
    }

    pub fn get(&self, kind: ClauseKind) -> Option<Arc<dyn ClauseBuilder>> {
        self.builders.get(&kind).cloned()
    }

    /// Look up a builder by clause keyword, e.g. `"WHERE"`
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn ClauseBuilder>> {
        ClauseKind::from_name(name).and_then(|kind| self.get(kind))
    }

    pub fn contains(&self, kind: ClauseKind) -> bool {
        self.builders.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

impl fmt::Debug for ClauseBuilders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.builders.keys().map(ClauseKind::name).collect();
        names.sort_unstable();
        f.debug_struct("ClauseBuilders").field("clauses", &names).finish()
    }
}
