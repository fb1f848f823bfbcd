//! SQL explain for logging
//!
//! Inlines bind vars into a compiled statement so it can be logged or
//! pasted into a console. Oracle has no boolean literal, so booleans are
//! written as 1/0.

use once_cell::sync::Lazy;
use query_builder::Value;
use regex::{Captures, Regex};

static NUMERIC_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r":(\d+)").unwrap());

const QUOTE: char = '\'';

/// Replace every `:N` placeholder with the literal form of `vars[N]`.
///
/// Placeholders without a matching var are left as they are.
pub fn explain_sql(sql: &str, vars: &[Value]) -> String {
    NUMERIC_PLACEHOLDER
        .replace_all(sql, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|idx| vars.get(idx))
                .map(literal)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Literal SQL text for a bind value
pub fn literal(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => "0".to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Text(s) => quoted(s),
        Value::Bytes(bytes) => match std::str::from_utf8(bytes) {
            Ok(s) => quoted(s),
            Err(_) => quoted("<binary>"),
        },
        Value::Timestamp(ts) => quoted(&ts.format("%Y-%m-%d %H:%M:%S%.3f").to_string()),
        Value::Json(json) => quoted(&json.to_string()),
    }
}

fn quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push(QUOTE);
    for ch in s.chars() {
        if ch == QUOTE {
            out.push(QUOTE);
        }
        out.push(ch);
    }
    out.push(QUOTE);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_booleans_become_numbers() {
        let sql = explain_sql(
            "UPDATE users SET active = :0 WHERE banned = :1",
            &[Value::Bool(true), Value::Bool(false)],
        );
        assert_eq!(sql, "UPDATE users SET active = 1 WHERE banned = 0");
    }

    #[test]
    fn test_literals_by_kind() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        let sql = explain_sql(
            "VALUES (:0, :1, :2, :3, :4, :5)",
            &[
                Value::Null,
                Value::Int(-4),
                Value::Float(2.5),
                Value::from("O'Brien"),
                Value::Timestamp(ts),
                Value::Json(json!({"a": 1})),
            ],
        );

        assert_eq!(
            sql,
            r#"VALUES (NULL, -4, 2.5, 'O''Brien', '2024-03-09 14:05:00.000', '{"a":1}')"#
        );
    }

    #[test]
    fn test_bytes() {
        assert_eq!(literal(&Value::Bytes(b"abc".to_vec())), "'abc'");
        assert_eq!(literal(&Value::Bytes(vec![0xff, 0xfe])), "'<binary>'");
    }

    #[test]
    fn test_placeholder_by_index_not_position() {
        let sql = explain_sql("a = :1 AND b = :0", &[Value::Int(0), Value::Int(1)]);
        assert_eq!(sql, "a = 1 AND b = 0");
    }

    #[test]
    fn test_double_digit_placeholders() {
        let vars: Vec<Value> = (0..12).map(Value::from).collect();
        let sql = explain_sql("x IN (:1, :10, :11)", &vars);
        assert_eq!(sql, "x IN (1, 10, 11)");
    }

    #[test]
    fn test_unmatched_placeholder_is_kept() {
        let sql = explain_sql("a = :0 AND b = :3", &[Value::Int(1)]);
        assert_eq!(sql, "a = 1 AND b = :3");
    }
}
