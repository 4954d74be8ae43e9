use arbiter_value::{ObjectValue, Value};
use chrono::{LocalResult, SecondsFormat, TimeZone, Utc};

/// Renders a value into the single-line diagnostic form used by assertion
/// failure messages.
///
/// A top-level string renders raw (unquoted) with control characters escaped,
/// and the empty string renders as the `(empty string)` label; strings nested
/// inside containers render JSON-quoted instead. Object keys are rendered in
/// ascending lexical order regardless of insertion order, so the output is
/// deterministic for a given value tree.
pub fn format(value: &Value) -> String {
    match value {
        Value::Str(s) if s.is_empty() => "(empty string)".to_string(),
        Value::Str(s) => escape_control(s),
        _ => render(value),
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Undefined => "undefined".to_string(),
        Value::Bool(b) | Value::BoxedBool(b) => b.to_string(),
        Value::Number(n) | Value::BoxedNumber(n) => number_text(*n),
        // Nested strings are JSON-quoted; see `format` for the top level.
        Value::Str(s) => quote(s),
        // Boxed strings render value-based: the unwrapped text, unquoted and
        // without the empty-string label.
        Value::BoxedStr(s) => escape_control(s),
        Value::Date(date) => date_text(date.epoch_ms),
        Value::Regexp(regexp) => format!("/{}/{}", regexp.source, regexp.flags),
        Value::Function(func) => match &func.name {
            Some(name) => format!("function {name}() {{}}"),
            None => "function () {}".to_string(),
        },
        Value::Array(items) => render_array(items),
        Value::Object(object) => render_object(object),
    }
}

fn render_array(items: &[Value]) -> String {
    let body: Vec<String> = items.iter().map(render).collect();
    format!("[{}]", body.join(", "))
}

/// Objects render `{ key: value, ... }` over enumerable entries only; an
/// argument pack's non-enumerable `length` never appears. An empty object
/// renders with two interior spaces: `{  }`.
fn render_object(object: &ObjectValue) -> String {
    if object.entries.is_empty() {
        return "{  }".to_string();
    }
    let mut pairs: Vec<(&String, &Value)> = object.entries.iter().collect();
    pairs.sort_by_key(|(key, _)| *key);
    let body: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{}: {}", key, render(value)))
        .collect();
    format!("{{ {} }}", body.join(", "))
}

/// Escapes control characters into visible escape sequences so a string
/// containing a newline renders as `\n`, not as a line break.
fn escape_control(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if ch.is_control() => out.push_str(&format!("\\u{:04x}", ch as u32)),
            ch => out.push(ch),
        }
    }
    out
}

/// JSON-quotes a nested string, escaping per the JSON grammar.
fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_default()
}

fn number_text(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 && n.is_sign_negative() {
        return "-0".to_string();
    }
    n.to_string()
}

/// UTC RFC 3339 with millisecond precision; timestamps outside the
/// representable range render as `Invalid Date`.
fn date_text(epoch_ms: i64) -> String {
    match Utc.timestamp_millis_opt(epoch_ms) {
        LocalResult::Single(instant) => instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        _ => "Invalid Date".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_newlines_and_tabs() {
        assert_eq!(escape_control("Yo!\nMulti-\nline"), "Yo!\\nMulti-\\nline");
        assert_eq!(escape_control("a\tb\r"), "a\\tb\\r");
        assert_eq!(escape_control("plain"), "plain");
    }

    #[test]
    fn escapes_other_control_characters() {
        assert_eq!(escape_control("a\u{0}b"), "a\\u0000b");
    }

    #[test]
    fn number_text_edge_values() {
        assert_eq!(number_text(42.0), "42");
        assert_eq!(number_text(1.5), "1.5");
        assert_eq!(number_text(-0.0), "-0");
        assert_eq!(number_text(0.0), "0");
        assert_eq!(number_text(f64::NAN), "NaN");
        assert_eq!(number_text(f64::INFINITY), "Infinity");
        assert_eq!(number_text(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn date_text_renders_utc_millis() {
        assert_eq!(date_text(0), "1970-01-01T00:00:00.000Z");
        assert_eq!(date_text(1_500), "1970-01-01T00:00:01.500Z");
    }

    #[test]
    fn date_text_out_of_range_is_invalid() {
        assert_eq!(date_text(i64::MAX), "Invalid Date");
    }
}
