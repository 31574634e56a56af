use serde_json::Value;

/// Characters reserved by Telegram's MarkdownV2 dialect
const RESERVED: &str = r"_*[]()~`>#+-=|{}.!";

/// Escapes text for Telegram MarkdownV2 by prefixing every reserved
/// character with a backslash. Not idempotent, call it exactly once per
/// raw value.
pub fn escape_markdown_v2(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if RESERVED.contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Renders a JSON value as plain text so non-string field values can be
/// escaped and embedded. Strings pass through unquoted, null becomes the
/// empty string, everything else uses its JSON representation.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
