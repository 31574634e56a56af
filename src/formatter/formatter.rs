use crate::escape::{escape_markdown_v2, value_to_text};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Discriminator value GlitchTip puts in its webhook payloads
pub const SOURCE_ALIAS: &str = "GlitchTip";

const EVENT_HEADER: &str = "*New GlitchTip Event*\n\n";
const EVENT_SEPARATOR: &str = "\n\n*New GlitchTip Event*\n\n";

#[derive(Deserialize, Clone, Debug, Default)]
pub struct AlertPayload {
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Attachment {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub title_link: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub fields: Vec<AttachmentField>,
}

fn default_title() -> String {
    "No title".to_string()
}

/// Structured metadata entry inside an attachment, the value is kept as a
/// raw JSON value since GlitchTip emits numbers for some of them
#[derive(Deserialize, Clone, Debug)]
pub struct AttachmentField {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub value: Value,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Up,
    Down,
    Warning,
    Unknown,
}

impl Status {
    pub fn emoji(&self) -> &'static str {
        match self {
            Status::Up => "🟢",
            Status::Down => "🔴",
            Status::Warning => "🟡",
            Status::Unknown => "⚪",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Up => "UP",
            Status::Down => "DOWN",
            Status::Warning => "WARNING",
            Status::Unknown => "UNKNOWN",
        }
    }
}

/// Derives the status of an attachment. A non-empty color wins over the
/// text heuristics, and any unrecognized color maps to UNKNOWN rather
/// than no status.
pub fn classify_status(color: &str, text: &str) -> Option<Status> {
    if !color.is_empty() {
        return Some(match color.to_lowercase().as_str() {
            "#ff0000" | "red" | "danger" => Status::Down,
            "#00ff00" | "green" | "good" => Status::Up,
            "#ffff00" | "yellow" | "warning" => Status::Warning,
            _ => Status::Unknown,
        });
    }

    let text = text.to_lowercase();
    if ["back up", "is up", "recovered", "resolved"]
        .iter()
        .any(|keyword| text.contains(keyword))
    {
        Some(Status::Up)
    } else if ["down", "failed", "error", "unavailable"]
        .iter()
        .any(|keyword| text.contains(keyword))
    {
        Some(Status::Down)
    } else {
        None
    }
}

#[derive(Default, Debug, PartialEq)]
struct EventFields {
    project: String,
    environment: String,
    release: String,
    server_name: String,
    url: String,
    expected_status: String,
    timeout: String,
}

/// Single pass over the fields list, titles are matched case-sensitively
/// and the last occurrence of a repeated title wins
fn extract_fields(fields: &[AttachmentField]) -> EventFields {
    let mut extracted = EventFields::default();

    for field in fields {
        let value = value_to_text(&field.value);
        match field.title.as_str() {
            "Project" => extracted.project = value,
            "Environment" => extracted.environment = value,
            "Release" => extracted.release = value,
            "Server Name" => extracted.server_name = value,
            "URL" => extracted.url = value,
            "Expected status" => extracted.expected_status = value,
            "Timeout" => extracted.timeout = value,
            _ => {}
        }
    }

    extracted
}

fn format_attachment(attachment: &Attachment) -> String {
    let fields = extract_fields(&attachment.fields);

    let mut lines: Vec<String> = Vec::new();

    if let Some(status) = classify_status(&attachment.color, &attachment.text) {
        lines.push(format!(
            "{} *Status*: {}",
            status.emoji(),
            escape_markdown_v2(status.label())
        ));
        lines.push(String::new());
    }

    lines.push(format!("*Title*: {}", escape_markdown_v2(&attachment.title)));

    let optional_lines = [
        ("*Description*", &attachment.text),
        ("*Monitored URL*", &fields.url),
        ("*Project*", &fields.project),
        ("*Environment*", &fields.environment),
        ("*Release*", &fields.release),
        ("*Server Name*", &fields.server_name),
        ("*Expected Status*", &fields.expected_status),
        ("*Timeout*", &fields.timeout),
    ];

    for (label, value) in optional_lines {
        if !value.is_empty() {
            lines.push(format!("{}: {}", label, escape_markdown_v2(value)));
        }
    }

    // The link line is always emitted, even when the link is empty
    lines.push(format!("*Link*: {}", escape_markdown_v2(&attachment.title_link)));

    lines.join("\n")
}

/// Turns a parsed webhook payload into the combined Telegram message.
/// Returns None when the payload is not a GlitchTip event or carries no
/// attachments, in which case nothing should be sent.
#[tracing::instrument(name = "format_payload", skip(payload))]
pub fn format_payload(payload: &AlertPayload) -> Option<String> {
    if payload.alias != SOURCE_ALIAS {
        warn!("Received payload with unexpected alias: {:?}", payload.alias);
        return None;
    }

    let blocks: Vec<String> = payload.attachments.iter().map(format_attachment).collect();

    if blocks.is_empty() {
        return None;
    }

    Some(format!("{}{}", EVENT_HEADER, blocks.join(EVENT_SEPARATOR)))
}
