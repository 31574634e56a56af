/// Shared test fixtures and utilities for test modules
pub mod fixtures {
    use serde_json::{Value, json};

    /// Wraps attachments in a payload carrying the GlitchTip alias
    pub fn glitchtip_payload(attachments: Vec<Value>) -> Value {
        json!({
            "alias": "GlitchTip",
            "attachments": attachments,
        })
    }

    /// Attachment for an uptime check that recovered
    pub fn recovery_attachment() -> Value {
        json!({
            "title": "Uptime check back up",
            "title_link": "https://glitchtip.example.com/uptime/42",
            "text": "Service is back up",
            "color": "#00ff00",
            "fields": [
                {"title": "Project", "value": "billing.api"},
                {"title": "Environment", "value": "production"},
            ],
        })
    }

    /// Attachment for a failing uptime check carrying the full field set
    pub fn outage_attachment() -> Value {
        json!({
            "title": "Uptime check failed",
            "title_link": "https://glitchtip.example.com/uptime/42",
            "text": "Connection failed",
            "color": "#ff0000",
            "fields": [
                {"title": "Project", "value": "billing.api"},
                {"title": "Environment", "value": "production"},
                {"title": "Release", "value": "v1.2.3"},
                {"title": "Server Name", "value": "web-01"},
                {"title": "URL", "value": "https://status.example.com/ping"},
                {"title": "Expected status", "value": 200},
                {"title": "Timeout", "value": 30},
            ],
        })
    }
}
