use serde_json::{Map, Number, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

/// Builds the one-line JSON record, or `None` when `level` is below `threshold`.
pub fn format_event(
    threshold: LogLevel,
    level: LogLevel,
    ts: u64,
    event: &str,
    fields: Value,
) -> Option<String> {
    if level < threshold {
        return None;
    }

    let mut payload = Map::new();
    payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
    payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Some(Value::Object(payload).to_string())
}

pub fn log_event(threshold: LogLevel, level: LogLevel, event: &str, fields: Value) {
    if let Some(line) = format_event(threshold, level, now_unix_seconds(), event, fields) {
        write_line(&line);
    }
}

#[cfg(target_arch = "wasm32")]
fn now_unix_seconds() -> u64 {
    (js_sys::Date::now() / 1_000.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_seconds() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn write_line(line: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(line: &str) {
    println!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn debug_events_are_dropped_at_info() {
        assert!(format_event(LogLevel::Info, LogLevel::Debug, 1, "card_flipped", json!({})).is_none());
        assert!(format_event(LogLevel::Debug, LogLevel::Debug, 1, "card_flipped", json!({})).is_some());
    }

    #[test]
    fn payload_merges_fields_after_envelope() {
        let line = format_event(
            LogLevel::Info,
            LogLevel::Info,
            1_700_000_000,
            "navigated",
            json!({ "section": "skills" }),
        )
        .expect("info passes info threshold");
        let parsed: Value = serde_json::from_str(&line).expect("valid json");

        assert_eq!(
            parsed,
            json!({
                "ts": 1_700_000_000u64,
                "level": "info",
                "event": "navigated",
                "section": "skills",
            })
        );
    }

    #[test]
    fn level_field_uses_level_name() {
        let line = format_event(LogLevel::Debug, LogLevel::Debug, 0, "card_flipped", json!({}))
            .expect("debug passes debug threshold");
        let parsed: Value = serde_json::from_str(&line).expect("valid json");
        assert_eq!(parsed["level"], json!(LogLevel::Debug.as_str()));
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let line = format_event(LogLevel::Debug, LogLevel::Info, 5, "app_mounted", Value::Null)
            .expect("info passes debug threshold");
        let parsed: Value = serde_json::from_str(&line).expect("valid json");
        assert_eq!(parsed.as_object().map(|map| map.len()), Some(3));
    }

    #[test]
    fn level_parsing_is_case_insensitive() {
        assert_eq!(LogLevel::from_str(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_str("info"), Some(LogLevel::Info));
        assert_eq!(LogLevel::from_str("trace"), None);
        assert_eq!(LogLevel::Info.as_str(), "info");
    }
}
