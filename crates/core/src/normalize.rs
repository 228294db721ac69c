use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

/// 正規化済みレコード（キー順はスキーマ定義順）
pub type NormalizedRecord = Map<String, Value>;

const OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Timestamp,
}

/// One output field and the chain of upstream paths it is read from.
///
/// `sources` are dotted paths (`source.name`) tried in order; the first
/// non-empty value wins.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub output: &'static str,
    pub sources: &'static [&'static str],
    pub kind: FieldKind,
}

#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub name: &'static str,
    pub records_key: &'static str,
    pub fields: &'static [FieldRule],
}

/// NewsAPI `everything` article objects.
pub const NEWS_SCHEMA: Schema = Schema {
    name: "news",
    records_key: "articles",
    fields: &[
        FieldRule {
            output: "title",
            sources: &["title"],
            kind: FieldKind::Text,
        },
        FieldRule {
            output: "description",
            sources: &["description"],
            kind: FieldKind::Text,
        },
        FieldRule {
            output: "url",
            sources: &["url"],
            kind: FieldKind::Text,
        },
        FieldRule {
            output: "image",
            sources: &["urlToImage"],
            kind: FieldKind::Text,
        },
        FieldRule {
            output: "publishedAt",
            sources: &["publishedAt"],
            kind: FieldKind::Timestamp,
        },
        FieldRule {
            output: "source",
            sources: &["source.name"],
            kind: FieldKind::Text,
        },
    ],
};

/// Algolia Hacker News search hits.
pub const FORUM_SCHEMA: Schema = Schema {
    name: "forum",
    records_key: "hits",
    fields: &[
        FieldRule {
            output: "title",
            sources: &["title", "story_title"],
            kind: FieldKind::Text,
        },
        FieldRule {
            output: "url",
            sources: &["url", "story_url"],
            kind: FieldKind::Text,
        },
        FieldRule {
            output: "author",
            sources: &["author"],
            kind: FieldKind::Text,
        },
        FieldRule {
            output: "points",
            sources: &["points"],
            kind: FieldKind::Number,
        },
        FieldRule {
            output: "created_at",
            sources: &["created_at"],
            kind: FieldKind::Timestamp,
        },
    ],
};

/// Normalize every record under `schema.records_key`.
///
/// Never fails: a missing or non-array records key yields an empty list and a
/// malformed record yields a record with its fields missing.
pub fn normalize(raw: &Value, schema: &Schema) -> Vec<NormalizedRecord> {
    let Some(records) = raw.get(schema.records_key) else {
        tracing::debug!("[{}] no '{}' key in upstream body", schema.name, schema.records_key);
        return Vec::new();
    };

    let Some(records) = records.as_array() else {
        tracing::warn!(
            "[{}] '{}' is not an array, treating as empty",
            schema.name,
            schema.records_key
        );
        return Vec::new();
    };

    records
        .iter()
        .map(|record| normalize_record(record, schema))
        .collect()
}

fn normalize_record(record: &Value, schema: &Schema) -> NormalizedRecord {
    let mut out = NormalizedRecord::new();
    for rule in schema.fields {
        if let Some(value) = extract(record, rule) {
            out.insert(rule.output.to_string(), value);
        }
    }
    out
}

fn extract(record: &Value, rule: &FieldRule) -> Option<Value> {
    match rule.kind {
        FieldKind::Text => first_text(record, rule.sources).map(Value::String),
        FieldKind::Number => rule
            .sources
            .iter()
            .filter_map(|path| lookup(record, path))
            .find(|v| v.is_number())
            .cloned(),
        FieldKind::Timestamp => {
            let raw = first_text(record, rule.sources).unwrap_or_default();
            Some(Value::String(format_timestamp(&raw)))
        }
    }
}

fn first_text(record: &Value, sources: &[&str]) -> Option<String> {
    let mut fallback = None;
    for path in sources {
        let text = match lookup(record, path) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => continue,
        };
        if !text.is_empty() {
            return Some(text);
        }
        fallback.get_or_insert(text);
    }
    fallback
}

fn lookup<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(record, |current, key| current.as_object()?.get(key))
}

/// Render an ISO-8601 timestamp as `YYYY-MM-DD HH:MM UTC`.
///
/// Empty input stays empty and anything unparseable is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match parse_iso8601(raw) {
        Some(dt) => dt.format(OUTPUT_FORMAT).to_string(),
        None => {
            tracing::debug!("Unparseable timestamp passed through: {}", raw);
            raw.to_string()
        }
    }
}

fn parse_iso8601(raw: &str) -> Option<DateTime<Utc>> {
    let candidate = raw.trim().replace('Z', "+00:00");

    if let Ok(dt) = DateTime::parse_from_rfc3339(&candidate) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z"] {
        if let Ok(dt) = DateTime::parse_from_str(&candidate, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    // Naive values carry no offset and are read as UTC
    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&candidate, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(&candidate, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
