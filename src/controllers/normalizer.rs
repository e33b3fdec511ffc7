// Maps whatever shape the queue API returns onto `SongRecord`s
use serde_json::{Map, Number, Value};

use crate::models::SongRecord;

/// Key aliases per canonical field, highest priority first.
const TITLE_ALIASES: &[&str] = &["title", "titulo", "name", "song", "track"];
const ARTIST_ALIASES: &[&str] = &["artist", "artista", "author", "by", "singer"];
const DURATION_ALIASES: &[&str] = &["duration", "duracion", "length", "time"];
const REQUESTER_ALIASES: &[&str] = &["requestedBy", "requester", "usuario", "user", "requested_by"];

/// Object keys that usually hold the song list, checked in this order.
const CONTAINER_KEYS: &[&str] = &["queue", "songs", "items", "tracks", "list"];

/// Borrowed view over an untyped upstream value.
///
/// JSON-falsy scalars (`null`, `false`, `0`, `""`) collapse into `Absent`.
#[derive(Debug, Clone, Copy)]
pub enum RawShape<'a> {
    Absent,
    Text(&'a str),
    Object(&'a Map<String, Value>),
    Array(&'a [Value]),
    Scalar,
}

impl<'a> From<&'a Value> for RawShape<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null | Value::Bool(false) => RawShape::Absent,
            Value::String(text) if text.is_empty() => RawShape::Absent,
            Value::Number(number) if is_zero(number) => RawShape::Absent,
            Value::String(text) => RawShape::Text(text),
            Value::Object(fields) => RawShape::Object(fields),
            Value::Array(items) => RawShape::Array(items),
            Value::Bool(true) | Value::Number(_) => RawShape::Scalar,
        }
    }
}

/// Turn one song-like value into a `SongRecord`. Never fails: anything
/// unrecognised degrades to empty fields.
pub fn normalize_song(raw: &Value) -> SongRecord {
    match RawShape::from(raw) {
        RawShape::Text(title) => SongRecord::with_title(title),
        RawShape::Object(fields) => SongRecord {
            title: lookup(fields, TITLE_ALIASES),
            artist: lookup(fields, ARTIST_ALIASES),
            duration: lookup(fields, DURATION_ALIASES),
            requested_by: lookup(fields, REQUESTER_ALIASES),
        },
        RawShape::Absent | RawShape::Array(_) | RawShape::Scalar => SongRecord::default(),
    }
}

/// Pull the song list out of a parsed queue response.
///
/// Arrays are taken as-is. Objects are searched for a known container key,
/// then for their first array-valued property, and are otherwise treated as a
/// single song. Everything else yields no songs.
pub fn extract_songs(parsed: &Value) -> Vec<SongRecord> {
    match RawShape::from(parsed) {
        RawShape::Array(items) => normalize_all(items),
        RawShape::Object(fields) => {
            let listed = CONTAINER_KEYS
                .iter()
                .find_map(|key| fields.get(*key).and_then(Value::as_array))
                .or_else(|| fields.values().find_map(Value::as_array));
            match listed {
                Some(items) => normalize_all(items),
                None => vec![normalize_song(parsed)],
            }
        }
        RawShape::Absent | RawShape::Text(_) | RawShape::Scalar => Vec::new(),
    }
}

fn normalize_all(items: &[Value]) -> Vec<SongRecord> {
    items.iter().map(normalize_song).collect()
}

/// First alias that names a key wins, even when its value is empty.
fn lookup(fields: &Map<String, Value>, aliases: &[&str]) -> String {
    aliases
        .iter()
        .find_map(|alias| find_key(fields, alias))
        .map(field_text)
        .unwrap_or_default()
}

/// Exact key first, then the first key (in document order) equal to `alias`
/// ignoring case.
fn find_key<'a>(fields: &'a Map<String, Value>, alias: &str) -> Option<&'a Value> {
    if let Some(value) = fields.get(alias) {
        return Some(value);
    }
    let wanted = alias.to_lowercase();
    fields
        .iter()
        .find(|(key, _)| key.to_lowercase() == wanted)
        .map(|(_, value)| value)
}

fn field_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number_text(number),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn number_text(number: &Number) -> String {
    match number.as_f64() {
        _ if is_zero(number) => String::new(),
        // 180.0 reads as "180", like the front-end would print it
        Some(float) if number.is_f64() && float.fract() == 0.0 && float.abs() < 1e21 => {
            format!("{float:.0}")
        }
        _ => number.to_string(),
    }
}

fn is_zero(number: &Number) -> bool {
    number.as_f64().is_some_and(|float| float == 0.0)
}
