use mongodb::bson::{Bson, Document};
use serde_json::Value;

/// Timestamp-valued fields rendered as ISO-8601 text on the way out. The
/// set is closed and small, so no reflection over the document is needed.
const TIMESTAMP_FIELDS: [&str; 4] =
    ["start_date", "end_date", "created_at", "updated_at"];

/// Converts a stored document into its JSON-safe client shape:
///
/// - the native `_id` becomes a string-typed `id` field (ObjectId hex, or
///   `null` when the store returned no identifier);
/// - each known timestamp field that actually holds a BSON datetime becomes
///   its RFC 3339 rendering;
/// - everything else passes through unchanged.
pub fn normalize_document(mut document: Document) -> Value {
    let id = match document.remove("_id") {
        Some(Bson::ObjectId(oid)) => Value::String(oid.to_hex()),
        Some(Bson::String(s)) => Value::String(s),
        Some(other) => Value::String(other.to_string()),
        None => Value::Null,
    };

    let mut object = serde_json::Map::with_capacity(document.len() + 1);
    object.insert("id".to_string(), id);

    for (key, value) in document {
        let json = match value {
            Bson::DateTime(dt)
                if TIMESTAMP_FIELDS.contains(&key.as_str()) =>
            {
                Value::String(dt.to_chrono().to_rfc3339())
            }
            other => other.into_relaxed_extjson(),
        };
        object.insert(key, json);
    }

    Value::Object(object)
}
