use serde_json::{Map, Value};

// Server payloads are not consistent about key casing. Each field lists the
// keys it accepts, in lookup order.
const TITLE_KEYS: &[&str] = &["Title", "title"];
const PRICE_KEYS: &[&str] = &["Price", "price"];
const LOCATION_KEYS: &[&str] = &["Location", "location"];
const RATING_KEYS: &[&str] = &["Rating", "rating"];
const REVIEWS_KEYS: &[&str] = &["Reviews Count", "reviews_count", "reviewsCount", "reviews"];

/// One listing normalized from a loosely-typed JSON record.
///
/// Every field keeps the display text of the source value. A field is `None`
/// when no accepted key holds a usable value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingItem {
    pub title: Option<String>,
    pub price: Option<String>,
    pub location: Option<String>,
    pub rating: Option<String>,
    pub reviews_count: Option<String>,
}

impl ListingItem {
    /// Normalizes a single array element. Returns `None` when the element is
    /// not a JSON object.
    pub fn from_json(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        Some(Self {
            title: field(obj, TITLE_KEYS),
            price: field(obj, PRICE_KEYS),
            location: field(obj, LOCATION_KEYS),
            rating: counted_field(obj, RATING_KEYS),
            reviews_count: counted_field(obj, REVIEWS_KEYS),
        })
    }
}

fn field(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find_map(display_text)
}

/// Like [`field`], but a zero count or `false` means nothing was counted.
fn counted_field(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .filter(|value| !is_zero_or_false(value))
        .find_map(display_text)
}

fn is_zero_or_false(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Bool(b) => !b,
        _ => false,
    }
}

fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
