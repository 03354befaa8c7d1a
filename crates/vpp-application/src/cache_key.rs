//! Aggregate cache key encoding
//!
//! A [`RangeQuerySpec`] is encoded into a positional, delimited key:
//!
//! ```text
//! battery-stats::from=<from>:to=<to>:min=<min|null>:max=<max|null>:page=<p>:size=<s>
//! ```
//!
//! Absent capacity bounds are written as the literal `null` so every key
//! carries the same fields in the same order. Postcode bounds are
//! percent-escaped for `%`, `:` and `=`, which keeps the encoding injective
//! for arbitrary strings; plain digit postcodes are written unchanged.
//!
//! Two parsers read keys back:
//!
//! - [`decode_key`] is the exact inverse of [`encode_key`] and rejects
//!   anything that [`encode_key`] could not have produced.
//! - [`KeyPredicate::parse`] only recovers the range predicate. It tolerates
//!   missing pagination, unknown fields and reordering, because invalidation
//!   must make a decision for every key it finds in the cache.

use thiserror::Error;
use vpp_domain::constants::AGGREGATE_CACHE_NAMESPACE;
use vpp_domain::value_objects::{IngestedRecord, RangeQuerySpec};

/// Separator between the namespace and the field list
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Separator between fields
pub const FIELD_SEPARATOR: char = ':';

/// Separator between a field name and its value
pub const VALUE_SEPARATOR: char = '=';

/// Literal written for an absent capacity bound
pub const ABSENT_SENTINEL: &str = "null";

const FIELD_FROM: &str = "from";
const FIELD_TO: &str = "to";
const FIELD_MIN: &str = "min";
const FIELD_MAX: &str = "max";
const FIELD_PAGE: &str = "page";
const FIELD_SIZE: &str = "size";

/// Field order of an encoded key
const FIELD_ORDER: [&str; 6] = [
    FIELD_FROM, FIELD_TO, FIELD_MIN, FIELD_MAX, FIELD_PAGE, FIELD_SIZE,
];

/// Errors produced while reading a cache key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyDecodeError {
    /// The key does not start with the aggregate namespace
    #[error("key '{0}' is not in the aggregate cache namespace")]
    MissingNamespace(String),

    /// The key has the wrong number of fields
    #[error("expected {expected} fields, found {found}")]
    FieldCount {
        /// Number of fields an encoded key carries
        expected: usize,
        /// Number of fields found
        found: usize,
    },

    /// A field is not a `name=value` pair
    #[error("malformed field '{0}'")]
    MalformedField(String),

    /// A field appears out of position
    #[error("expected field '{expected}', found '{found}'")]
    UnexpectedField {
        /// Field expected at this position
        expected: &'static str,
        /// Field name found
        found: String,
    },

    /// A required field is missing
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    /// A numeric field does not parse
    #[error("invalid value '{value}' for field '{field}'")]
    InvalidNumber {
        /// Field name
        field: &'static str,
        /// Raw value
        value: String,
    },

    /// A postcode contains an unknown or truncated escape sequence
    #[error("invalid escape sequence in '{0}'")]
    InvalidEscape(String),

    /// The decoded spec lies outside the legal query domain
    #[error("decoded spec is not a valid query: {0}")]
    InvalidSpec(String),
}

/// Glob pattern matching every aggregate cache key
pub fn key_pattern() -> String {
    format!("{AGGREGATE_CACHE_NAMESPACE}{NAMESPACE_SEPARATOR}*")
}

/// Encode a spec into its cache key
///
/// ```
/// use vpp_application::encode_key;
/// use vpp_domain::value_objects::RangeQuerySpec;
///
/// let spec = RangeQuerySpec::new("1000", "4000").with_min_capacity(Some(10));
/// assert_eq!(
///     encode_key(&spec),
///     "battery-stats::from=1000:to=4000:min=10:max=null:page=0:size=50"
/// );
/// ```
pub fn encode_key(spec: &RangeQuerySpec) -> String {
    format!(
        "{AGGREGATE_CACHE_NAMESPACE}{NAMESPACE_SEPARATOR}\
         {FIELD_FROM}={}:{FIELD_TO}={}:{FIELD_MIN}={}:{FIELD_MAX}={}:{FIELD_PAGE}={}:{FIELD_SIZE}={}",
        escape(spec.postcode_from()),
        escape(spec.postcode_to()),
        encode_bound(spec.min_capacity()),
        encode_bound(spec.max_capacity()),
        spec.page(),
        spec.page_size(),
    )
}

/// Decode a key produced by [`encode_key`]
pub fn decode_key(key: &str) -> Result<RangeQuerySpec, KeyDecodeError> {
    let body = strip_namespace(key)?;
    let fields: Vec<&str> = body.split(FIELD_SEPARATOR).collect();
    if fields.len() != FIELD_ORDER.len() {
        return Err(KeyDecodeError::FieldCount {
            expected: FIELD_ORDER.len(),
            found: fields.len(),
        });
    }

    let mut values = [""; 6];
    for ((slot, field), expected) in values.iter_mut().zip(&fields).zip(FIELD_ORDER) {
        let (name, value) = split_field(field)
            .ok_or_else(|| KeyDecodeError::MalformedField((*field).to_string()))?;
        if name != expected {
            return Err(KeyDecodeError::UnexpectedField {
                expected,
                found: name.to_string(),
            });
        }
        *slot = value;
    }

    let [from, to, min, max, page, size] = values;
    let spec = RangeQuerySpec::new(unescape(from)?, unescape(to)?)
        .with_min_capacity(decode_bound(FIELD_MIN, min)?)
        .with_max_capacity(decode_bound(FIELD_MAX, max)?)
        .with_page(
            parse_number(FIELD_PAGE, page)?,
            parse_number(FIELD_SIZE, size)?,
        );
    spec.validate()
        .map_err(|e| KeyDecodeError::InvalidSpec(e.to_string()))?;
    Ok(spec)
}

/// The range predicate carried by a cache key
///
/// Postcodes compare lexicographically; every bound is inclusive and an
/// absent capacity bound does not constrain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPredicate {
    /// Lower postcode bound
    pub postcode_from: String,
    /// Upper postcode bound
    pub postcode_to: String,
    /// Lower capacity bound
    pub min_capacity: Option<i32>,
    /// Upper capacity bound
    pub max_capacity: Option<i32>,
}

impl KeyPredicate {
    /// Recover the predicate from a cache key
    ///
    /// Fields that are not `name=value` pairs and unknown field names are
    /// skipped; when a field repeats, the last occurrence wins. `from` and
    /// `to` are required, capacity bounds default to absent.
    pub fn parse(key: &str) -> Result<Self, KeyDecodeError> {
        let body = strip_namespace(key)?;

        let mut from = None;
        let mut to = None;
        let mut min = None;
        let mut max = None;
        for (name, value) in body.split(FIELD_SEPARATOR).filter_map(split_field) {
            match name {
                FIELD_FROM => from = Some(unescape(value)?),
                FIELD_TO => to = Some(unescape(value)?),
                FIELD_MIN => min = decode_bound(FIELD_MIN, value)?,
                FIELD_MAX => max = decode_bound(FIELD_MAX, value)?,
                _ => {}
            }
        }

        Ok(Self {
            postcode_from: from.ok_or(KeyDecodeError::MissingField(FIELD_FROM))?,
            postcode_to: to.ok_or(KeyDecodeError::MissingField(FIELD_TO))?,
            min_capacity: min,
            max_capacity: max,
        })
    }

    /// Whether the record's postcode lies in `[postcode_from, postcode_to]`
    pub fn postcode_in_range(&self, postcode: &str) -> bool {
        postcode >= self.postcode_from.as_str() && postcode <= self.postcode_to.as_str()
    }

    /// Whether the capacity satisfies every bound that is present
    pub fn capacity_in_range(&self, capacity: f64) -> bool {
        self.min_capacity.is_none_or(|min| capacity >= f64::from(min))
            && self.max_capacity.is_none_or(|max| capacity <= f64::from(max))
    }

    /// Whether the record falls inside this predicate
    pub fn contains(&self, record: &IngestedRecord) -> bool {
        self.postcode_in_range(&record.postcode) && self.capacity_in_range(record.capacity)
    }
}

impl From<&RangeQuerySpec> for KeyPredicate {
    fn from(spec: &RangeQuerySpec) -> Self {
        Self {
            postcode_from: spec.postcode_from().to_string(),
            postcode_to: spec.postcode_to().to_string(),
            min_capacity: spec.min_capacity(),
            max_capacity: spec.max_capacity(),
        }
    }
}

fn strip_namespace(key: &str) -> Result<&str, KeyDecodeError> {
    key.strip_prefix(AGGREGATE_CACHE_NAMESPACE)
        .and_then(|rest| rest.strip_prefix(NAMESPACE_SEPARATOR))
        .filter(|body| !body.contains(NAMESPACE_SEPARATOR))
        .ok_or_else(|| KeyDecodeError::MissingNamespace(key.to_string()))
}

/// Split `name=value`; `None` unless there is exactly one separator and a
/// non-empty value
fn split_field(field: &str) -> Option<(&str, &str)> {
    let (name, value) = field.split_once(VALUE_SEPARATOR)?;
    if value.is_empty() || value.contains(VALUE_SEPARATOR) {
        return None;
    }
    Some((name, value))
}

fn encode_bound(bound: Option<i32>) -> String {
    bound.map_or_else(|| ABSENT_SENTINEL.to_string(), |value| value.to_string())
}

fn decode_bound(field: &'static str, value: &str) -> Result<Option<i32>, KeyDecodeError> {
    if value == ABSENT_SENTINEL {
        Ok(None)
    } else {
        parse_number(field, value).map(Some)
    }
}

fn parse_number<T: std::str::FromStr>(
    field: &'static str,
    value: &str,
) -> Result<T, KeyDecodeError> {
    value.parse().map_err(|_| KeyDecodeError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '%' => escaped.push_str("%25"),
            ':' => escaped.push_str("%3A"),
            '=' => escaped.push_str("%3D"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn unescape(value: &str) -> Result<String, KeyDecodeError> {
    let mut unescaped = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(index) = rest.find('%') {
        unescaped.push_str(&rest[..index]);
        let decoded = match rest.get(index + 1..index + 3) {
            Some("25") => '%',
            Some("3A") => ':',
            Some("3D") => '=',
            _ => return Err(KeyDecodeError::InvalidEscape(value.to_string())),
        };
        unescaped.push(decoded);
        rest = &rest[index + 3..];
    }
    unescaped.push_str(rest);
    Ok(unescaped)
}
