//! Log records and line encoding
//!
//! A record carries the structured fields of one log call plus an ordered
//! parameter map. Encoding renders the parameters as `key=value; ` pairs,
//! recursing into nested maps wrapped in braces.

use std::fmt;

use chrono::{DateTime, Local};

use super::level::LogLevel;

/// A parameter value: a scalar or a nested ordered map
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Map(Params),
}

impl Value {
    /// True for [`Value::Map`]
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Map(m) => write!(f, "{{{}}}", encode(m)),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Params> for Value {
    fn from(m: Params) -> Self {
        Value::Map(m)
    }
}

/// String-keyed parameter map that preserves insertion order
///
/// Inserting an existing key replaces the value in place, keeping the key's
/// original position so encoding stays deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Vec<(String, Value)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value, preserving the position of existing keys
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Remove a key, returning its value if present
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.0.iter().position(|(k, _)| k == key)?;
        Some(self.0.remove(index).1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Render parameters as `key=value; ` pairs in insertion order
///
/// Nested maps are rendered recursively inside braces, keeping their own
/// trailing separator. Only the top-level caller trims the result.
pub fn encode(params: &Params) -> String {
    let mut out = String::new();
    for (key, value) in params.iter() {
        out.push_str(key);
        out.push('=');
        out.push_str(&value.to_string());
        out.push_str("; ");
    }
    out
}

/// One structured log record, built per emit call
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Wall-clock time the record was built
    pub timestamp: DateTime<Local>,
    /// Opaque identifier of the emitting logger instance
    pub instance_id: String,
    pub level: LogLevel,
    /// Component or call site the record originates from
    pub origin: String,
    /// Event type, written as the `type=` field
    pub kind: String,
    pub code: String,
    pub detail: String,
    pub params: Params,
}

impl LogRecord {
    /// Render the record as a single newline-terminated log line
    ///
    /// `date_format` is a chrono strftime string applied to the record's
    /// timestamp.
    pub fn render(&self, date_format: &str) -> String {
        let date = self.timestamp.format(date_format);
        let params = encode(&self.params);
        format!(
            "{date} - {origin} - {level} - uuid={uuid}; type={kind}; code={code}; detail={detail}; {params}\n",
            origin = self.origin,
            level = self.level.as_str(),
            uuid = self.instance_id,
            kind = self.kind,
            code = self.code,
            detail = self.detail,
            params = params.trim(),
        )
    }
}
