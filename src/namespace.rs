use std::{collections::BTreeMap, fmt, slice, str::FromStr};

use crate::{Error, Result};

/// A stored value: one string or an ordered list of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Single(String),
    List(Vec<String>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Single(it) => Some(it),
            Value::List(_) => None,
        }
    }

    /// All stored strings; a single value reads as a one element slice.
    pub fn as_slice(&self) -> &[String] {
        match self {
            Value::Single(it) => slice::from_ref(it),
            Value::List(it) => it,
        }
    }
}

/// Result of a parse: destination key to stored value.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Namespace {
    values: BTreeMap<String, Value>,
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.values.iter()).finish()
    }
}

impl Namespace {
    pub(crate) fn new() -> Namespace {
        Namespace::default()
    }

    pub(crate) fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    /// Appends to the list under `key`. A single value already stored there is
    /// turned into the first element of the list.
    pub(crate) fn append(&mut self, key: &str, items: impl IntoIterator<Item = String>) {
        let entry = self.values.entry(key.to_string()).or_insert_with(|| Value::List(Vec::new()));
        if let Value::Single(it) = entry {
            let first = std::mem::take(it);
            *entry = Value::List(vec![first]);
        }
        if let Value::List(list) = entry {
            list.extend(items);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        self.get(key).map(Value::as_slice)
    }

    /// Whether a `StoreTrue`/`StoreFalse` style entry holds `"true"`.
    pub fn flag(&self, key: &str) -> bool {
        self.get_str(key) == Some("true")
    }

    pub fn value_of<T: FromStr>(&self, key: &str) -> Result<Option<T>>
    where
        T::Err: fmt::Display,
    {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Single(it)) => parse_value(key, it).map(Some),
            Some(Value::List(_)) => Err(Error::InvalidValue {
                name: key.to_string(),
                reason: "expected a single value, found a list".to_string(),
            }),
        }
    }

    pub fn values_of<T: FromStr>(&self, key: &str) -> Result<Vec<T>>
    where
        T::Err: fmt::Display,
    {
        self.get_list(key).unwrap_or_default().iter().map(|it| parse_value(key, it)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|err| Error::InvalidValue { name: key.to_string(), reason: err.to_string() })
}
