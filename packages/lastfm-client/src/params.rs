//! Call arguments before canonicalization

use std::fmt;

/// A scalar argument value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => f.write_str(s),
            ParamValue::Int(n) => write!(f, "{}", n),
            // Last.fm flags are 1/0
            ParamValue::Bool(true) => f.write_str("1"),
            ParamValue::Bool(false) => f.write_str("0"),
        }
    }
}

/// Conversion into an optional parameter value
///
/// `None` means "not provided": the key stays in the [`ParameterSet`] but is
/// never sent nor signed.
pub trait IntoParamValue {
    fn into_param_value(self) -> Option<ParamValue>;
}

impl IntoParamValue for ParamValue {
    fn into_param_value(self) -> Option<ParamValue> {
        Some(self)
    }
}

impl IntoParamValue for &str {
    fn into_param_value(self) -> Option<ParamValue> {
        Some(ParamValue::Text(self.to_string()))
    }
}

impl IntoParamValue for String {
    fn into_param_value(self) -> Option<ParamValue> {
        Some(ParamValue::Text(self))
    }
}

impl IntoParamValue for &String {
    fn into_param_value(self) -> Option<ParamValue> {
        Some(ParamValue::Text(self.clone()))
    }
}

impl IntoParamValue for bool {
    fn into_param_value(self) -> Option<ParamValue> {
        Some(ParamValue::Bool(self))
    }
}

macro_rules! int_param {
    ($($t:ty),*) => {
        $(
            impl IntoParamValue for $t {
                fn into_param_value(self) -> Option<ParamValue> {
                    Some(ParamValue::Int(i64::from(self)))
                }
            }
        )*
    };
}

int_param!(i32, i64, u16, u32);

impl<T: IntoParamValue> IntoParamValue for Option<T> {
    fn into_param_value(self) -> Option<ParamValue> {
        self.and_then(IntoParamValue::into_param_value)
    }
}

/// Ordered, key-unique argument list for one call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    entries: Vec<(String, Option<ParamValue>)>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, value: impl IntoParamValue) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key`, replacing an existing value in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl IntoParamValue) {
        let key = key.into();
        let value = value.into_param_value();
        match self.entries.iter().position(|(k, _)| *k == key) {
            Some(pos) => self.entries[pos].1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Value for `key`, `None` when missing or absent
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Number of keys, absent ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Provided pairs in insertion order, rendered as strings
    pub fn present(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k.as_str(), v.to_string())))
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: IntoParamValue,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = ParameterSet::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}
