//! Request parameter maps.
//!
//! Form-encoded requests deliver every parameter as a list of values, even when only one value
//! was sent. [`ParamMap`] keeps those values in the order their names were first seen, which is
//! the order reported back to clients when the key set does not match.

/// A raw or validated parameter value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    Single(String),
    List(Vec<String>),
}

impl ParamValue {
    /// Returns the scalar value, if this is not a list.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Single(value) => Some(value),
            ParamValue::List(_) => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, ParamValue::List(_))
    }

    /// Collapses a one-element list to its sole element.
    ///
    /// Scalars, empty lists and multi-element lists are returned unchanged.
    pub fn delist(self) -> Self {
        match self {
            ParamValue::List(mut values) if values.len() == 1 => {
                ParamValue::Single(values.remove(0))
            }
            other => other,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Single(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::List(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        ParamValue::List(values.into_iter().map(str::to_string).collect())
    }
}

/// Insertion-ordered map from parameter name to value.
///
/// Inserting an existing name replaces the value but keeps the name's original position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParamMap {
    entries: Vec<(String, ParamValue)>,
}

/// The output of a successful validation.
pub type ValidatedParams = ParamMap;

impl ParamMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.position(name).map(|idx| &self.entries[idx].1)
    }

    /// Returns the scalar value stored under `name`.
    ///
    /// After validation every field value is a scalar, so handlers normally read their
    /// arguments through this method.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ParamValue::as_str)
    }

    /// Inserts `value` under `name`, returning the previous value if there was one.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Parameter names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Applies [`ParamValue::delist`] to every entry.
    pub fn delist(self) -> Self {
        Self {
            entries: self
                .entries
                .into_iter()
                .map(|(name, value)| (name, value.delist()))
                .collect(),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == name)
    }
}

impl<K, V> FromIterator<(K, V)> for ParamMap
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ParamMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

/// Groups form pairs by name, preserving the order in which names first appear.
///
/// Every name maps to a [`ParamValue::List`], matching how form-encoded bodies carry values.
pub fn params_from_pairs<I, K, V>(pairs: I) -> ParamMap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut map = ParamMap::new();
    for (name, value) in pairs {
        let name = name.into();
        let value = value.into();
        match map.position(&name) {
            Some(idx) => {
                if let ParamValue::List(values) = &mut map.entries[idx].1 {
                    values.push(value);
                }
            }
            None => map.entries.push((name, ParamValue::List(vec![value]))),
        }
    }
    map
}
