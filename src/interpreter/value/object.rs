use std::{cell::RefCell, collections::BTreeMap};

use crate::interpreter::value::core::Value;

/// A host object that can appear inside a [`Value`].
///
/// Objects are opaque to the evaluator. The only capability it ever asks for
/// is the key/value view returned by [`Object::as_key_value`]; accessors use it
/// to decide whether they can resolve properties on the object.
pub trait Object: std::fmt::Debug + std::fmt::Display {
    /// Name reported in error messages (e.g. `PropertyMap`).
    fn type_name(&self) -> &str;

    /// Returns the key/value view of this object, or `None` if it has no
    /// such capability.
    fn as_key_value(&self) -> Option<&dyn KeyValue> {
        None
    }
}

/// Key/value mapping capability.
///
/// Mutation goes through `&self`: objects are shared behind `Rc` while a
/// context is alive, so implementations use interior mutability. Nothing here
/// is safe to share across threads.
pub trait KeyValue {
    /// Returns the raw value stored under `key`.
    fn get(&self, key: &str) -> Option<Value>;

    /// Inserts or overwrites the value stored under `key`.
    fn set(&self, key: &str, value: Value);

    /// Returns the stored keys.
    fn keys(&self) -> Vec<String>;
}

/// The stock key/value object: a sorted string map behind a `RefCell`.
///
/// This is what configuration files are loaded into, and the usual root of a
/// [`Context`](crate::interpreter::evaluator::core::Context).
///
/// # Example
/// ```
/// use propexpr::interpreter::value::{
///     core::Value,
///     object::{KeyValue, PropertyMap},
/// };
///
/// let map = PropertyMap::from_iter([("rate", "0.5")]);
/// map.set("count", Value::Integer(3));
///
/// assert_eq!(map.get("rate"), Some(Value::from("0.5")));
/// assert_eq!(map.keys(), vec!["count".to_string(), "rate".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct PropertyMap {
    entries: RefCell<BTreeMap<String, Value>>,
}

impl PropertyMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyMap
    where K: Into<String>,
          V: Into<Value>
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let entries = iter.into_iter()
                          .map(|(key, value)| (key.into(), value.into()))
                          .collect();
        Self { entries: RefCell::new(entries) }
    }
}

impl KeyValue for PropertyMap {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) {
        self.entries.borrow_mut().insert(key.to_string(), value);
    }

    fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }
}

impl Object for PropertyMap {
    fn type_name(&self) -> &str {
        "PropertyMap"
    }

    fn as_key_value(&self) -> Option<&dyn KeyValue> {
        Some(self)
    }
}

impl std::fmt::Display for PropertyMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;

        for (index, (key, value)) in self.entries.borrow().iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{key}={value}")?;
        }

        write!(f, "}}")
    }
}
