use crate::{
    error::AccessError,
    interpreter::{
        accessor::core::{AccessResult, PropertyAccessor},
        value::{coerce::coerce, core::Value},
    },
};

/// Accessor for any value exposing the [`KeyValue`] capability.
///
/// Reads look the name up as a key and run the stored value through
/// [`coerce`], so `"42"` stored in a properties file reads as the integer
/// `42`. A key that is not present reads as `Null`. Writes store the value
/// as given, without coercion.
///
/// # Example
/// ```
/// use propexpr::interpreter::{
///     accessor::{core::PropertyAccessor, map::MapAccessor},
///     value::{core::Value, object::PropertyMap},
/// };
///
/// let root: Value = PropertyMap::from_iter([("a", "1.5")]).into();
///
/// assert_eq!(MapAccessor.read(&root, "a").unwrap(), Value::Real(1.5));
/// assert_eq!(MapAccessor.read(&root, "missing").unwrap(), Value::Null);
/// assert!(MapAccessor.read(&Value::Integer(1), "a").is_err());
/// ```
///
/// [`KeyValue`]: crate::interpreter::value::object::KeyValue
#[derive(Debug, Clone, Copy, Default)]
pub struct MapAccessor;

impl MapAccessor {
    fn unsupported(target: &Value, name: &str) -> AccessError {
        AccessError::UnsupportedTarget { name:   name.to_string(),
                                         target: target.type_name(), }
    }
}

impl PropertyAccessor for MapAccessor {
    fn supports(&self, target: &Value) -> bool {
        target.as_key_value().is_some()
    }

    fn can_read(&self, _target: &Value, _name: &str) -> bool {
        true
    }

    fn read(&self, target: &Value, name: &str) -> AccessResult<Value> {
        let map = target.as_key_value()
                        .ok_or_else(|| Self::unsupported(target, name))?;

        Ok(map.get(name).map_or(Value::Null, coerce))
    }

    fn can_write(&self, _target: &Value, _name: &str) -> bool {
        true
    }

    fn write(&self, target: &Value, name: &str, value: Value) -> AccessResult<()> {
        let map = target.as_key_value()
                        .ok_or_else(|| Self::unsupported(target, name))?;
        map.set(name, value);

        Ok(())
    }

    fn name(&self) -> &'static str {
        "MapAccessor"
    }
}
