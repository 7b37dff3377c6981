//! Flat field-name to value view of persisted records.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::AppResult;

pub trait Serializable: Serialize {
    /// Bookkeeping fields left out of [`Serializable::to_dict`].
    const INTERNAL_FIELDS: &'static [&'static str] = &[];

    /// Every declared field except [`Serializable::INTERNAL_FIELDS`].
    fn to_dict(&self) -> AppResult<Map<String, Value>> {
        let mut map = match serde_json::to_value(self)? {
            Value::Object(map) => map,
            _ => {
                return Err(<serde_json::Error as serde::ser::Error>::custom(
                    "record does not serialize to a mapping",
                )
                .into());
            }
        };
        for field in Self::INTERNAL_FIELDS {
            map.remove(*field);
        }
        Ok(map)
    }

    /// Like [`Serializable::to_dict`] but keeps only the named fields. Unknown names are ignored.
    fn to_dict_only(&self, fields: &[&str]) -> AppResult<Map<String, Value>> {
        let mut map = self.to_dict()?;
        map.retain(|key, _| fields.contains(&key.as_str()));
        Ok(map)
    }
}
