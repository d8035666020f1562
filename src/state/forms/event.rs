//! Owned form data and the pure update function

use super::field::FieldId;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Mapping of field key to current value. All three fields are always
/// present; a fresh form is all-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormData {
    /// Current value of one field
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
        }
    }
}

/// Serializes as a map with exactly one entry per field, keyed by the
/// stable field keys, in display order.
impl Serialize for FormData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FieldId::ALL.len()))?;
        for field in FieldId::ALL {
            map.serialize_entry(field.key(), self.get(field))?;
        }
        map.end()
    }
}

/// A single user action, consumed synchronously by [`update`]
#[derive(Debug, Clone)]
pub enum FormEvent {
    /// Full replacement value for exactly one field
    FieldChanged { field: FieldId, value: String },
    /// Request to emit the current mapping; carries no data
    SubmitRequested,
}

/// Pure reducer: returns the next form state for an event.
///
/// `FieldChanged` replaces only the named field; all other fields keep
/// their prior values. `SubmitRequested` is an identity transition, the
/// emission itself is the caller's side effect.
pub fn update(data: FormData, event: &FormEvent) -> FormData {
    match event {
        FormEvent::FieldChanged { field, value } => {
            let mut next = data;
            match field {
                FieldId::Name => next.name = value.clone(),
                FieldId::Email => next.email = value.clone(),
                FieldId::Message => next.message = value.clone(),
            }
            next
        }
        FormEvent::SubmitRequested => data,
    }
}
