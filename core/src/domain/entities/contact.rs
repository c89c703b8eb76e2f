use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Name recorded for a structured contact without one on the live path
pub const DEFAULT_CONTACT_NAME: &str = "Contact";

/// Name recorded for a structured contact without one on the mock path
pub const MOCK_CONTACT_NAME: &str = "Mock Contact";

/// Phone recorded for a structured contact without one
pub const UNKNOWN_PHONE: &str = "Unknown";

/// Phone field of a structured contact, which clients send as text or as a number
#[derive(Debug, Clone, PartialEq)]
pub enum PhoneValue {
    Text(String),
    Number(Number),
}

impl PhoneValue {
    /// Render the phone as the text used for validation and delivery
    pub fn to_text(&self) -> String {
        match self {
            PhoneValue::Text(text) => text.clone(),
            PhoneValue::Number(number) => number.to_string(),
        }
    }
}

/// Emergency contact exactly as supplied by a client or the fallback list
///
/// Anything a client can put in a JSON array is accepted; malformed entries
/// are kept so they can be recorded rather than dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum ContactInput {
    /// Object entry with optional `name` and `phone` fields
    Structured {
        name: Option<String>,
        phone: Option<PhoneValue>,
    },
    /// Plain string entry used as both name and phone
    Bare(String),
    /// Any other JSON value
    Other(Value),
}

impl ContactInput {
    /// Create a structured contact
    pub fn structured(name: impl Into<String>, phone: impl Into<String>) -> Self {
        ContactInput::Structured {
            name: Some(name.into()),
            phone: Some(PhoneValue::Text(phone.into())),
        }
    }

    /// Create a bare string contact
    pub fn bare(value: impl Into<String>) -> Self {
        ContactInput::Bare(value.into())
    }

    /// Classify an arbitrary JSON value
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => ContactInput::Bare(text),
            Value::Object(map) => {
                let name = map.get("name").and_then(Value::as_str).map(str::to_string);
                let phone = match map.get("phone") {
                    Some(Value::String(text)) => Some(PhoneValue::Text(text.clone())),
                    Some(Value::Number(number)) => Some(PhoneValue::Number(number.clone())),
                    _ => None,
                };
                ContactInput::Structured { name, phone }
            }
            other => ContactInput::Other(other),
        }
    }

    /// Resolve the display name and phone text for this entry
    ///
    /// `default_name` fills in a structured entry without a name. Bare and
    /// other entries use their own text as both name and phone.
    pub fn normalize(&self, default_name: &str) -> Contact {
        match self {
            ContactInput::Structured { name, phone } => Contact {
                name: name.clone().unwrap_or_else(|| default_name.to_string()),
                phone: phone
                    .as_ref()
                    .map(PhoneValue::to_text)
                    .unwrap_or_else(|| UNKNOWN_PHONE.to_string()),
            },
            ContactInput::Bare(text) => Contact {
                name: text.clone(),
                phone: text.clone(),
            },
            ContactInput::Other(value) => {
                let text = value.to_string();
                Contact {
                    name: text.clone(),
                    phone: text,
                }
            }
        }
    }
}

impl From<Value> for ContactInput {
    fn from(value: Value) -> Self {
        ContactInput::from_value(value)
    }
}

impl From<ContactInput> for Value {
    fn from(input: ContactInput) -> Self {
        match input {
            ContactInput::Structured { name, phone } => {
                let mut map = Map::new();
                if let Some(name) = name {
                    map.insert("name".to_string(), Value::String(name));
                }
                match phone {
                    Some(PhoneValue::Text(text)) => {
                        map.insert("phone".to_string(), Value::String(text));
                    }
                    Some(PhoneValue::Number(number)) => {
                        map.insert("phone".to_string(), Value::Number(number));
                    }
                    None => {}
                }
                Value::Object(map)
            }
            ContactInput::Bare(text) => Value::String(text),
            ContactInput::Other(value) => value,
        }
    }
}

/// Contact after name and phone resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structured_contact_keeps_fields() {
        let input = ContactInput::from_value(json!({"name": "Mom", "phone": "+15551234567"}));
        let contact = input.normalize(DEFAULT_CONTACT_NAME);

        assert_eq!(contact.name, "Mom");
        assert_eq!(contact.phone, "+15551234567");
    }

    #[test]
    fn test_structured_contact_defaults() {
        let input = ContactInput::from_value(json!({"relation": "aunt"}));

        let live = input.normalize(DEFAULT_CONTACT_NAME);
        assert_eq!(live.name, "Contact");
        assert_eq!(live.phone, "Unknown");

        let mock = input.normalize(MOCK_CONTACT_NAME);
        assert_eq!(mock.name, "Mock Contact");
    }

    #[test]
    fn test_numeric_phone_is_rendered_as_text() {
        let input = ContactInput::from_value(json!({"name": "Dad", "phone": 15551234567u64}));
        assert_eq!(input.normalize(DEFAULT_CONTACT_NAME).phone, "15551234567");
    }

    #[test]
    fn test_non_string_name_falls_back_to_default() {
        let input = ContactInput::from_value(json!({"name": 42, "phone": "+15551234567"}));
        assert_eq!(input.normalize(DEFAULT_CONTACT_NAME).name, "Contact");
    }

    #[test]
    fn test_bare_string_is_name_and_phone() {
        let input = ContactInput::from_value(json!("Emergency Contact 1"));
        let contact = input.normalize(DEFAULT_CONTACT_NAME);

        assert_eq!(input, ContactInput::bare("Emergency Contact 1"));
        assert_eq!(contact.name, "Emergency Contact 1");
        assert_eq!(contact.phone, "Emergency Contact 1");
    }

    #[test]
    fn test_other_values_are_rendered_as_json_text() {
        let input = ContactInput::from_value(json!(12345));
        let contact = input.normalize(DEFAULT_CONTACT_NAME);
        assert_eq!(contact.name, "12345");
        assert_eq!(contact.phone, "12345");

        let null = ContactInput::from_value(Value::Null);
        assert_eq!(null.normalize(DEFAULT_CONTACT_NAME).phone, "null");
    }

    #[test]
    fn test_deserializes_mixed_list() {
        let list: Vec<ContactInput> =
            serde_json::from_value(json!([{"name": "Mom", "phone": "+15551234567"}, "555", true]))
                .unwrap();

        assert_eq!(list[0], ContactInput::structured("Mom", "+15551234567"));
        assert_eq!(list[1], ContactInput::bare("555"));
        assert_eq!(list[2], ContactInput::Other(json!(true)));
    }

    #[test]
    fn test_serializes_back_to_json() {
        let value = serde_json::to_value(ContactInput::structured("Mom", "+15551234567")).unwrap();
        assert_eq!(value, json!({"name": "Mom", "phone": "+15551234567"}));
    }
}
