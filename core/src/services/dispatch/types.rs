//! Request types for the dispatch service

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::entities::ContactInput;

/// Input of one SOS trigger
///
/// Every field is optional. `emergency_contacts` that is not an array is
/// treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SosTriggerRequest {
    #[serde(default, deserialize_with = "deserialize_contact_list")]
    pub emergency_contacts: Option<Vec<ContactInput>>,
    #[serde(default)]
    pub user_location: Option<Value>,
    #[serde(default)]
    pub user_info: Option<Value>,
}

impl SosTriggerRequest {
    pub fn with_contacts(mut self, contacts: Vec<ContactInput>) -> Self {
        self.emergency_contacts = Some(contacts);
        self
    }

    pub fn with_location(mut self, location: Value) -> Self {
        self.user_location = Some(location);
        self
    }

    pub fn with_user_info(mut self, info: Value) -> Self {
        self.user_info = Some(info);
        self
    }
}

fn deserialize_contact_list<'de, D>(deserializer: D) -> Result<Option<Vec<ContactInput>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Some(items.into_iter().map(ContactInput::from_value).collect()),
        _ => None,
    })
}
