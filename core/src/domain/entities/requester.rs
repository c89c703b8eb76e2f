use serde_json::Value;

pub const DEFAULT_REQUESTER_NAME: &str = "User";
pub const DEFAULT_REQUESTER_UID: &str = "Unknown";

/// Person who triggered the alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequesterInfo {
    pub name: String,
    pub uid: String,
}

impl Default for RequesterInfo {
    fn default() -> Self {
        Self {
            name: DEFAULT_REQUESTER_NAME.to_string(),
            uid: DEFAULT_REQUESTER_UID.to_string(),
        }
    }
}

impl RequesterInfo {
    /// Read `name` and `uid` from the raw `user_info` object
    ///
    /// Missing, blank, or non-string fields fall back to the defaults.
    pub fn from_value(value: Option<&Value>) -> Self {
        let map = value.and_then(Value::as_object);
        let field = |key: &str, default: &str| {
            map.and_then(|map| map.get(key))
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .unwrap_or(default)
                .to_string()
        };

        Self {
            name: field("name", DEFAULT_REQUESTER_NAME),
            uid: field("uid", DEFAULT_REQUESTER_UID),
        }
    }
}
