use serde_json::Value;

/// Where the requester is, as far as the request says
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// Latitude and longitude; preferred over an address when both are present
    Coordinates { lat: f64, lng: f64 },
    /// Free-text address
    Address(String),
}

impl Location {
    /// Derive a location from the raw `user_location` object
    ///
    /// Coordinates win when both `lat` and `lng` are finite numbers or
    /// numeric strings. Otherwise a non-blank `address` string is used.
    /// Anything else yields `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;

        if let (Some(lat), Some(lng)) = (
            map.get("lat").and_then(coordinate),
            map.get("lng").and_then(coordinate),
        ) {
            return Some(Location::Coordinates { lat, lng });
        }

        map.get("address")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|address| !address.is_empty())
            .map(|address| Location::Address(address.to_string()))
    }
}

fn coordinate(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}
