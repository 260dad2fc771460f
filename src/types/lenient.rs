//! Field decoders that never reject a record because of a missing or
//! mistyped value.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub(super) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Option::<Value>::deserialize(deserializer)?;
	Ok(match value {
		Some(Value::String(text)) => text,
		Some(Value::Number(number)) => number.to_string(),
		Some(Value::Bool(flag)) => flag.to_string(),
		_ => String::new(),
	})
}

pub(super) fn number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Option::<Value>::deserialize(deserializer)?;
	Ok(value.as_ref().and_then(number_from_value))
}

fn number_from_value(value: &Value) -> Option<u32> {
	match value {
		Value::Number(number) => number.as_u64().and_then(|raw| u32::try_from(raw).ok()),
		Value::String(text) => text.trim().parse().ok(),
		_ => None,
	}
}
