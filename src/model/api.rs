use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{de, Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Body returned with every 4xx/5xx JSON response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub message: String,
}

/// Deserializes a string field, reading `null` as an empty string so it reaches validation.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes an id field, reading `null` as 0.
pub fn null_as_zero<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes a date-time from any of:
/// - `2020-01-01T00:00:00` (fractional seconds allowed)
/// - `2020-01-01T00:00:00Z` or with an offset, converted to UTC
/// - `2020-01-01`, read as midnight
///
/// `null` becomes the Unix epoch, as a missing field does.
pub fn flexible_date_time<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<String>::deserialize(deserializer)? else {
        return Ok(NaiveDateTime::default());
    };

    if let Ok(date_time) = NaiveDateTime::parse_from_str(&value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(date_time);
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(&value) {
        return Ok(date_time.naive_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    Err(de::Error::custom(format!("invalid date-time `{}`", value)))
}
