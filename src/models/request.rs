use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::error::ApiError;

/// Raw request body. Every field deserializes as optional so presence is
/// checked explicitly instead of failing inside the extractor.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRequestBody {
    pub customer_address: Option<String>,
    pub staff_address: Option<String>,
    pub requested_date: Option<String>,
    pub requested_time: Option<String>,
}

/// A validated slot request; immutable after validation.
#[derive(Debug, Clone)]
pub struct SlotRequest {
    pub customer_address: String,
    pub staff_address: String,
    pub requested_date: String,
    pub requested_time: String,
}

impl SlotRequestBody {
    /// Presence check only; malformed-but-present values pass through to the
    /// collaborators.
    pub fn validate(self) -> Result<SlotRequest, ApiError> {
        Ok(SlotRequest {
            customer_address: required(self.customer_address)?,
            staff_address: required(self.staff_address)?,
            requested_date: required(self.requested_date)?,
            requested_time: required(self.requested_time)?,
        })
    }
}

fn required(field: Option<String>) -> Result<String, ApiError> {
    field
        .filter(|value| !value.is_empty())
        .ok_or(ApiError::MissingFields)
}

impl SlotRequest {
    /// Joins the date and time fields into one wall-clock timestamp.
    /// Accepts `2025-11-01 10:30 AM` and a 24-hour fallback.
    pub fn requested_datetime(&self) -> Result<NaiveDateTime, ApiError> {
        let joined = format!("{} {}", self.requested_date, self.requested_time);
        NaiveDateTime::parse_from_str(&joined, "%Y-%m-%d %I:%M %p")
            .or_else(|_| NaiveDateTime::parse_from_str(&joined, "%Y-%m-%d %H:%M"))
            .map_err(ApiError::from)
    }
}
