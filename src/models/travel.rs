use serde::Deserialize;

use crate::error::ApiError;

/// Travel figures derived from one distance-matrix element.
#[derive(Debug, Clone)]
pub struct TravelEstimate {
    pub distance_text: String,
    pub duration_text: String,
    pub duration_minutes: f64,
}

#[derive(Debug, Deserialize)]
pub struct DistanceMatrixResponse {
    #[serde(default)]
    pub rows: Vec<DistanceMatrixRow>,
}

#[derive(Debug, Deserialize)]
pub struct DistanceMatrixRow {
    #[serde(default)]
    pub elements: Vec<DistanceMatrixElement>,
}

#[derive(Debug, Deserialize)]
pub struct DistanceMatrixElement {
    pub status: String,
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
}

/// Display string plus raw value pair used for both distance and duration.
/// The duration value is in seconds.
#[derive(Debug, Deserialize)]
pub struct TextValue {
    pub text: String,
    pub value: i64,
}

impl DistanceMatrixResponse {
    /// Extracts the single origin/destination element. Anything other than a
    /// populated `OK` element means no usable route.
    pub fn into_estimate(self) -> Result<TravelEstimate, ApiError> {
        let element = self
            .rows
            .into_iter()
            .next()
            .and_then(|row| row.elements.into_iter().next())
            .ok_or(ApiError::DistanceUnavailable)?;

        if element.status != "OK" {
            return Err(ApiError::DistanceUnavailable);
        }

        let (distance, duration) = element
            .distance
            .zip(element.duration)
            .ok_or(ApiError::DistanceUnavailable)?;

        Ok(TravelEstimate {
            distance_text: distance.text,
            duration_text: duration.text,
            duration_minutes: duration.value as f64 / 60.0,
        })
    }
}
