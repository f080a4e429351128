use chrono::NaiveDateTime;
use serde::Serialize;

use crate::availability::AvailabilityVerdict;
use crate::models::travel::TravelEstimate;

/// Success payload for a slot check.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotCheckResponse {
    pub success: bool,
    pub available: bool,
    pub distance: String,
    pub travel_duration: String,
    pub total_travel_time: String,
    pub previous_location: String,
    pub previous_appointment_end: Option<NaiveDateTime>,
    pub suggested_slot: String,
    pub message: String,
}

impl SlotCheckResponse {
    pub fn new(
        verdict: AvailabilityVerdict,
        estimate: TravelEstimate,
        previous_location: String,
        previous_appointment_end: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            success: true,
            available: verdict.available,
            distance: estimate.distance_text,
            travel_duration: estimate.duration_text,
            total_travel_time: format!("{} minutes", verdict.total_travel_minutes.round() as i64),
            previous_location,
            previous_appointment_end,
            suggested_slot: format!("{} - {}", verdict.slot_start, verdict.slot_end),
            message: verdict.message,
        }
    }
}
