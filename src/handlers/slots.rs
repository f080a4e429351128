use crate::availability;
use crate::clients::{AppointmentLookup, TravelEstimator};
use crate::error::ApiError;
use crate::models::request::SlotRequest;
use crate::models::response::SlotCheckResponse;

/// Runs the whole slot check: previous appointment, then travel estimate,
/// then the availability decision. The two lookups are sequential since the
/// estimate's origin depends on the previous appointment's location.
pub async fn check_slot(
    appointments: &impl AppointmentLookup,
    travel: &impl TravelEstimator,
    request: SlotRequest,
) -> Result<SlotCheckResponse, ApiError> {
    let last = appointments.most_recent_booked().await?;

    // Without a previous appointment the staff address stands in as the
    // reported previous location.
    let previous_location = last
        .as_ref()
        .and_then(|appointment| appointment.location.clone())
        .filter(|location| !location.is_empty())
        .unwrap_or_else(|| request.staff_address.clone());
    let previous_end = last
        .as_ref()
        .map(|appointment| appointment.end_time_local())
        .transpose()?;

    let estimate = travel
        .estimate(&previous_location, &request.customer_address)
        .await?;
    let requested = request.requested_datetime()?;

    let verdict = availability::decide(previous_end, estimate.duration_minutes, requested);

    Ok(SlotCheckResponse::new(
        verdict,
        estimate,
        previous_location,
        previous_end,
    ))
}
