pub mod ghl;
pub mod maps;

use crate::error::ApiError;
use crate::models::appointment::BookedAppointment;
use crate::models::travel::TravelEstimate;

/// Fetches the single most recent booked appointment for the configured
/// calendar. Which appointment matters (booked, most recent, one result) is
/// this collaborator's contract, not the decider's, so a lookahead strategy
/// can replace it without touching the decision logic.
pub trait AppointmentLookup {
    async fn most_recent_booked(&self) -> Result<Option<BookedAppointment>, ApiError>;
}

/// Estimates travel between two addresses.
pub trait TravelEstimator {
    async fn estimate(&self, origin: &str, destination: &str) -> Result<TravelEstimate, ApiError>;
}
