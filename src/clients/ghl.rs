use reqwest::Client;
use reqwest::header::ACCEPT;

use crate::clients::AppointmentLookup;
use crate::error::ApiError;
use crate::models::appointment::{AppointmentsEnvelope, BookedAppointment};

const APPOINTMENTS_URL: &str = "https://services.leadconnectorhq.com/appointments/";
const API_VERSION: &str = "2021-07-28";

/// Client for the scheduling platform's appointments API.
pub struct GhlClient {
    client: Client,
    api_key: String,
    calendar_id: String,
}

impl GhlClient {
    pub fn new(client: Client, api_key: String, calendar_id: String) -> Self {
        Self {
            client,
            api_key,
            calendar_id,
        }
    }
}

impl AppointmentLookup for GhlClient {
    async fn most_recent_booked(&self) -> Result<Option<BookedAppointment>, ApiError> {
        let envelope: AppointmentsEnvelope = self
            .client
            .get(APPOINTMENTS_URL)
            .bearer_auth(&self.api_key)
            .header("Version", API_VERSION)
            .header(ACCEPT, "application/json")
            .query(&[
                ("calendarId", self.calendar_id.as_str()),
                ("status", "booked"),
                ("limit", "1"),
                ("sort", "desc"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(envelope.appointments.into_iter().next())
    }
}
