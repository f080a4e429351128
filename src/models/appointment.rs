use anyhow::Context;
use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;

/// Envelope returned by the scheduling platform's appointments listing.
#[derive(Debug, Deserialize)]
pub struct AppointmentsEnvelope {
    #[serde(default)]
    pub appointments: Vec<BookedAppointment>,
}

/// A booked appointment as the platform reports it. Only the fields this
/// service reads are modeled; the rest of the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedAppointment {
    #[serde(default)]
    pub location: Option<String>,
    pub end_time: String,
}

impl BookedAppointment {
    /// Wall-clock end time. Any offset the platform attaches is read as the
    /// local clock in that offset rather than converted.
    pub fn end_time_local(&self) -> anyhow::Result<NaiveDateTime> {
        if let Ok(with_offset) = DateTime::parse_from_rfc3339(&self.end_time) {
            return Ok(with_offset.naive_local());
        }
        NaiveDateTime::parse_from_str(&self.end_time, "%Y-%m-%dT%H:%M:%S")
            .with_context(|| format!("Invalid appointment end time: {}", self.end_time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_parses_with_and_without_appointments() {
        let populated: AppointmentsEnvelope = serde_json::from_str(
            r#"{"appointments":[{"id":"abc","location":"9990 Transit Rd, Buffalo, NY","endTime":"2025-11-01T10:00:00"}]}"#,
        )
        .unwrap();
        assert_eq!(populated.appointments.len(), 1);
        assert_eq!(
            populated.appointments[0].location.as_deref(),
            Some("9990 Transit Rd, Buffalo, NY")
        );

        let empty: AppointmentsEnvelope = serde_json::from_str("{}").unwrap();
        assert!(empty.appointments.is_empty());
    }

    #[test]
    fn appointment_without_location_parses() {
        let envelope: AppointmentsEnvelope =
            serde_json::from_str(r#"{"appointments":[{"endTime":"2025-11-01T10:00:00"}]}"#)
                .unwrap();
        assert!(envelope.appointments[0].location.is_none());
    }

    #[test]
    fn end_time_keeps_the_wall_clock_reading() {
        let with_offset = BookedAppointment {
            location: None,
            end_time: "2025-11-01T10:00:00-04:00".into(),
        };
        assert_eq!(
            with_offset.end_time_local().unwrap().to_string(),
            "2025-11-01 10:00:00"
        );

        let plain = BookedAppointment {
            location: None,
            end_time: "2025-11-01T10:00:00".into(),
        };
        assert_eq!(
            plain.end_time_local().unwrap().to_string(),
            "2025-11-01 10:00:00"
        );
    }

    #[test]
    fn malformed_end_time_is_an_error() {
        let appointment = BookedAppointment {
            location: None,
            end_time: "tomorrow".into(),
        };
        assert!(appointment.end_time_local().is_err());
    }
}
