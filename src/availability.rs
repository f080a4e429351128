use chrono::{Duration, NaiveDateTime};

/// Padding added after travel before the next appointment may start.
pub const BUFFER_MINUTES: f64 = 15.0;
/// Assumed length of the proposed appointment.
pub const APPOINTMENT_LENGTH_MINUTES: i64 = 30;

const CLOCK_FORMAT: &str = "%I:%M %p";

/// Availability decision plus the display data the response is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityVerdict {
    pub available: bool,
    pub slot_start: String,
    pub slot_end: String,
    pub total_travel_minutes: f64,
    pub message: String,
}

/// Decides whether the requested slot leaves enough travel room after the
/// previous booked appointment. Pure over already-fetched inputs: no previous
/// appointment means the slot is unconditionally available; otherwise the
/// requested time must not fall before the previous end plus travel and
/// buffer. The comparison uses unrounded minutes; rounding happens only when
/// the total is displayed.
pub fn decide(
    previous_end: Option<NaiveDateTime>,
    travel_minutes: f64,
    requested: NaiveDateTime,
) -> AvailabilityVerdict {
    let total_travel_minutes = travel_minutes + BUFFER_MINUTES;

    let mut available = true;
    let mut slot_start = format_clock(requested);
    let mut message = "Slot available for booking".to_string();

    if let Some(previous_end) = previous_end {
        let next_possible_start =
            previous_end + Duration::milliseconds((total_travel_minutes * 60_000.0) as i64);
        if requested < next_possible_start {
            available = false;
            slot_start = format_clock(next_possible_start);
            message = format!(
                "⏱ Not enough time after last appointment. Next available at {}",
                slot_start
            );
        }
    }

    // The slot end stays anchored to the requested time, even when the start
    // above has shifted to the next possible start.
    let slot_end = format_clock(requested + Duration::minutes(APPOINTMENT_LENGTH_MINUTES));

    AvailabilityVerdict {
        available,
        slot_start,
        slot_end,
        total_travel_minutes,
        message,
    }
}

fn format_clock(at: NaiveDateTime) -> String {
    at.format(CLOCK_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn no_previous_appointment_is_always_available() {
        let verdict = decide(None, 45.0, at(10, 30));
        assert!(verdict.available);
        assert_eq!(verdict.slot_start, "10:30 AM");
        assert_eq!(verdict.slot_end, "11:00 AM");
        assert_eq!(verdict.message, "Slot available for booking");
    }

    #[test]
    fn too_close_to_previous_appointment_shifts_the_start() {
        // 20 minutes of travel plus the buffer pushes the next start to 10:35.
        let verdict = decide(Some(at(10, 0)), 20.0, at(10, 30));
        assert!(!verdict.available);
        assert_eq!(verdict.slot_start, "10:35 AM");
        assert_eq!(verdict.slot_end, "11:00 AM");
        assert_eq!(
            verdict.message,
            "⏱ Not enough time after last appointment. Next available at 10:35 AM"
        );
    }

    #[test]
    fn requested_exactly_at_next_possible_start_is_available() {
        let verdict = decide(Some(at(10, 0)), 20.0, at(10, 35));
        assert!(verdict.available);
        assert_eq!(verdict.slot_start, "10:35 AM");
    }

    #[test]
    fn comfortable_gap_keeps_the_requested_start() {
        let verdict = decide(Some(at(8, 0)), 20.0, at(10, 30));
        assert!(verdict.available);
        assert_eq!(verdict.slot_start, "10:30 AM");
        assert_eq!(verdict.slot_end, "11:00 AM");
    }

    #[test]
    fn slot_end_stays_anchored_to_requested_time_when_unavailable() {
        // Long travel can push the suggested start past the displayed end;
        // the pair is reported as-is.
        let verdict = decide(Some(at(10, 0)), 90.0, at(10, 30));
        assert!(!verdict.available);
        assert_eq!(verdict.slot_start, "11:45 AM");
        assert_eq!(verdict.slot_end, "11:00 AM");
    }

    #[test]
    fn comparison_uses_unrounded_travel_minutes() {
        // 20.4 + 15 = 35.4 minutes: the next start lands at 10:35:24, so a
        // 10:35 request is still too early even though the displayed total
        // rounds to 35.
        let verdict = decide(Some(at(10, 0)), 20.4, at(10, 35));
        assert!(!verdict.available);
        assert_eq!(verdict.total_travel_minutes.round() as i64, 35);
    }

    #[test]
    fn afternoon_times_format_with_pm() {
        let verdict = decide(None, 10.0, at(14, 45));
        assert_eq!(verdict.slot_start, "02:45 PM");
        assert_eq!(verdict.slot_end, "03:15 PM");
    }
}
