use wind_core::WindOutcome;

/// Lines printed for a fetch outcome.
pub fn report_lines(outcome: &WindOutcome) -> Vec<String> {
    let mut lines = Vec::new();

    if let WindOutcome::RemoteUnavailable { status, .. } = outcome {
        lines.push(format!("Error fetching wind data! (HTTP {status})"));
    }

    match outcome.reading() {
        wind_core::WindReading { speed_mps: Some(speed), direction_deg: Some(direction) } => {
            lines.push(format!("Current Wind Speed: {} m/s", format_value(speed)));
            lines.push(format!("Current Wind Direction: {}°", format_value(direction)));
        }
        _ => lines.push("Could not fetch wind data.".to_string()),
    }

    lines
}

/// Shortest form, but whole numbers keep a trailing `.0`.
fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
