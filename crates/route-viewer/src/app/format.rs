//! Human-readable distances and durations for the instruction list

const FEET_PER_METER: f64 = 3.2808399;
const FEET_PER_MILE: f64 = 5280.0;

/// Distances switch to miles from a fifth of a mile
const MILE_THRESHOLD_FEET: f64 = 1056.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum MeasurementSystem {
    #[default]
    Metric,
    Imperial,
}

/// Round to one decimal place
#[inline]
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Format a distance given in meters
///
/// Metric uses whole meters below one kilometer and tenths of a kilometer
/// above. Imperial uses whole feet below 1056 ft and tenths of a mile above.
pub fn pretty_distance(meters: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => {
            let meters = meters.round();
            if meters >= 1000.0 {
                format!("{} km", round_tenths(meters / 1000.0))
            } else {
                format!("{meters} m")
            }
        }
        MeasurementSystem::Imperial => {
            let feet = (meters * FEET_PER_METER).round();
            if feet >= MILE_THRESHOLD_FEET {
                format!("{} mi", round_tenths(feet / FEET_PER_MILE))
            } else {
                format!("{feet} ft")
            }
        }
    }
}

/// Format a duration given in seconds, dropping zero components
pub fn pretty_time(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    let hours = total / 3600;
    let minutes = (total / 60) % 60;

    match (hours, minutes) {
        (0, 0) => format!("{} s", total % 60),
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h} h"),
        (h, m) => format!("{h} h {m} min"),
    }
}
