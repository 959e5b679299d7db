//! Workout summary type and rendering.

use serde::Serialize;

/// Computed metrics for one completed workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutSummary {
    /// Activity label, e.g. "Running"
    pub activity: String,
    /// Duration in hours
    pub duration_h: f64,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Calories burned in kcal
    pub calories_kcal: f64,
}

impl std::fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Avg. speed: {:.3} km/h; Calories burned: {:.3}.",
            self.activity, self.duration_h, self.distance_km, self.mean_speed_kmh, self.calories_kcal
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_message_format() {
        let summary = WorkoutSummary {
            activity: "Running".to_string(),
            duration_h: 1.0,
            distance_km: 9.75,
            mean_speed_kmh: 9.75,
            calories_kcal: 699.75,
        };

        assert_eq!(
            summary.to_string(),
            "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
             Avg. speed: 9.750 km/h; Calories burned: 699.750."
        );
    }

    #[test]
    fn test_summary_rounds_at_display_time_only() {
        let summary = WorkoutSummary {
            activity: "Swimming".to_string(),
            duration_h: 1.0,
            distance_km: 0.9936,
            mean_speed_kmh: 1.0,
            calories_kcal: 336.0,
        };

        // The stored value keeps full precision
        assert!((summary.distance_km - 0.9936).abs() < 1e-12);
        // Three decimals appear only in the rendered line
        assert!(summary.to_string().contains("Distance: 0.994 km"));
    }
}
