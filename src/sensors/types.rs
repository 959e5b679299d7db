//! Sensor packet types and errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A raw data packet from a fitness sensor.
///
/// Carries the activity-type code and the raw readings for that
/// activity, in the order the device reports them: action count,
/// duration in hours and athlete weight first, then any
/// activity-specific readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPacket {
    /// Activity-type code ("SWM", "RUN" or "WLK")
    pub workout_code: String,
    /// Positional raw readings
    pub values: Vec<f64>,
}

impl SensorPacket {
    /// Create a new packet from a code and raw readings.
    pub fn new(workout_code: &str, values: Vec<f64>) -> Self {
        Self {
            workout_code: workout_code.to_string(),
            values,
        }
    }
}

/// Errors during sensor packet decoding.
#[derive(Debug, Error)]
pub enum PacketError {
    /// Activity-type code is not recognized
    #[error("Unknown workout code: {0}")]
    UnknownWorkoutCode(String),

    /// Packet carries the wrong number of raw readings
    #[error("Workout code {code} expects {expected} sensor values, got {actual}")]
    ValueCountMismatch {
        code: &'static str,
        expected: usize,
        actual: usize,
    },
}
