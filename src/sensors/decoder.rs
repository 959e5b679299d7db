//! Sensor packet decoding.
//!
//! Maps an activity-type code to the matching workout variant and binds
//! the packet's positional readings to the variant's fields in
//! declaration order.

use crate::metrics::calculator::{Running, SportsWalking, Swimming, Workout};
use crate::sensors::types::{PacketError, SensorPacket};

/// Code reported by swim sensors.
pub const CODE_SWIMMING: &str = "SWM";
/// Code reported by run sensors.
pub const CODE_RUNNING: &str = "RUN";
/// Code reported by walk sensors.
pub const CODE_WALKING: &str = "WLK";

/// Decode a sensor packet into the matching workout variant.
///
/// The reading count is validated against the variant before any field
/// is bound. Unknown codes and mismatched counts are caller-input
/// errors and are reported without recovery.
pub fn decode_packet(packet: &SensorPacket) -> Result<Workout, PacketError> {
    match packet.workout_code.as_str() {
        CODE_SWIMMING => {
            let values = expect_values(packet, CODE_SWIMMING, 5)?;
            Ok(Workout::Swimming(Swimming {
                action_count: values[0] as u32,
                duration_h: values[1],
                weight_kg: values[2],
                pool_length_m: values[3],
                pool_laps: values[4] as u32,
            }))
        }
        CODE_RUNNING => {
            let values = expect_values(packet, CODE_RUNNING, 3)?;
            Ok(Workout::Running(Running {
                action_count: values[0] as u32,
                duration_h: values[1],
                weight_kg: values[2],
            }))
        }
        CODE_WALKING => {
            let values = expect_values(packet, CODE_WALKING, 4)?;
            Ok(Workout::SportsWalking(SportsWalking {
                action_count: values[0] as u32,
                duration_h: values[1],
                weight_kg: values[2],
                height_cm: values[3],
            }))
        }
        other => Err(PacketError::UnknownWorkoutCode(other.to_string())),
    }
}

/// Validate the reading count for the given code.
fn expect_values<'a>(
    packet: &'a SensorPacket,
    code: &'static str,
    expected: usize,
) -> Result<&'a [f64], PacketError> {
    if packet.values.len() != expected {
        return Err(PacketError::ValueCountMismatch {
            code,
            expected,
            actual: packet.values.len(),
        });
    }
    Ok(&packet.values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::calculator::Activity;

    #[test]
    fn test_decode_running() {
        let packet = SensorPacket::new("RUN", vec![15000.0, 1.0, 75.0]);
        let workout = decode_packet(&packet).unwrap();

        assert!((workout.distance_km() - 9.75).abs() < 1e-9);
        assert!((workout.mean_speed_kmh() - 9.75).abs() < 1e-9);
        assert!((workout.calories_kcal() - 699.75).abs() < 1e-9);
    }

    #[test]
    fn test_decode_swimming_binds_pool_readings() {
        let packet = SensorPacket::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]);
        let workout = decode_packet(&packet).unwrap();

        match workout {
            Workout::Swimming(swim) => {
                assert_eq!(swim.action_count, 720);
                assert!((swim.pool_length_m - 25.0).abs() < 1e-9);
                assert_eq!(swim.pool_laps, 40);
                assert!((swim.mean_speed_kmh() - 1.0).abs() < 1e-9);
            }
            other => panic!("expected swimming, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_walking_binds_height() {
        let packet = SensorPacket::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]);
        let workout = decode_packet(&packet).unwrap();

        match workout {
            Workout::SportsWalking(walk) => {
                assert!((walk.height_cm - 180.0).abs() < 1e-9);
            }
            other => panic!("expected walking, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_unknown_code() {
        let packet = SensorPacket::new("XYZ", vec![1.0, 2.0, 3.0]);
        let err = decode_packet(&packet).unwrap_err();

        match err {
            PacketError::UnknownWorkoutCode(code) => assert_eq!(code, "XYZ"),
            other => panic!("expected unknown code error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_walking_wrong_value_count() {
        let packet = SensorPacket::new("WLK", vec![9000.0, 1.0]);
        let err = decode_packet(&packet).unwrap_err();

        match err {
            PacketError::ValueCountMismatch {
                code,
                expected,
                actual,
            } => {
                assert_eq!(code, "WLK");
                assert_eq!(expected, 4);
                assert_eq!(actual, 2);
            }
            other => panic!("expected value count error, got {other:?}"),
        }
    }
}
