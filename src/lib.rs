//! RustFit - Fitness Training Metrics Calculator
//!
//! An open-source fitness metrics library built in Rust. Decodes raw
//! sensor packets for running, sports walking and swimming workouts,
//! derives distance, mean speed and calories burned, and renders a
//! fixed-format summary line per workout.

pub mod metrics;
pub mod sensors;

// Re-export commonly used types
pub use metrics::calculator::{Activity, Running, SportsWalking, Swimming, Workout};
pub use metrics::summary::WorkoutSummary;
pub use sensors::decoder::decode_packet;
pub use sensors::feed::load_feed;
pub use sensors::types::{PacketError, SensorPacket};
