//! Sensor module for packet intake and decoding.

pub mod decoder;
pub mod feed;
pub mod types;

pub use decoder::{decode_packet, CODE_RUNNING, CODE_SWIMMING, CODE_WALKING};
pub use feed::{load_feed, load_feed_file, parse_feed, sample_packets, FeedError};
pub use types::{PacketError, SensorPacket};
