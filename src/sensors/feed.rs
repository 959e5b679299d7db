//! Demo sensor packet feed.
//!
//! The driver consumes packets from a feed. The default feed is a fixed
//! in-memory list; setting `RUSTFIT_FEED` to a TOML file path replaces
//! it with the file's packets.

use crate::sensors::decoder::{CODE_RUNNING, CODE_SWIMMING, CODE_WALKING};
use crate::sensors::types::SensorPacket;
use serde::Deserialize;
use std::path::Path;

/// Environment variable naming an optional TOML feed file.
pub const FEED_ENV_VAR: &str = "RUSTFIT_FEED";

/// On-disk feed document.
#[derive(Debug, Deserialize)]
struct FeedFile {
    /// Packets in delivery order
    packets: Vec<SensorPacket>,
}

/// Built-in demo packets used when no feed file is configured.
pub fn sample_packets() -> Vec<SensorPacket> {
    vec![
        SensorPacket::new(CODE_SWIMMING, vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPacket::new(CODE_RUNNING, vec![15000.0, 1.0, 75.0]),
        SensorPacket::new(CODE_WALKING, vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Parse a TOML feed document into packets.
pub fn parse_feed(content: &str) -> Result<Vec<SensorPacket>, FeedError> {
    let feed: FeedFile =
        toml::from_str(content).map_err(|e| FeedError::ParseError(e.to_string()))?;
    Ok(feed.packets)
}

/// Load packets from a feed file on disk.
pub fn load_feed_file(path: &Path) -> Result<Vec<SensorPacket>, FeedError> {
    let content = std::fs::read_to_string(path).map_err(|e| FeedError::IoError(e.to_string()))?;
    parse_feed(&content)
}

/// Load the packet feed.
///
/// Reads the file named by `RUSTFIT_FEED` when the variable is set,
/// otherwise returns the built-in demo packets.
pub fn load_feed() -> Result<Vec<SensorPacket>, FeedError> {
    match std::env::var(FEED_ENV_VAR) {
        Ok(path) => load_feed_file(Path::new(&path)),
        Err(_) => Ok(sample_packets()),
    }
}

/// Feed loading errors.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_packets_cover_all_codes() {
        let packets = sample_packets();

        assert_eq!(packets.len(), 3);
        assert_eq!(packets[0].workout_code, "SWM");
        assert_eq!(packets[1].workout_code, "RUN");
        assert_eq!(packets[2].workout_code, "WLK");
    }

    #[test]
    fn test_parse_feed_document() {
        let content = r#"
            [[packets]]
            workout_code = "RUN"
            values = [15000.0, 1.0, 75.0]

            [[packets]]
            workout_code = "SWM"
            values = [720.0, 1.0, 80.0, 25.0, 40.0]
        "#;

        let packets = parse_feed(content).unwrap();

        assert_eq!(packets.len(), 2);
        assert_eq!(packets[0].workout_code, "RUN");
        assert_eq!(packets[0].values, vec![15000.0, 1.0, 75.0]);
        assert_eq!(packets[1].values.len(), 5);
    }

    #[test]
    fn test_parse_feed_rejects_malformed_document() {
        let err = parse_feed("packets = 3").unwrap_err();

        match err {
            FeedError::ParseError(_) => {}
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
