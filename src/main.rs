//! RustFit - Fitness Training Metrics Calculator
//!
//! Main entry point for the demo driver: decodes each packet from the
//! feed, computes its workout summary and prints one line per packet.

use rustfit::sensors::{decode_packet, load_feed};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting RustFit v{}", env!("CARGO_PKG_VERSION"));

    let packets = load_feed()?;
    tracing::info!("Processing {} sensor packets", packets.len());

    for packet in &packets {
        let workout = decode_packet(packet)?;
        let summary = workout.summary();
        tracing::debug!(
            "Decoded {} packet: {:.3} km, {:.3} kcal",
            packet.workout_code,
            summary.distance_km,
            summary.calories_kcal
        );
        println!("{summary}");
    }

    Ok(())
}
