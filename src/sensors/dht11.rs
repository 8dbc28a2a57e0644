//! DHT11 frame decoding.
//!
//! The sensor answers a start pulse with 40 bits: humidity integer and
//! decimal bytes, temperature integer and decimal bytes, and an 8-bit
//! checksum.  Every bit is a ~50 µs low followed by a high whose length
//! encodes the value (26–28 µs = 0, ~70 µs = 1).
//!
//! ## Dual-target design
//!
//! The timing-critical bus driver lives in `adapters::rpi` behind the
//! `rpi` feature.  Everything here is pure and runs on the host.

use crate::error::SensorError;

use super::climate::ClimateSample;

/// Number of data bits in one frame.
pub const FRAME_BITS: usize = 40;

/// High pulses longer than this are a `1`.
pub const ONE_THRESHOLD_US: u32 = 50;

/// Pack 40 measured high-pulse widths into the five frame bytes.
pub fn frame_from_pulses(high_us: &[u32; FRAME_BITS]) -> [u8; 5] {
    let mut frame = [0u8; 5];
    for (i, &width) in high_us.iter().enumerate() {
        if width > ONE_THRESHOLD_US {
            frame[i / 8] |= 0x80 >> (i % 8);
        }
    }
    frame
}

/// Validate the checksum and convert a frame to engineering units.
pub fn decode_frame(frame: [u8; 5]) -> Result<ClimateSample, SensorError> {
    let sum = frame[..4].iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    if sum != frame[4] {
        return Err(SensorError::ChecksumMismatch);
    }

    let humidity_percent = frame[0] as f32 + frame[1] as f32 / 10.0;
    // Bit 7 of the temperature decimal byte is the sign on newer DHT11 revisions.
    let magnitude = frame[2] as f32 + (frame[3] & 0x7F) as f32 / 10.0;
    let temperature_c = if frame[3] & 0x80 != 0 { -magnitude } else { magnitude };

    Ok(ClimateSample {
        temperature_c,
        humidity_percent,
    })
}
