//! Pure derivations from primitive track attributes.
//!
//! Nothing here caches: callers re-read primitives from the container and derive
//! on every query.

use crate::foundation::core::{PixelAspectRatio, PixelDimensions, Rect};
use crate::foundation::error::{MovtrackError, MovtrackResult};

/// Display aspect classification of a video track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    /// Exactly 16:9.
    Widescreen,
    /// Exactly 4:3.
    Fullframe,
    /// Anything else, including values merely close to 16:9 or 4:3.
    Other,
}

/// Track length in seconds: `raw_duration / time_scale`.
pub fn duration_secs(raw_duration: i64, time_scale: i64) -> MovtrackResult<f64> {
    if time_scale <= 0 {
        return Err(MovtrackError::DivisionGuard { time_scale });
    }
    Ok(raw_duration as f64 / time_scale as f64)
}

/// Average frame rate: `frame_count / duration`.
///
/// Non-integral broadcast rates are reported as computed, with no rational snapping.
pub fn frame_rate(frame_count: u64, duration_secs: f64) -> MovtrackResult<f64> {
    if duration_secs == 0.0 {
        return Err(MovtrackError::UndefinedFrameRate);
    }
    Ok(frame_count as f64 / duration_secs)
}

/// Display aspect ratio: encoded width/height scaled by the pixel aspect ratio.
pub fn aspect_ratio_value(encoded: PixelDimensions, pixel_aspect: PixelAspectRatio) -> f64 {
    (encoded.width / encoded.height) * pixel_aspect.as_f64()
}

/// Classify a display aspect ratio by bit-exact comparison against 16/9 and 4/3.
#[allow(clippy::float_cmp)]
pub fn classify_aspect_ratio(ratio: f64) -> AspectRatio {
    if ratio == 16.0 / 9.0 {
        AspectRatio::Widescreen
    } else if ratio == 4.0 / 3.0 {
        AspectRatio::Fullframe
    } else {
        AspectRatio::Other
    }
}

/// Horizontal extent of `bounds`; negative for inverted bounds.
pub fn bounds_width(bounds: Rect) -> f64 {
    bounds.x1 - bounds.x0
}

/// Vertical extent of `bounds`; negative for inverted bounds.
pub fn bounds_height(bounds: Rect) -> f64 {
    bounds.y1 - bounds.y0
}

/// Convert seconds to media ticks, truncating toward zero.
pub fn secs_to_ticks(secs: f64, time_scale: i64) -> MovtrackResult<i64> {
    if time_scale <= 0 {
        return Err(MovtrackError::DivisionGuard { time_scale });
    }
    Ok((secs * time_scale as f64) as i64)
}

#[cfg(test)]
#[path = "../../tests/unit/metadata/derive.rs"]
mod tests;
