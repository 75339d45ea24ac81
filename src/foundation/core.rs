use std::fmt;

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Container-assigned track identifier.
///
/// Ids are 1-based and never reused within a container, so an id that outlives
/// its track can be detected instead of aliasing a newer one.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TrackId(pub u32);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "track #{}", self.0)
    }
}

/// Kind of media carried by a track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Sound media.
    Audio,
    /// Video media.
    Video,
    /// Text (subtitle/caption) media.
    Text,
    /// Any handler movtrack does not classify (timecode, metadata, ...).
    Other,
}

impl MediaType {
    /// Return `true` for media with display geometry (video and text).
    pub fn is_spatial(self) -> bool {
        matches!(self, Self::Video | Self::Text)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Text => "text",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// Pixel aspect ratio as a `num:den` pair (`1:1` for square pixels).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PixelAspectRatio {
    /// Horizontal spacing.
    pub num: f64,
    /// Vertical spacing.
    pub den: f64,
}

impl PixelAspectRatio {
    /// Square pixels.
    pub const SQUARE: Self = Self { num: 1.0, den: 1.0 };

    /// Ratio as a float. No guard: a zero denominator yields infinity or NaN.
    pub fn as_f64(self) -> f64 {
        self.num / self.den
    }
}

impl Default for PixelAspectRatio {
    fn default() -> Self {
        Self::SQUARE
    }
}

/// Encoded (storage) dimensions of a video sample, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PixelDimensions {
    /// Encoded width.
    pub width: f64,
    /// Encoded height.
    pub height: f64,
}

impl PixelDimensions {
    /// Build dimensions from a width/height pair.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
