//! Boundary with the media container that owns track records.
//!
//! The container is authoritative for every primitive attribute. movtrack reads a
//! fresh [`TrackAttributes`] snapshot per query and writes back only the mutable
//! attributes listed in [`AttributeUpdate`].

pub(crate) mod config;
pub(crate) mod memory;

use crate::audio::channel::ChannelLayout;
use crate::foundation::core::{MediaType, PixelAspectRatio, PixelDimensions, Rect, TrackId};
use crate::foundation::error::MovtrackResult;

/// Snapshot of a track's primitive attributes as reported by its container.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TrackAttributes {
    /// Length in media ticks.
    pub raw_duration: i64,
    /// Media ticks per second.
    pub time_scale: i64,
    /// Number of samples (frames) in the media.
    pub frame_count: u64,
    /// Media handler kind.
    pub media_type: MediaType,
    /// Display bounds (`x0/y0/x1/y1` = left/top/right/bottom).
    pub bounds: Rect,
    /// Pixel aspect ratio of the first sample description.
    pub pixel_aspect_ratio: PixelAspectRatio,
    /// Encoded pixel dimensions of the first sample description.
    pub encoded_pixel_dimensions: PixelDimensions,
    /// Audio channel layout; `None` for non-audio tracks.
    pub channel_layout: Option<ChannelLayout>,
    /// Audio channel count; zero for non-audio tracks.
    pub channel_count: u32,
    /// Playback volume, `1.0` is normal.
    pub volume: f64,
    /// Whether the track participates in playback.
    pub enabled: bool,
    /// Start offset from the beginning of the movie, in seconds.
    pub offset: f64,
    /// Codec name of the first sample description, if the container knows it.
    pub codec: Option<String>,
}

/// A write to one of the mutable track attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AttributeUpdate {
    /// Set playback volume.
    Volume(f64),
    /// Enable or disable the track.
    Enabled(bool),
    /// Set start offset in seconds.
    Offset(f64),
    /// Write back transformed display bounds.
    Bounds(Rect),
}

/// Track storage consumed by [`crate::Movie`].
///
/// Implementations must never reuse a [`TrackId`] and must report
/// [`crate::MovtrackError::StaleTrackReference`] for ids that were deleted or belong to
/// a closed container.
pub trait Container {
    /// Movie-level ticks per second.
    fn time_scale(&self) -> MovtrackResult<i64>;

    /// Ids of all live tracks, in container order.
    fn track_ids(&self) -> MovtrackResult<Vec<TrackId>>;

    /// Ids of live tracks of one media type, in container order.
    fn track_ids_of(&self, kind: MediaType) -> MovtrackResult<Vec<TrackId>> {
        let mut out = Vec::new();
        for id in self.track_ids()? {
            if self.attributes(id)?.media_type == kind {
                out.push(id);
            }
        }
        Ok(out)
    }

    /// Fresh snapshot of a track's primitive attributes.
    fn attributes(&self, id: TrackId) -> MovtrackResult<TrackAttributes>;

    /// Write one mutable attribute.
    fn set_attribute(&mut self, id: TrackId, update: AttributeUpdate) -> MovtrackResult<()>;

    /// Create an empty track of `kind` and return its id.
    fn add_track(&mut self, kind: MediaType) -> MovtrackResult<TrackId>;

    /// Remove a track. Its id becomes stale.
    fn delete_track(&mut self, id: TrackId) -> MovtrackResult<()>;

    /// Release the container; every later call reports stale references.
    fn close(&mut self);

    /// Return `true` once [`Container::close`] has run.
    fn is_closed(&self) -> bool;

    /// Return `true` when any mutation happened since the last [`Container::clear_changed`].
    fn has_changed(&self) -> bool;

    /// Reset the changed flag.
    fn clear_changed(&mut self);
}
