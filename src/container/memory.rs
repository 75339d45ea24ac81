use std::path::Path;

use anyhow::Context;

use crate::audio::channel::ChannelLayout;
use crate::container::config::MediaDefaults;
use crate::container::{AttributeUpdate, Container, TrackAttributes};
use crate::foundation::core::{MediaType, PixelAspectRatio, PixelDimensions, Rect, TrackId};
use crate::foundation::error::{MovtrackError, MovtrackResult};
use crate::metadata::derive::secs_to_ticks;

/// Description of one track, as loaded from JSON or pushed programmatically.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrackRecord {
    /// Media handler kind.
    pub media_type: MediaType,
    /// Length in media ticks.
    #[serde(default)]
    pub raw_duration: i64,
    /// Media ticks per second. Container descriptions fill a missing value from their
    /// defaults for the media kind.
    #[serde(default = "default_time_scale")]
    pub time_scale: i64,
    /// Number of samples (frames).
    #[serde(default)]
    pub frame_count: u64,
    /// Display bounds.
    #[serde(default)]
    pub bounds: Rect,
    /// Pixel aspect ratio.
    #[serde(default)]
    pub pixel_aspect_ratio: PixelAspectRatio,
    /// Encoded pixel dimensions.
    #[serde(default)]
    pub encoded_pixel_dimensions: PixelDimensions,
    /// Audio channel layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_layout: Option<ChannelLayout>,
    /// Audio channel count.
    #[serde(default)]
    pub channel_count: u32,
    /// Playback volume.
    #[serde(default = "default_volume")]
    pub volume: f64,
    /// Whether the track is enabled.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Start offset in seconds.
    #[serde(default)]
    pub offset: f64,
    /// Codec name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
}

fn default_time_scale() -> i64 {
    600
}

fn default_volume() -> f64 {
    1.0
}

fn default_enabled() -> bool {
    true
}

impl TrackRecord {
    /// Empty record of `kind` with default attributes.
    pub fn new(kind: MediaType) -> Self {
        Self {
            media_type: kind,
            raw_duration: 0,
            time_scale: default_time_scale(),
            frame_count: 0,
            bounds: Rect::ZERO,
            pixel_aspect_ratio: PixelAspectRatio::SQUARE,
            encoded_pixel_dimensions: PixelDimensions::default(),
            channel_layout: None,
            channel_count: 0,
            volume: default_volume(),
            enabled: true,
            offset: 0.0,
            codec: None,
        }
    }
}

#[derive(Clone, Debug, serde::Deserialize)]
struct ContainerDescription {
    #[serde(default)]
    defaults: MediaDefaults,
    #[serde(default)]
    tracks: Vec<TrackDescription>,
}

// A missing `time_scale` resolves against the description's defaults for the media kind.
#[derive(Clone, Debug, serde::Deserialize)]
struct TrackDescription {
    #[serde(default)]
    time_scale: Option<i64>,
    #[serde(flatten)]
    record: TrackRecord,
}

impl TrackDescription {
    fn into_record(self, defaults: &MediaDefaults) -> TrackRecord {
        let mut record = self.record;
        record.time_scale = self
            .time_scale
            .unwrap_or_else(|| defaults.time_scale_for(record.media_type));
        record
    }
}

// Volume is kept as signed 8.8 fixed point, offset as media ticks, so values
// written through the container read back quantized.
#[derive(Clone, Debug)]
struct StoredTrack {
    id: TrackId,
    record: TrackRecord,
    volume_fixed: i16,
    offset_ticks: i64,
}

impl StoredTrack {
    fn new(id: TrackId, record: TrackRecord) -> MovtrackResult<Self> {
        let offset_ticks = if record.offset == 0.0 {
            0
        } else {
            secs_to_ticks(record.offset, record.time_scale)?
        };
        Ok(Self {
            id,
            volume_fixed: volume_to_fixed(record.volume),
            offset_ticks,
            record,
        })
    }

    fn attributes(&self) -> TrackAttributes {
        let r = &self.record;
        let offset = if self.offset_ticks == 0 {
            0.0
        } else {
            self.offset_ticks as f64 / r.time_scale as f64
        };
        TrackAttributes {
            raw_duration: r.raw_duration,
            time_scale: r.time_scale,
            frame_count: r.frame_count,
            media_type: r.media_type,
            bounds: r.bounds,
            pixel_aspect_ratio: r.pixel_aspect_ratio,
            encoded_pixel_dimensions: r.encoded_pixel_dimensions,
            channel_layout: r.channel_layout.clone(),
            channel_count: r.channel_count,
            volume: f64::from(self.volume_fixed) / 256.0,
            enabled: r.enabled,
            offset,
            codec: r.codec.clone(),
        }
    }
}

fn volume_to_fixed(volume: f64) -> i16 {
    (volume * 256.0) as i16
}

/// In-memory [`Container`] holding track records in insertion order.
#[derive(Clone, Debug, Default)]
pub struct MemoryContainer {
    tracks: Vec<StoredTrack>,
    last_id: u32,
    defaults: MediaDefaults,
    closed: bool,
    changed: bool,
}

impl MemoryContainer {
    /// Empty container with [`MediaDefaults::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty container with custom defaults for new tracks.
    pub fn with_defaults(defaults: MediaDefaults) -> MovtrackResult<Self> {
        defaults.validate()?;
        Ok(Self {
            defaults,
            ..Self::default()
        })
    }

    /// Defaults applied by [`Container::add_track`].
    pub fn defaults(&self) -> &MediaDefaults {
        &self.defaults
    }

    /// Append a fully described track and return its id.
    pub fn push_track(&mut self, record: TrackRecord) -> MovtrackResult<TrackId> {
        if self.closed {
            return Err(MovtrackError::validation("container is closed"));
        }
        let id = TrackId(self.last_id + 1);
        let stored = StoredTrack::new(id, record)?;
        self.last_id = id.0;
        self.tracks.push(stored);
        Ok(id)
    }

    /// Build a container from a JSON description (`{ "defaults": {...}, "tracks": [...] }`).
    #[tracing::instrument(skip(s))]
    pub fn from_json_str(s: &str) -> MovtrackResult<Self> {
        let desc: ContainerDescription =
            serde_json::from_str(s).map_err(|e| MovtrackError::serde(e.to_string()))?;
        let mut container = Self::with_defaults(desc.defaults)?;
        for track in desc.tracks {
            let record = track.into_record(&desc.defaults);
            container.push_track(record)?;
        }
        tracing::debug!(tracks = container.tracks.len(), "loaded container description");
        Ok(container)
    }

    /// Read and parse a JSON description from disk.
    #[tracing::instrument]
    pub fn open(path: &Path) -> MovtrackResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read container description {}", path.display()))?;
        Self::from_json_str(&text)
    }

    fn live(&self, id: TrackId) -> MovtrackResult<&StoredTrack> {
        if self.closed {
            return Err(MovtrackError::StaleTrackReference(id));
        }
        self.tracks
            .iter()
            .find(|t| t.id == id)
            .ok_or(MovtrackError::StaleTrackReference(id))
    }

    fn live_mut(&mut self, id: TrackId) -> MovtrackResult<&mut StoredTrack> {
        if self.closed {
            return Err(MovtrackError::StaleTrackReference(id));
        }
        self.tracks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(MovtrackError::StaleTrackReference(id))
    }
}

impl Container for MemoryContainer {
    fn time_scale(&self) -> MovtrackResult<i64> {
        if self.closed {
            return Err(MovtrackError::validation("container is closed"));
        }
        Ok(self.defaults.movie_time_scale)
    }

    fn track_ids(&self) -> MovtrackResult<Vec<TrackId>> {
        if self.closed {
            return Ok(Vec::new());
        }
        Ok(self.tracks.iter().map(|t| t.id).collect())
    }

    fn attributes(&self, id: TrackId) -> MovtrackResult<TrackAttributes> {
        Ok(self.live(id)?.attributes())
    }

    fn set_attribute(&mut self, id: TrackId, update: AttributeUpdate) -> MovtrackResult<()> {
        let track = self.live_mut(id)?;
        match update {
            AttributeUpdate::Volume(v) => track.volume_fixed = volume_to_fixed(v),
            AttributeUpdate::Enabled(on) => track.record.enabled = on,
            AttributeUpdate::Offset(secs) => {
                track.offset_ticks = secs_to_ticks(secs, track.record.time_scale)?;
            }
            AttributeUpdate::Bounds(rect) => track.record.bounds = rect,
        }
        self.changed = true;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    fn add_track(&mut self, kind: MediaType) -> MovtrackResult<TrackId> {
        let d = self.defaults;
        let mut record = TrackRecord::new(kind);
        record.time_scale = d.time_scale_for(kind);
        match kind {
            MediaType::Audio => {
                record.volume = d.audio_volume;
                record.channel_count = d.audio_channels;
                record.channel_layout = Some(if d.audio_channels == 1 {
                    ChannelLayout::mono()
                } else {
                    ChannelLayout::stereo()
                });
            }
            MediaType::Video | MediaType::Text | MediaType::Other => record.volume = 0.0,
        }
        let id = self.push_track(record)?;
        self.changed = true;
        tracing::debug!(%id, %kind, "added track");
        Ok(id)
    }

    #[tracing::instrument(skip(self))]
    fn delete_track(&mut self, id: TrackId) -> MovtrackResult<()> {
        self.live(id)?;
        self.tracks.retain(|t| t.id != id);
        self.changed = true;
        tracing::debug!(%id, "deleted track");
        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
        self.tracks.clear();
    }

    fn is_closed(&self) -> bool {
        self.closed
    }

    fn has_changed(&self) -> bool {
        self.changed
    }

    fn clear_changed(&mut self) {
        self.changed = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/container/memory.rs"]
mod tests;
