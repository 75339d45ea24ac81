use crate::audio::channel::{ChannelMapEntry, channel_map};
use crate::container::{AttributeUpdate, Container, TrackAttributes};
use crate::foundation::core::{Affine, MediaType, Rect, TrackId};
use crate::foundation::error::{MovtrackError, MovtrackResult};
use crate::metadata::derive::{
    AspectRatio, aspect_ratio_value, bounds_height, bounds_width, classify_aspect_ratio,
    duration_secs, frame_rate,
};
use crate::movie::movie::Movie;
use crate::transform::affine::TrackTransform;

/// Read-only view of one track.
///
/// Every query re-reads primitives from the container; nothing is cached.
#[derive(Debug)]
pub struct Track<'a, C: Container> {
    pub(crate) movie: &'a Movie<C>,
    pub(crate) id: TrackId,
}

impl<C: Container> Clone for Track<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Container> Copy for Track<'_, C> {}

impl<C: Container> Track<'_, C> {
    fn attributes(&self) -> MovtrackResult<TrackAttributes> {
        self.movie.container.attributes(self.id)
    }

    /// Container-assigned id.
    pub fn id(&self) -> TrackId {
        self.id
    }

    /// Length in media ticks.
    pub fn raw_duration(&self) -> MovtrackResult<i64> {
        Ok(self.attributes()?.raw_duration)
    }

    /// Media ticks per second.
    pub fn time_scale(&self) -> MovtrackResult<i64> {
        Ok(self.attributes()?.time_scale)
    }

    /// Number of samples (frames).
    pub fn frame_count(&self) -> MovtrackResult<u64> {
        Ok(self.attributes()?.frame_count)
    }

    /// Media handler kind.
    pub fn media_type(&self) -> MovtrackResult<MediaType> {
        Ok(self.attributes()?.media_type)
    }

    /// Length in seconds.
    pub fn duration(&self) -> MovtrackResult<f64> {
        let attrs = self.attributes()?;
        duration_secs(attrs.raw_duration, attrs.time_scale)
    }

    /// Average frames per second. May not be exact.
    pub fn frame_rate(&self) -> MovtrackResult<f64> {
        let attrs = self.attributes()?;
        let duration = duration_secs(attrs.raw_duration, attrs.time_scale)?;
        frame_rate(attrs.frame_count, duration)
    }

    /// Return `true` for audio tracks.
    pub fn is_audio(&self) -> MovtrackResult<bool> {
        Ok(self.media_type()? == MediaType::Audio)
    }

    /// Return `true` for video tracks.
    pub fn is_video(&self) -> MovtrackResult<bool> {
        Ok(self.media_type()? == MediaType::Video)
    }

    /// Return `true` for text tracks.
    pub fn is_text(&self) -> MovtrackResult<bool> {
        Ok(self.media_type()? == MediaType::Text)
    }

    /// Display aspect ratio before classification.
    pub fn aspect_ratio_value(&self) -> MovtrackResult<f64> {
        let attrs = self.attributes()?;
        Ok(aspect_ratio_value(
            attrs.encoded_pixel_dimensions,
            attrs.pixel_aspect_ratio,
        ))
    }

    /// Display aspect classification (exact 16:9, exact 4:3, or other).
    pub fn aspect_ratio(&self) -> MovtrackResult<AspectRatio> {
        Ok(classify_aspect_ratio(self.aspect_ratio_value()?))
    }

    /// Current display bounds, after any applied transform.
    pub fn bounds(&self) -> MovtrackResult<Rect> {
        Ok(self.attributes()?.bounds)
    }

    /// `right - left` of the current bounds.
    pub fn bounds_width(&self) -> MovtrackResult<f64> {
        Ok(bounds_width(self.bounds()?))
    }

    /// `bottom - top` of the current bounds.
    pub fn bounds_height(&self) -> MovtrackResult<f64> {
        Ok(bounds_height(self.bounds()?))
    }

    /// Encoded width in pixels; `None` unless this is a video track.
    pub fn width(&self) -> MovtrackResult<Option<f64>> {
        let attrs = self.attributes()?;
        Ok((attrs.media_type == MediaType::Video).then_some(attrs.encoded_pixel_dimensions.width))
    }

    /// Encoded height in pixels; `None` unless this is a video track.
    pub fn height(&self) -> MovtrackResult<Option<f64>> {
        let attrs = self.attributes()?;
        Ok((attrs.media_type == MediaType::Video).then_some(attrs.encoded_pixel_dimensions.height))
    }

    /// Codec name; `None` for non-video tracks.
    pub fn codec(&self) -> MovtrackResult<Option<String>> {
        let attrs = self.attributes()?;
        if attrs.media_type != MediaType::Video {
            return Ok(None);
        }
        Ok(attrs.codec)
    }

    /// Number of audio channels; `None` for non-audio tracks.
    pub fn channel_count(&self) -> MovtrackResult<Option<u32>> {
        let attrs = self.attributes()?;
        Ok((attrs.media_type == MediaType::Audio).then_some(attrs.channel_count))
    }

    /// Per-channel assignments; `None` for non-audio tracks.
    pub fn channel_map(&self) -> MovtrackResult<Option<Vec<ChannelMapEntry>>> {
        let attrs = self.attributes()?;
        if attrs.media_type != MediaType::Audio {
            return Ok(None);
        }
        let layout = attrs.channel_layout.ok_or_else(|| {
            MovtrackError::unknown_layout(format!("{} carries no channel layout", self.id))
        })?;
        channel_map(&layout, attrs.channel_count).map(Some)
    }

    /// Playback volume, `1.0` is normal.
    pub fn volume(&self) -> MovtrackResult<f64> {
        Ok(self.attributes()?.volume)
    }

    /// Start offset from the beginning of the movie, in seconds.
    pub fn offset(&self) -> MovtrackResult<f64> {
        Ok(self.attributes()?.offset)
    }

    /// Return `true` when the track participates in playback.
    pub fn is_enabled(&self) -> MovtrackResult<bool> {
        Ok(self.attributes()?.enabled)
    }

    /// Composed transform; identity if the track was never transformed.
    pub fn transform(&self) -> Affine {
        self.movie
            .transforms
            .get(&self.id)
            .map_or(Affine::IDENTITY, TrackTransform::matrix)
    }
}

/// Mutable view of one track.
#[derive(Debug)]
pub struct TrackMut<'a, C: Container> {
    pub(crate) movie: &'a mut Movie<C>,
    pub(crate) id: TrackId,
}

impl<C: Container> TrackMut<'_, C> {
    /// Read-only view for queries.
    pub fn get(&self) -> Track<'_, C> {
        Track {
            movie: &*self.movie,
            id: self.id,
        }
    }

    /// Container-assigned id.
    pub fn id(&self) -> TrackId {
        self.id
    }

    /// Set playback volume.
    #[tracing::instrument(skip(self), fields(track = %self.id))]
    pub fn set_volume(&mut self, volume: f64) -> MovtrackResult<()> {
        self.set(AttributeUpdate::Volume(volume))
    }

    /// Set start offset in seconds.
    #[tracing::instrument(skip(self), fields(track = %self.id))]
    pub fn set_offset(&mut self, seconds: f64) -> MovtrackResult<()> {
        self.set(AttributeUpdate::Offset(seconds))
    }

    /// Enable the track.
    pub fn enable(&mut self) -> MovtrackResult<()> {
        self.set(AttributeUpdate::Enabled(true))
    }

    /// Disable the track.
    pub fn disable(&mut self) -> MovtrackResult<()> {
        self.set(AttributeUpdate::Enabled(false))
    }

    /// Remove the track from its container and drop its transform.
    #[tracing::instrument(skip(self), fields(track = %self.id))]
    pub fn delete(self) -> MovtrackResult<()> {
        self.movie.container.delete_track(self.id)?;
        self.movie.transforms.remove(&self.id);
        Ok(())
    }

    /// Scale about the current top-left corner. Returns the new bounds.
    #[tracing::instrument(skip(self), fields(track = %self.id))]
    pub fn scale(&mut self, sx: f64, sy: f64) -> MovtrackResult<Rect> {
        self.transform_with(|t| t.scale(sx, sy))
    }

    /// Translate by `(dx, dy)`. Returns the new bounds.
    #[tracing::instrument(skip(self), fields(track = %self.id))]
    pub fn translate(&mut self, dx: f64, dy: f64) -> MovtrackResult<Rect> {
        self.transform_with(|t| t.translate(dx, dy))
    }

    /// Rotate by `degrees` about the center of the current bounds. Returns the new bounds.
    #[tracing::instrument(skip(self), fields(track = %self.id))]
    pub fn rotate(&mut self, degrees: f64) -> MovtrackResult<Rect> {
        self.transform_with(|t| t.rotate(degrees))
    }

    /// Return to identity and restore the bounds captured before the first transform.
    #[tracing::instrument(skip(self), fields(track = %self.id))]
    pub fn reset_transformations(&mut self) -> MovtrackResult<Rect> {
        let Some(transform) = self.movie.transforms.get_mut(&self.id) else {
            return self.get().bounds();
        };
        let baseline = transform.reset();
        self.set(AttributeUpdate::Bounds(baseline))?;
        Ok(baseline)
    }

    fn set(&mut self, update: AttributeUpdate) -> MovtrackResult<()> {
        self.movie.container.set_attribute(self.id, update)
    }

    fn transform_with(
        &mut self,
        op: impl FnOnce(&mut TrackTransform) -> Rect,
    ) -> MovtrackResult<Rect> {
        let attrs = self.movie.container.attributes(self.id)?;
        if !attrs.media_type.is_spatial() {
            return Err(MovtrackError::validation(format!(
                "{} is a {} track and has no display geometry",
                self.id, attrs.media_type
            )));
        }
        let transform = self
            .movie
            .transforms
            .entry(self.id)
            .or_insert_with(|| TrackTransform::new(attrs.bounds));
        let bounds = op(transform);
        self.set(AttributeUpdate::Bounds(bounds))?;
        tracing::debug!(?bounds, "wrote back transformed bounds");
        Ok(bounds)
    }
}
