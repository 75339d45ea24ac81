use std::collections::BTreeMap;

use crate::container::memory::MemoryContainer;
use crate::container::{AttributeUpdate, Container};
use crate::foundation::core::{MediaType, Rect, TrackId};
use crate::foundation::error::MovtrackResult;
use crate::metadata::derive::{duration_secs, secs_to_ticks};
use crate::movie::track::{Track, TrackMut};
use crate::transform::affine::TrackTransform;

/// A container plus the per-track transform state layered on top of it.
///
/// Track handles are borrowed views keyed by [`TrackId`]; mutation goes through
/// [`TrackMut`], which holds `&mut Movie`, so there is at most one writer per movie.
#[derive(Debug)]
pub struct Movie<C: Container = MemoryContainer> {
    pub(crate) container: C,
    pub(crate) transforms: BTreeMap<TrackId, TrackTransform>,
}

impl<C: Container + Default> Default for Movie<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: Container> Movie<C> {
    /// Wrap an open container.
    pub fn new(container: C) -> Self {
        Self {
            container,
            transforms: BTreeMap::new(),
        }
    }

    /// Underlying container.
    pub fn container(&self) -> &C {
        &self.container
    }

    /// Give the container back, dropping transform state.
    pub fn into_container(self) -> C {
        self.container
    }

    /// All live tracks in container order.
    pub fn tracks(&self) -> MovtrackResult<Vec<TrackId>> {
        self.container.track_ids()
    }

    /// Live audio tracks in container order.
    pub fn audio_tracks(&self) -> MovtrackResult<Vec<TrackId>> {
        self.container.track_ids_of(MediaType::Audio)
    }

    /// Live video tracks in container order.
    pub fn video_tracks(&self) -> MovtrackResult<Vec<TrackId>> {
        self.container.track_ids_of(MediaType::Video)
    }

    /// Live text tracks in container order.
    pub fn text_tracks(&self) -> MovtrackResult<Vec<TrackId>> {
        self.container.track_ids_of(MediaType::Text)
    }

    /// Number of live tracks.
    pub fn track_count(&self) -> MovtrackResult<usize> {
        Ok(self.container.track_ids()?.len())
    }

    /// Read-only view of a track. Fails with `StaleTrackReference` for dead ids.
    pub fn track(&self, id: TrackId) -> MovtrackResult<Track<'_, C>> {
        self.container.attributes(id)?;
        Ok(Track { movie: self, id })
    }

    /// Mutable view of a track. Fails with `StaleTrackReference` for dead ids.
    pub fn track_mut(&mut self, id: TrackId) -> MovtrackResult<TrackMut<'_, C>> {
        self.container.attributes(id)?;
        Ok(TrackMut { movie: self, id })
    }

    /// Add a video track with bounds `(0, 0, width, height)`.
    pub fn new_video_track(&mut self, width: f64, height: f64) -> MovtrackResult<TrackId> {
        self.new_spatial_track(MediaType::Video, width, height)
    }

    /// Add a text track with bounds `(0, 0, width, height)`.
    pub fn new_text_track(&mut self, width: f64, height: f64) -> MovtrackResult<TrackId> {
        self.new_spatial_track(MediaType::Text, width, height)
    }

    /// Add an audio track using the container's defaults.
    pub fn new_audio_track(&mut self) -> MovtrackResult<TrackId> {
        self.container.add_track(MediaType::Audio)
    }

    fn new_spatial_track(
        &mut self,
        kind: MediaType,
        width: f64,
        height: f64,
    ) -> MovtrackResult<TrackId> {
        let id = self.container.add_track(kind)?;
        self.container.set_attribute(
            id,
            AttributeUpdate::Bounds(Rect::new(0.0, 0.0, width, height)),
        )?;
        Ok(id)
    }

    /// Latest track end (`offset + duration`) in seconds; `0.0` for an empty movie.
    pub fn duration(&self) -> MovtrackResult<f64> {
        let mut end: f64 = 0.0;
        for id in self.container.track_ids()? {
            let attrs = self.container.attributes(id)?;
            let track_end = attrs.offset + duration_secs(attrs.raw_duration, attrs.time_scale)?;
            end = end.max(track_end);
        }
        Ok(end)
    }

    /// Movie-level ticks per second, as reported by the container.
    pub fn time_scale(&self) -> MovtrackResult<i64> {
        self.container.time_scale()
    }

    /// [`Movie::duration`] in movie ticks, truncated.
    pub fn raw_duration(&self) -> MovtrackResult<i64> {
        secs_to_ticks(self.duration()?, self.container.time_scale()?)
    }

    /// Movie box: union of the bounds of every enabled video and text track.
    ///
    /// Inverted track bounds contribute their normalized footprint. An empty movie has
    /// zero bounds.
    pub fn bounds(&self) -> MovtrackResult<Rect> {
        let mut out: Option<Rect> = None;
        for id in self.container.track_ids()? {
            let attrs = self.container.attributes(id)?;
            if !attrs.enabled || !attrs.media_type.is_spatial() {
                continue;
            }
            let footprint = attrs.bounds.abs();
            out = Some(out.map_or(footprint, |acc| acc.union(footprint)));
        }
        Ok(out.unwrap_or(Rect::ZERO))
    }

    /// Return `true` when the container was mutated since the last clear.
    pub fn has_changed(&self) -> bool {
        self.container.has_changed()
    }

    /// Reset the container's changed flag.
    pub fn clear_changed_status(&mut self) {
        self.container.clear_changed();
    }

    /// Close the container. Every track id becomes stale.
    #[tracing::instrument(skip(self))]
    pub fn dispose(&mut self) {
        self.container.close();
        self.transforms.clear();
    }

    /// Return `true` once [`Movie::dispose`] has run.
    pub fn is_disposed(&self) -> bool {
        self.container.is_closed()
    }
}
