//! movtrack derives track metadata and manages spatial transforms over movie containers.
//!
//! A container (see [`Container`]) is authoritative for every primitive track attribute:
//! raw duration, time scale, frame count, media type, bounds, pixel aspect ratio, channel
//! layout, volume, enabled state and offset. movtrack layers three things on top:
//!
//! 1. **Metadata derivation**: duration, frame rate, media-type predicates and aspect
//!    classification, recomputed from primitives on every query.
//! 2. **Spatial transforms**: a composable affine matrix per video/text track. Scale,
//!    translate and rotate compose in call order; the transformed bounds are written
//!    back to the container; reset restores the bounds captured before the first
//!    transform.
//! 3. **Channel maps**: layout tags resolved to ordered per-channel assignments.
//!
//! # Example
//!
//! ```
//! use movtrack::{MemoryContainer, Movie};
//!
//! let mut movie = Movie::new(MemoryContainer::new());
//! let id = movie.new_video_track(60.0, 50.0)?;
//! movie.track_mut(id)?.rotate(90.0)?;
//! let track = movie.track(id)?;
//! assert_eq!(track.bounds_width()?, 50.0);
//! assert_eq!(track.bounds_height()?, 60.0);
//! # Ok::<(), movtrack::MovtrackError>(())
//! ```
//!
//! Ownership follows an arena-and-id model: the container owns track records, callers
//! hold [`TrackId`]s, and deleted ids report [`MovtrackError::StaleTrackReference`].
//! A movie is single-writer: mutation borrows it exclusively through [`TrackMut`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod audio;
mod container;
mod foundation;
mod metadata;
mod movie;

/// Affine helpers shared by the transform engine.
pub mod transform;

pub use audio::channel::{ChannelLabel, ChannelLayout, ChannelMapEntry, channel_map, layout_tag};
pub use container::config::MediaDefaults;
pub use container::memory::{MemoryContainer, TrackRecord};
pub use container::{AttributeUpdate, Container, TrackAttributes};
pub use foundation::core::{
    Affine, MediaType, PixelAspectRatio, PixelDimensions, Point, Rect, TrackId, Vec2,
};
pub use foundation::error::{MovtrackError, MovtrackResult};
pub use metadata::derive::{
    AspectRatio, aspect_ratio_value, bounds_height, bounds_width, classify_aspect_ratio,
    duration_secs, frame_rate, secs_to_ticks,
};
pub use movie::movie::Movie;
pub use movie::track::{Track, TrackMut};
pub use transform::affine::TrackTransform;
