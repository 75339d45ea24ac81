use super::movie::Movie;
use crate::container::memory::MemoryContainer;
use crate::foundation::core::{Affine, Rect};
use crate::foundation::error::MovtrackError;

fn movie_with_video() -> (Movie, crate::TrackId) {
    let mut movie = Movie::new(MemoryContainer::new());
    let id = movie.new_video_track(60.0, 50.0).unwrap();
    (movie, id)
}

#[test]
fn transform_state_is_created_on_first_mutation() {
    let (mut movie, id) = movie_with_video();
    assert!(movie.transforms.is_empty());
    assert_eq!(movie.track(id).unwrap().transform(), Affine::IDENTITY);

    movie.track_mut(id).unwrap().translate(1.0, 2.0).unwrap();
    assert_eq!(
        movie.transforms[&id].baseline(),
        Rect::new(0.0, 0.0, 60.0, 50.0)
    );
    assert_ne!(movie.track(id).unwrap().transform(), Affine::IDENTITY);
}

#[test]
fn queries_do_not_create_transform_state() {
    let (movie, id) = movie_with_video();
    let track = movie.track(id).unwrap();
    track.bounds_width().unwrap();
    track.aspect_ratio().unwrap();
    assert!(movie.transforms.is_empty());
}

#[test]
fn reset_without_transform_keeps_bounds() {
    let (mut movie, id) = movie_with_video();
    let bounds = movie.track_mut(id).unwrap().reset_transformations().unwrap();
    assert_eq!(bounds, Rect::new(0.0, 0.0, 60.0, 50.0));
    assert!(movie.transforms.is_empty());
}

#[test]
fn delete_drops_transform_state() {
    let (mut movie, id) = movie_with_video();
    movie.track_mut(id).unwrap().scale(2.0, 2.0).unwrap();
    movie.track_mut(id).unwrap().delete().unwrap();
    assert!(!movie.transforms.contains_key(&id));
}

#[test]
fn dispose_clears_transform_state() {
    let (mut movie, id) = movie_with_video();
    movie.track_mut(id).unwrap().rotate(45.0).unwrap();
    movie.dispose();
    assert!(movie.transforms.is_empty());
    assert!(movie.is_disposed());
    assert!(matches!(
        movie.track(id),
        Err(MovtrackError::StaleTrackReference(_))
    ));
}

#[test]
fn audio_tracks_reject_spatial_transforms() {
    let mut movie = Movie::new(MemoryContainer::new());
    let id = movie.new_audio_track().unwrap();
    let err = movie.track_mut(id).unwrap().scale(2.0, 2.0).unwrap_err();
    assert!(matches!(err, MovtrackError::Validation(_)));
    assert!(movie.transforms.is_empty());
}
