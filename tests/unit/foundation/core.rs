use super::*;

#[test]
fn only_video_and_text_are_spatial() {
    assert!(MediaType::Video.is_spatial());
    assert!(MediaType::Text.is_spatial());
    assert!(!MediaType::Audio.is_spatial());
    assert!(!MediaType::Other.is_spatial());
}

#[test]
fn media_type_serializes_lowercase() {
    let json = serde_json::to_string(&MediaType::Audio).unwrap();
    assert_eq!(json, "\"audio\"");
    let back: MediaType = serde_json::from_str("\"text\"").unwrap();
    assert_eq!(back, MediaType::Text);
}

#[test]
fn pixel_aspect_defaults_to_square() {
    assert_eq!(PixelAspectRatio::default(), PixelAspectRatio::SQUARE);
    assert_eq!(PixelAspectRatio::default().as_f64(), 1.0);
}

#[test]
fn track_ids_order_by_value() {
    let mut ids = vec![TrackId(3), TrackId(1), TrackId(2)];
    ids.sort();
    assert_eq!(ids, vec![TrackId(1), TrackId(2), TrackId(3)]);
}
