use super::*;

#[test]
fn defaults_match_framework_time_scales() {
    let d = MediaDefaults::default();
    assert_eq!(d.movie_time_scale, 600);
    assert_eq!(d.video_time_scale, 600);
    assert_eq!(d.audio_time_scale, 44_100);
    assert_eq!(d.text_time_scale, 600);
    assert_eq!(d.audio_volume, 1.0);
    assert!(d.validate().is_ok());
}

#[test]
fn partial_json_fills_missing_fields() {
    let d = MediaDefaults::from_json_str(r#"{ "audio_time_scale": 48000 }"#).unwrap();
    assert_eq!(d.audio_time_scale, 48_000);
    assert_eq!(d.video_time_scale, 600);
}

#[test]
fn zero_time_scale_is_rejected() {
    let err = MediaDefaults::from_json_str(r#"{ "video_time_scale": 0 }"#).unwrap_err();
    assert!(matches!(err, MovtrackError::Validation(_)));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = MediaDefaults::from_json_str("{ nope").unwrap_err();
    assert!(matches!(err, MovtrackError::Serde(_)));
}

#[test]
fn time_scale_follows_media_kind() {
    let d = MediaDefaults {
        movie_time_scale: 1000,
        audio_time_scale: 48_000,
        ..MediaDefaults::default()
    };
    assert_eq!(d.time_scale_for(MediaType::Audio), 48_000);
    assert_eq!(d.time_scale_for(MediaType::Video), 600);
    assert_eq!(d.time_scale_for(MediaType::Text), 600);
    assert_eq!(d.time_scale_for(MediaType::Other), 1000);
}
