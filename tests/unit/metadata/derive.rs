use super::*;

#[test]
fn duration_divides_ticks_by_scale() {
    assert_eq!(duration_secs(1860, 600).unwrap(), 3.1);
    assert_eq!(duration_secs(44100, 44100).unwrap(), 1.0);
    assert_eq!(duration_secs(0, 600).unwrap(), 0.0);
}

#[test]
fn zero_time_scale_is_guarded() {
    let err = duration_secs(100, 0).unwrap_err();
    assert!(matches!(err, MovtrackError::DivisionGuard { time_scale: 0 }));
    assert!(matches!(
        secs_to_ticks(1.0, -5),
        Err(MovtrackError::DivisionGuard { time_scale: -5 })
    ));
}

#[test]
fn frame_rate_is_count_over_duration() {
    let d = duration_secs(1860, 600).unwrap();
    assert_eq!(frame_rate(31, d).unwrap(), 10.0);
}

#[test]
fn broadcast_rates_are_not_snapped() {
    // 30000/1001 timebase: 1001 frames spanning 1001 * 1001 / 30000 seconds.
    let d = duration_secs(1001 * 1001, 30000).unwrap();
    let fps = frame_rate(1001, d).unwrap();
    assert_eq!(fps, 1001.0 / d);
    assert!(fps != 30.0 && (fps - 29.97).abs() < 0.001);
}

#[test]
fn zero_duration_has_no_frame_rate() {
    assert!(matches!(
        frame_rate(10, 0.0),
        Err(MovtrackError::UndefinedFrameRate)
    ));
}

#[test]
fn exact_ratios_classify() {
    let hd = aspect_ratio_value(PixelDimensions::new(1920.0, 1080.0), PixelAspectRatio::SQUARE);
    assert_eq!(classify_aspect_ratio(hd), AspectRatio::Widescreen);

    let vga = aspect_ratio_value(PixelDimensions::new(640.0, 480.0), PixelAspectRatio::SQUARE);
    assert_eq!(classify_aspect_ratio(vga), AspectRatio::Fullframe);

    let anamorphic = aspect_ratio_value(
        PixelDimensions::new(720.0, 480.0),
        PixelAspectRatio {
            num: 32.0,
            den: 27.0,
        },
    );
    assert_eq!(classify_aspect_ratio(anamorphic), AspectRatio::Widescreen);
}

#[test]
fn near_misses_classify_as_other() {
    assert_eq!(classify_aspect_ratio(1.7778), AspectRatio::Other);
    assert_eq!(classify_aspect_ratio(1.3333), AspectRatio::Other);

    // PAL anamorphic lands one ulp away from 16/9.
    let pal = aspect_ratio_value(
        PixelDimensions::new(720.0, 576.0),
        PixelAspectRatio {
            num: 64.0,
            den: 45.0,
        },
    );
    assert!((pal - 16.0 / 9.0).abs() < 1e-12);
    assert_eq!(classify_aspect_ratio(pal), AspectRatio::Other);
}

#[test]
fn bounds_extent_is_not_clamped() {
    let r = Rect::new(0.0, 0.0, 60.0, 50.0);
    assert_eq!(bounds_width(r), 60.0);
    assert_eq!(bounds_height(r), 50.0);

    let inverted = Rect::new(60.0, 50.0, 0.0, 0.0);
    assert_eq!(bounds_width(inverted), -60.0);
    assert_eq!(bounds_height(inverted), -50.0);
}

#[test]
fn seconds_to_ticks_truncates() {
    assert_eq!(secs_to_ticks(2.5, 600).unwrap(), 1500);
    assert_eq!(secs_to_ticks(0.0019, 1000).unwrap(), 1);
}
