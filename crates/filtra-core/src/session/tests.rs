use super::*;
use crate::buffer::ImageBuffer;
use crate::config::UiDefaults;

fn mid_gray(width: u32, height: u32) -> ImageBuffer {
    ImageBuffer::filled(width, height, 3, 128)
}

fn checkerboard(width: u32, height: u32) -> ImageBuffer {
    let mut data = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let v = if (x + y) % 2 == 0 { 40 } else { 215 };
            data.extend_from_slice(&[v, v / 2, 255 - v]);
        }
    }
    ImageBuffer::from_raw(width, height, 3, data).unwrap()
}

#[test]
fn test_render_empty_set_is_identity() {
    let base = checkerboard(8, 8);
    let rendered = render(&base, &ActiveFilterSet::new(), &UiDefaults::default());
    assert_eq!(rendered, base);
}

#[test]
fn test_render_is_independent_of_toggle_order() {
    let base = checkerboard(12, 10);
    let defaults = UiDefaults::default();

    let mut forward = ActiveFilterSet::new();
    forward.toggle(FilterKind::Blur);
    forward.toggle(FilterKind::EdgeDetect);

    let mut reverse = ActiveFilterSet::new();
    reverse.toggle(FilterKind::EdgeDetect);
    reverse.toggle(FilterKind::Blur);

    assert_eq!(
        render(&base, &forward, &defaults),
        render(&base, &reverse, &defaults)
    );
}

#[test]
fn test_grayscale_then_edges_on_uniform_image_is_flat_zero() {
    let defaults = UiDefaults::default();
    let mut session = WindowSession::new("gray.png", mid_gray(2, 2), defaults);

    session.toggle_filter(FilterKind::Grayscale);
    let frame = session.toggle_filter(FilterKind::EdgeDetect);

    assert_eq!(frame.channels(), 1);
    assert!(
        frame.data().iter().all(|&v| v == 0),
        "uniform input must give zero edge response everywhere"
    );
}

#[test]
fn test_color_restore_cancels_grayscale() {
    let base = checkerboard(6, 6);
    let mut session = WindowSession::new("photo.png", base.clone(), UiDefaults::default());

    let frame = session.toggle_filter(FilterKind::Grayscale);
    assert_eq!(frame.channels(), 1);

    let frame = session.toggle_filter(FilterKind::ColorRestore);
    assert_eq!(frame, base);
    assert!(!session.active_filters().contains(FilterKind::Grayscale));
}

#[test]
fn test_slider_at_zero_is_a_no_op() {
    let mut session = WindowSession::new("photo.png", checkerboard(8, 8), UiDefaults::default());

    assert!(session.on_slide(0).is_none());
    assert!(session.on_slide(-5).is_none());
    assert_eq!(session.blur_radius(), 0);

    assert!(session.on_slide(7).is_some());
    assert_eq!(session.blur_radius(), 7);

    // Going back to zero leaves the stored radius alone.
    assert!(session.on_slide(0).is_none());
    assert_eq!(session.blur_radius(), 7);
}

#[test]
fn test_slider_preview_ignores_active_filters() {
    let base = checkerboard(8, 8);
    let mut session = WindowSession::new("photo.png", base.clone(), UiDefaults::default());
    session.toggle_filter(FilterKind::Grayscale);

    let preview = session.on_slide(3).unwrap();
    // The preview blurs the base image, not the grayscale frame.
    assert_eq!(preview.channels(), 3);
}

#[test]
fn test_pointer_down_mutates_base_permanently() {
    let base = mid_gray(32, 32);
    let mut session = WindowSession::new("photo.png", base.clone(), UiDefaults::default());

    let frame = session.on_pointer_down(16, 16);
    assert_ne!(frame, base);
    assert_eq!(session.base(), &frame);

    // The marker survives a later render of the empty filter set.
    assert_eq!(session.current_frame(), frame);
}

#[test]
fn test_pointer_down_outside_bounds_is_harmless() {
    let base = mid_gray(16, 16);
    let mut session = WindowSession::new("photo.png", base.clone(), UiDefaults::default());

    let frame = session.on_pointer_down(500, -40);
    assert_eq!(
        frame, base,
        "marker fully outside the image must leave every pixel untouched"
    );
}

#[test]
fn test_pointer_down_returns_blur_preview_when_radius_stored() {
    let mut session = WindowSession::new("photo.png", checkerboard(16, 16), UiDefaults::default());
    session.on_slide(5);

    let frame = session.on_pointer_down(8, 8);
    let expected = crate::filters::box_blur(session.base(), 5);
    assert_eq!(frame, expected);
}

#[test]
fn test_effects_do_not_touch_session_state() {
    let mut session = WindowSession::new("photo.png", checkerboard(30, 30), UiDefaults::default());
    session.toggle_filter(FilterKind::Blur);
    session.on_slide(9);

    let base_before = session.base().clone();
    for kind in EffectKind::ALL {
        let _ = session.run_effect(kind);
    }

    assert_eq!(session.base(), &base_before);
    assert!(session.active_filters().contains(FilterKind::Blur));
    assert_eq!(session.blur_radius(), 9);
}

#[test]
fn test_blur_toggle_keeps_dimensions() {
    let mut session = WindowSession::new("photo.png", checkerboard(9, 7), UiDefaults::default());
    let frame = session.toggle_filter(FilterKind::Blur);
    assert_eq!(frame.width(), 9);
    assert_eq!(frame.height(), 7);
    assert_eq!(frame.channels(), 3);
}
