// Host-side tests for the HSB color model and CSS serialization.

use umbra_core::*;

#[test]
fn primary_hues_convert_exactly() {
    assert_eq!(Hsba::new(0.0, 100.0, 100.0, 1.0).to_rgba(), (255, 0, 0, 1.0));
    assert_eq!(
        Hsba::new(120.0, 100.0, 100.0, 1.0).to_rgba(),
        (0, 255, 0, 1.0)
    );
    assert_eq!(
        Hsba::new(240.0, 100.0, 100.0, 1.0).to_rgba(),
        (0, 0, 255, 1.0)
    );
}

#[test]
fn zero_saturation_is_gray_regardless_of_hue() {
    for hue in [0.0, 40.0, 123.0, 359.0] {
        let (r, g, b, _) = Hsba::new(hue, 0.0, 50.0, 1.0).to_rgba();
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert_eq!(r, 128);
    }
}

#[test]
fn brightness_extremes_are_black_and_white() {
    assert_eq!(Hsba::new(200.0, 80.0, 0.0, 1.0).to_rgba(), (0, 0, 0, 1.0));
    assert_eq!(Hsba::new(0.0, 0.0, 100.0, 1.0).to_rgba(), (255, 255, 255, 1.0));
}

#[test]
fn hue_wraps_past_a_full_turn() {
    assert_eq!(
        Hsba::new(360.0, 100.0, 100.0, 1.0).to_rgba(),
        Hsba::new(0.0, 100.0, 100.0, 1.0).to_rgba()
    );
    assert_eq!(
        Hsba::new(480.0, 100.0, 100.0, 1.0).to_rgba(),
        Hsba::new(120.0, 100.0, 100.0, 1.0).to_rgba()
    );
}

#[test]
fn alpha_is_clamped_to_unit_range() {
    assert_eq!(Hsba::new(0.0, 0.0, 0.0, 1.7).to_rgba().3, 1.0);
    assert_eq!(Hsba::new(0.0, 0.0, 0.0, -0.2).to_rgba().3, 0.0);
}

#[test]
fn css_serialization_is_canvas_compatible() {
    assert_eq!(
        Hsba::new(0.0, 100.0, 100.0, 1.0).to_css(),
        "rgba(255, 0, 0, 1)"
    );
    assert_eq!(Hsba::new(0.0, 0.0, 0.0, 0.8).to_css(), "rgba(0, 0, 0, 0.8)");
}

#[test]
fn the_background_is_near_black() {
    let (r, g, b, a) = BACKGROUND.to_rgba();
    assert!(r <= 16 && g <= 16 && b <= 16);
    assert_eq!(a, 1.0);
}

#[test]
fn the_ego_palette_reads_as_gold() {
    let (r, g, b, _) = Hsba::new(EGO_HUE, EGO_SATURATION, 100.0, 1.0).to_rgba();
    assert_eq!(r, 255);
    assert!(g > b, "gold should sit between red and green, got g={} b={}", g, b);
    assert!((g as i32 - 196).abs() <= 1);
    assert!((b as i32 - 77).abs() <= 1);
}
