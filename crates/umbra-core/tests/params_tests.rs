// Host-side tests for the input model and remapping.

use umbra_core::*;

#[test]
fn slider_specs_match_the_published_ranges() {
    assert_eq!(LIGHT_RATIO.min, 0.0);
    assert_eq!(LIGHT_RATIO.max, 255.0);
    assert_eq!(LIGHT_RATIO.step, 1.0);
    assert_eq!(LIGHT_RATIO.default, 150.0);

    assert_eq!(SHADOW_DENSITY.min, 0.0);
    assert_eq!(SHADOW_DENSITY.max, 50.0);
    assert_eq!(SHADOW_DENSITY.step, 1.0);
    assert_eq!(SHADOW_DENSITY.default, 35.0);

    assert_eq!(INTEGRATION_TORSION.min, -10.0);
    assert_eq!(INTEGRATION_TORSION.max, 10.0);
    assert_eq!(INTEGRATION_TORSION.step, 0.1);
    assert_eq!(INTEGRATION_TORSION.default, 0.0);
}

#[test]
fn defaults_are_inside_their_ranges() {
    for spec in [LIGHT_RATIO, SHADOW_DENSITY, INTEGRATION_TORSION] {
        assert!(spec.min < spec.max);
        assert!(spec.step > 0.0);
        assert!(spec.default >= spec.min && spec.default <= spec.max);
    }
}

#[test]
fn inputs_clamp_to_slider_ranges() {
    let inputs = SketchInputs::new(500.0, -3.0, 11.5);
    assert_eq!(inputs.light_ratio, 255.0);
    assert_eq!(inputs.shadow_density, 0.0);
    assert_eq!(inputs.torsion, 10.0);

    let inputs = SketchInputs::new(-1.0, 60.0, -10.2);
    assert_eq!(inputs.light_ratio, 0.0);
    assert_eq!(inputs.shadow_density, 50.0);
    assert_eq!(inputs.torsion, -10.0);
}

#[test]
fn in_range_inputs_pass_through_unchanged() {
    let inputs = SketchInputs::new(42.0, 13.0, -7.3);
    assert_eq!(inputs.light_ratio, 42.0);
    assert_eq!(inputs.shadow_density, 13.0);
    assert_eq!(inputs.torsion, -7.3);
}

#[test]
fn default_inputs_use_slider_defaults() {
    let inputs = SketchInputs::default();
    assert_eq!(inputs.light_ratio, LIGHT_RATIO.default);
    assert_eq!(inputs.shadow_density, SHADOW_DENSITY.default);
    assert_eq!(inputs.torsion, INTEGRATION_TORSION.default);
}

#[test]
fn remap_hits_endpoints_and_midpoint() {
    assert_eq!(remap(0.0, 0.0, 255.0, 10.0, 100.0), 10.0);
    assert_eq!(remap(255.0, 0.0, 255.0, 10.0, 100.0), 100.0);
    assert!((remap(127.5, 0.0, 255.0, 10.0, 100.0) - 55.0).abs() < 1e-4);
}

#[test]
fn remap_handles_descending_output_ranges() {
    assert_eq!(remap(0.0, 0.0, 10.0, 1.0, 0.0), 1.0);
    assert_eq!(remap(10.0, 0.0, 10.0, 1.0, 0.0), 0.0);
}
