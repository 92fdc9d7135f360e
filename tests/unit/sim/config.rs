use super::*;

#[test]
fn defaults_match_documented_values() {
    let c = Config::default();
    assert_eq!(c.letter(), "a");
    assert_eq!(c.font_size(), 400.0);
    assert_eq!(c.mouse_trail_radius(), 80.0);
    assert_eq!(c.stretch_intensity(), 1.0);
    assert_eq!(c.shrink_intensity(), 0.0);
    assert_eq!(c.stroke_weight(), 10.0);
    assert_eq!(c.selected_colors().indices(), &[0]);
    assert_eq!(c.num_colors(), 1);
    assert_eq!(c.color_animation_mode(), ColorMode::Radial);
    assert_eq!(c.color_animation_speed(), 0.07);
    assert_eq!(c.particle_intensity(), 0.0);
    assert_eq!(c.particle_selected_colors().indices(), &[3]);
    assert_eq!(c.background_color(), DARK_BACKGROUND);
    assert_eq!(c.theme(), Theme::Dark);
    c.validate().unwrap();
}

#[test]
fn json_uses_camel_case_and_fills_missing_fields() {
    let c = Config::from_json_str(
        r##"{ "letter": "G", "strokeWeight": 4, "selectedColors": [1, 2], "backgroundColor": "#102030" }"##,
    )
    .unwrap();
    assert_eq!(c.letter(), "G");
    assert_eq!(c.stroke_weight(), 4.0);
    assert_eq!(c.selected_colors().indices(), &[1, 2]);
    assert_eq!(c.background_color(), Rgba8::opaque(0x10, 0x20, 0x30));
    assert_eq!(c.mouse_trail_radius(), 80.0);

    let json = serde_json::to_value(&c).unwrap();
    assert_eq!(json["strokeWeight"], 4.0);
    assert_eq!(json["backgroundColor"], "#102030");
    assert_eq!(json["colorAnimationMode"], "radial");
    assert_eq!(json["theme"], "dark");
}

#[test]
fn json_rejects_unknown_fields_and_bad_values() {
    assert!(Config::from_json_str(r#"{ "nope": 1 }"#).is_err());
    assert!(Config::from_json_str(r#"{ "strokeWeight": 0 }"#).is_err());
    assert!(Config::from_json_str(r#"{ "mouseTrailRadius": -5 }"#).is_err());
    assert!(Config::from_json_str(r#"{ "selectedColors": [] }"#).is_err());
    assert!(Config::from_json_str(r#"{ "selectedColors": [9] }"#).is_err());
    assert!(Config::from_json_str(r#"{ "letter": "ab" }"#).is_err());
}

#[test]
fn unimplemented_color_modes_are_rejected() {
    let err = Config::from_json_str(r#"{ "colorAnimationMode": "wave" }"#).unwrap_err();
    assert!(err.to_string().contains("not implemented"));

    let mut c = Config::default();
    assert!(c.set_color_animation_mode("gradient").is_err());
    c.set_color_animation_mode("Radial").unwrap();
    assert_eq!(c.color_animation_mode(), ColorMode::Radial);
}

#[test]
fn setters_validate_and_leave_value_untouched_on_error() {
    let mut c = Config::default();
    assert!(c.set_stroke_weight(-1.0).is_err());
    assert_eq!(c.stroke_weight(), 10.0);
    assert!(c.set_mouse_trail_radius(f64::NAN).is_err());
    assert_eq!(c.mouse_trail_radius(), 80.0);
    assert!(c.set_selected_colors(ColorSelection::empty()).is_err());
    assert_eq!(c.num_colors(), 1);
    assert!(c.set_background_color("#12").is_err());

    c.set_shrink_intensity(0.5).unwrap();
    assert_eq!(c.shrink_intensity(), 0.5);
}

#[test]
fn empty_letter_falls_back_to_a() {
    let mut c = Config::default();
    c.set_letter("Q").unwrap();
    assert_eq!(c.letter(), "q");
    c.set_letter("   ").unwrap();
    assert_eq!(c.letter(), "a");
    assert!(c.set_letter("/").is_err());
}

#[test]
fn particle_colors_fall_back_to_stroke_colors() {
    let mut c = Config::default();
    assert_eq!(c.effective_particle_colors().indices(), &[3]);
    c.set_particle_selected_colors(ColorSelection::empty());
    c.set_selected_colors(ColorSelection::new([2, 4]).unwrap())
        .unwrap();
    assert_eq!(c.effective_particle_colors().indices(), &[2, 4]);
}

#[test]
fn theme_decides_background_only_for_theme_defaults() {
    let mut c = Config::default();
    assert_eq!(c.effective_background(), DARK_BACKGROUND);
    c.set_theme(Theme::Light);
    assert_eq!(c.effective_background(), LIGHT_BACKGROUND);

    c.set_background_color("#336699").unwrap();
    assert_eq!(c.effective_background(), Rgba8::opaque(0x33, 0x66, 0x99));

    assert_eq!(Theme::Light.toggled(), Theme::Dark);
}

#[test]
fn reset_restores_defaults() {
    let mut c = Config::default();
    c.set_stroke_weight(2.0).unwrap();
    c.set_particle_intensity(3.0).unwrap();
    c.set_theme(Theme::Light);
    c.reset();
    assert_eq!(c, Config::default());
}

#[test]
fn parse_errors_carry_the_cause_in_their_message() {
    let err = Config::from_json_str(r#"{ "strokeWeight": "thick" }"#).unwrap_err();
    assert!(matches!(err, GlyphwarpError::Validation(_)));
    let msg = err.to_string();
    assert!(msg.contains("parse config JSON"));
    assert!(msg.contains("strokeWeight") || msg.contains("invalid type"));
}
