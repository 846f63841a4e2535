//! Unit tests for the value parsers.
//! Pure string-to-value checks, no option table involved.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use crate::config::{
    error::ValueError,
    values::{Bounds, Color, Gaps, Gradient, Vec2, parse_bool, parse_color, parse_float, parse_int},
};

#[test]
fn bool_accepts_all_spellings() {
    for raw in ["true", "YES", "On", "1", " true "] {
        assert_eq!(parse_bool(raw), Ok(true), "{raw}");
    }
    for raw in ["false", "no", "OFF", "0"] {
        assert_eq!(parse_bool(raw), Ok(false), "{raw}");
    }
}

#[test]
fn bool_rejects_other_text() {
    assert!(matches!(parse_bool("maybe"), Err(ValueError::Parse { .. })));
    assert!(matches!(parse_bool("2"), Err(ValueError::Parse { .. })));
}

#[test]
fn int_accepts_signs() {
    assert_eq!(parse_int("42"), Ok(42));
    assert_eq!(parse_int("-7"), Ok(-7));
    assert_eq!(parse_int("+3"), Ok(3));
    assert!(parse_int("4.5").is_err());
    assert!(parse_int("").is_err());
}

#[test]
fn float_rejects_non_finite() {
    assert_eq!(parse_float("0.25"), Ok(0.25));
    assert_eq!(parse_float("-1"), Ok(-1.0));
    assert!(parse_float("nan").is_err());
    assert!(parse_float("inf").is_err());
    assert!(parse_float("abc").is_err());
}

#[test]
fn bounds_clamp_to_nearest_edge() {
    let bounds = Bounds::between(0.0_f32, 1.0);

    assert_eq!(bounds.clamp(0.5), (0.5, false));
    assert_eq!(bounds.clamp(-0.5), (0.0, true));
    assert_eq!(bounds.clamp(3.0), (1.0, true));

    let lower = Bounds::at_least(1_i64);
    assert_eq!(lower.clamp(i64::MAX), (i64::MAX, false));
    assert_eq!(lower.clamp(0), (1, true));
    assert!(!lower.contains(-4));
}

#[test]
fn bounds_display() {
    assert_eq!(Bounds::between(1, 4).to_string(), "[1, 4]");
    assert_eq!(Bounds::at_least(0).to_string(), ">= 0");
}

#[test]
fn color_with_alpha() {
    assert_eq!(Color::parse("ff0000ff"), Ok(Color::rgba(255, 0, 0, 255)));
    assert_eq!(Color::parse("11223344"), Ok(Color::rgba(0x11, 0x22, 0x33, 0x44)));
}

#[test]
fn color_alpha_defaults_to_opaque() {
    assert_eq!(Color::parse("ff0000"), Ok(Color::rgba(255, 0, 0, 255)));
    assert_eq!(Color::parse("#00FF00"), Ok(Color::rgba(0, 255, 0, 255)));
}

#[test]
fn color_functional_and_legacy_forms() {
    assert_eq!(Color::parse("rgb(336699)"), Ok(Color::rgba(0x33, 0x66, 0x99, 255)));
    assert_eq!(
        Color::parse("rgba(33669980)"),
        Ok(Color::rgba(0x33, 0x66, 0x99, 0x80))
    );
    assert_eq!(Color::parse("0xee1a1a1a"), Ok(Color::rgba(0x1a, 0x1a, 0x1a, 0xee)));
}

#[test]
fn color_wrong_digit_count_fails() {
    for raw in ["fff", "ff00000", "ff0000ff00", "rgb(ff0000ff)", "0xff0000", "zz0000"] {
        assert!(
            matches!(Color::parse(raw), Err(ValueError::Parse { .. })),
            "{raw} should fail"
        );
    }
}

#[test]
fn color_display_is_rgba_hex() {
    assert_eq!(Color::rgba(255, 0, 16, 128).to_string(), "rgba(ff001080)");
}

#[test]
fn single_color_option_rejects_gradients() {
    assert_eq!(parse_color("ff0000"), Ok(Color::rgba(255, 0, 0, 255)));
    assert!(parse_color("ff0000 00ff00").is_err());
    assert!(parse_color("ff0000 45deg").is_err());
    assert!(parse_color("ff0000 50%").is_err());
}

#[test]
fn gradient_two_stops_with_angle() {
    let gradient = Gradient::parse("ff0000 00ff00 45deg").unwrap();

    assert_eq!(gradient.stops.len(), 2);
    assert_eq!(gradient.stops[0].color, Color::rgba(255, 0, 0, 255));
    assert_eq!(gradient.stops[0].position, 0.0);
    assert_eq!(gradient.stops[1].color, Color::rgba(0, 255, 0, 255));
    assert_eq!(gradient.stops[1].position, 1.0);
    assert_eq!(gradient.angle, 45.0);
}

#[test]
fn gradient_angle_keyword_form() {
    let gradient = Gradient::parse("ff0000 00ff00 deg 90").unwrap();
    assert_eq!(gradient.angle, 90.0);
    assert_eq!(gradient.stops.len(), 2);
}

#[test]
fn gradient_single_color_is_solid() {
    let gradient = Gradient::parse("0xff444444").unwrap();

    assert!(gradient.is_solid());
    assert_eq!(gradient, Gradient::from_argb(0xff444444));
    assert_eq!(gradient.angle, 0.0);
}

#[test]
fn gradient_even_distribution() {
    let gradient = Gradient::parse("ff0000 00ff00 0000ff 000000 ffffff").unwrap();
    let positions: Vec<f32> = gradient.stops.iter().map(|s| s.position).collect();

    assert_eq!(positions, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn gradient_explicit_positions() {
    let gradient = Gradient::parse("ff0000 20% 00ff00 0000ff 80%").unwrap();
    let positions: Vec<f32> = gradient.stops.iter().map(|s| s.position).collect();

    assert_eq!(positions, vec![0.2, 0.5, 0.8]);
}

#[test]
fn gradient_positions_are_clamped_and_ordered() {
    let gradient = Gradient::parse("ff0000 150% 00ff00 -10%").unwrap();
    let positions: Vec<f32> = gradient.stops.iter().map(|s| s.position).collect();

    assert_eq!(positions, vec![1.0, 1.0]);
}

#[test]
fn gradient_angle_before_color_fails() {
    assert!(matches!(Gradient::parse("45deg"), Err(ValueError::Parse { .. })));
    assert!(matches!(
        Gradient::parse("45deg ff0000"),
        Err(ValueError::Parse { .. })
    ));
    assert!(Gradient::parse("ff0000 45deg 00ff00").is_err());
}

#[test]
fn gradient_malformed_tokens_fail() {
    assert!(Gradient::parse("").is_err());
    assert!(Gradient::parse("50% ff0000").is_err());
    assert!(Gradient::parse("ff0000 10% 20%").is_err());
    assert!(Gradient::parse("ff00 00ff00").is_err());
    assert!(Gradient::parse("ff0000 00ff00 xdeg").is_err());
}

#[test]
fn gaps_shorthand_expansion() {
    assert_eq!(Gaps::parse("5"), Ok(Gaps::uniform(5)));
    assert_eq!(
        Gaps::parse("5,10"),
        Ok(Gaps {
            top: 5,
            right: 10,
            bottom: 5,
            left: 10
        })
    );
    assert_eq!(
        Gaps::parse("5,10,15,20"),
        Ok(Gaps {
            top: 5,
            right: 10,
            bottom: 15,
            left: 20
        })
    );
    assert_eq!(Gaps::parse("5 10 15 20"), Gaps::parse("5, 10, 15, 20"));
}

#[test]
fn gaps_wrong_count_fails() {
    assert!(matches!(Gaps::parse("1,2,3"), Err(ValueError::Parse { .. })));
    assert!(Gaps::parse("").is_err());
    assert!(Gaps::parse("1,2,3,4,5").is_err());
    assert!(Gaps::parse("1,x").is_err());
}

#[test]
fn gaps_empty_values_fail() {
    for raw in ["5,,10", "5,", ",5", "1, ,2,3", " , "] {
        assert!(matches!(Gaps::parse(raw), Err(ValueError::Parse { .. })), "{raw}");
    }
    assert_eq!(Gaps::parse(" 5 , 10 "), Gaps::parse("5,10"));
}

#[test]
fn gaps_display_round_trips() {
    assert_eq!(Gaps::uniform(20).to_string(), "20");
    let gaps = Gaps::parse("1 2 3 4").unwrap();
    assert_eq!(Gaps::parse(&gaps.to_string()), Ok(gaps));
}

#[test]
fn vec2_parses_pairs() {
    assert_eq!(Vec2::parse("3 -2"), Ok(Vec2 { x: 3.0, y: -2.0 }));
    assert_eq!(Vec2::parse("1.5, 0"), Ok(Vec2 { x: 1.5, y: 0.0 }));
    assert!(Vec2::parse("1").is_err());
    assert!(Vec2::parse("1 2 3").is_err());
}
