//! End-to-end tests through the facade crate

use ecviz::prelude::*;
use ecviz::scene::{modular, real};

#[test]
fn test_real_addition_session() {
    let config = PlotConfig::default();

    // First evaluation with the page defaults
    let mut scene = real::PointAddition {
        a: -1.0,
        b: 1.0,
        p: PointInput::unchanged(AffinePoint::new(1.0, 1.0)),
        q: PointInput::unchanged(AffinePoint::new(-1.0, 1.0)),
    };
    let view = scene.evaluate(&config).unwrap();
    assert_eq!(view.r, Point::new(0.0, -1.0));

    // Dragging P to the right keeps it on the upper branch
    scene.p = PointInput::new(AffinePoint::new(3.0, 1.0), view.p);
    let view = scene.evaluate(&config).unwrap();
    assert_eq!(view.p, AffinePoint::new(3.0, 5.0));
    assert!(view.viewport.contains(&view.p));

    // Changing the curve re-snaps the unchanged points
    scene.a = -2.0;
    scene.p = PointInput::unchanged(view.p);
    scene.q = PointInput::unchanged(view.q);
    let view = scene.evaluate(&config).unwrap();
    let curve = RealCurve::new(-2.0, 1.0).unwrap();
    for p in [view.p, view.q] {
        let residual = p.y * p.y - curve.rhs(p.x);
        assert!(residual.abs() < 1e-3, "{} is off the curve", p);
    }
}

#[test]
fn test_modular_session() {
    let config = PlotConfig::default();
    let mut scene = modular::ScalarMultiplication {
        a: 2,
        b: 3,
        k: 97,
        n: 1,
        p: PointInput::unchanged(AffinePoint::new(3, 6)),
    };

    let view = scene.evaluate(&config).unwrap();
    assert_eq!(view.curve.curve_order, 100);
    assert_eq!(view.q, Point::new(3, 6));
    let order = view.subgroup_order.unwrap();
    assert_eq!(100 % order, 0);

    scene.n = order as i64;
    let view = scene.evaluate(&config).unwrap();
    assert_eq!(view.q, Point::Infinity);
    assert_eq!(view.q_text, ["Inf", "Inf"]);

    // Switching to a composite modulus keeps working but loses the order
    scene.k = 96;
    let view = scene.evaluate(&config).unwrap();
    assert!(!view.curve.prime);
    assert_eq!(view.subgroup_order, None);
}

#[test]
fn test_modular_chord_orientation_is_configurable() {
    let scene = modular::PointAddition {
        a: 0,
        b: 1,
        k: 5,
        p: PointInput::unchanged(AffinePoint::new(0, 1)),
        q: PointInput::unchanged(AffinePoint::new(2, 2)),
    };

    let shallow = scene.evaluate(&PlotConfig::default()).unwrap();
    let steep = scene
        .evaluate(&PlotConfig::default().with_shallow_slopes(false))
        .unwrap();

    // |-2| is not larger than |2|, so both orientations agree here
    assert_eq!(shallow.chord, steep.chord);
    assert_eq!(shallow.r, Point::new(2, -2));
}

#[test]
fn test_views_serialize() {
    let scene = modular::PointAddition {
        a: 0,
        b: 1,
        k: 5,
        p: PointInput::unchanged(AffinePoint::new(0, 1)),
        q: PointInput::unchanged(AffinePoint::new(2, 2)),
    };
    let view = scene.evaluate(&PlotConfig::default()).unwrap();
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["curve"]["curve_order"], 6);
    assert_eq!(json["r"]["Affine"]["x"], 2);
    assert_eq!(json["r_text"][1], "-2");
    assert_eq!(json["chord"][2], "Break");

    let input: modular::PointAddition = serde_json::from_value(serde_json::to_value(scene).unwrap()).unwrap();
    assert_eq!(input, scene);
}

#[test]
fn test_config_from_json() {
    let config: PlotConfig =
        serde_json::from_str(r#"{ "resolution": 64, "prefer_shallow_slopes": false }"#).unwrap();
    assert_eq!(config.resolution, 64);
    assert!(!config.prefer_shallow_slopes);
    assert_eq!(config.rounding_exponent, -5);
    assert!(config.validate().is_ok());
}
