use approx::assert_relative_eq;
use edgeworth_rs::core::CobbDouglas;

#[test]
fn share_must_lie_strictly_inside_unit_interval() {
    for share in [0.0, 1.0, -0.2, 1.3, f64::NAN, f64::INFINITY] {
        assert!(CobbDouglas::new(share).is_err(), "share {share} accepted");
    }

    for share in [0.1, 0.5, 0.9] {
        assert!(CobbDouglas::new(share).is_ok(), "share {share} rejected");
    }
}

#[test]
fn utility_matches_closed_form() {
    let preference = CobbDouglas::new(0.5).expect("valid share");
    let utility = preference.utility(5.0, 20.0).expect("utility");
    assert_relative_eq!(utility, 10.0, max_relative = 1e-12);
}

#[test]
fn utility_rejects_non_positive_bundles() {
    let preference = CobbDouglas::new(0.5).expect("valid share");
    assert!(preference.utility(0.0, 1.0).is_err());
    assert!(preference.utility(1.0, -2.0).is_err());
    assert!(preference.utility(f64::NAN, 1.0).is_err());
}

#[test]
fn y_for_utility_inverts_the_utility_equation() {
    let preference = CobbDouglas::new(0.3).expect("valid share");
    let u = 7.5;
    let x = 2.25;

    let y = preference.y_for_utility(u, x).expect("inverse");
    let recovered = preference.utility(x, y).expect("utility");
    assert_relative_eq!(recovered, u, max_relative = 1e-9);
}

#[test]
fn y_for_utility_default_center_value() {
    // sqrt(5 * y) = 10 solves to y = 20.
    let preference = CobbDouglas::new(0.5).expect("valid share");
    let expected = (10.0 / 5.0_f64.powf(0.5)).powf(1.0 / (1.0 - 0.5));

    let y = preference.y_for_utility(10.0, 5.0).expect("inverse");
    assert!((y - expected).abs() <= 1e-6);
    assert_relative_eq!(y, 20.0, max_relative = 1e-9);
}

#[test]
fn y_for_utility_rejects_invalid_levels() {
    let preference = CobbDouglas::new(0.5).expect("valid share");
    assert!(preference.y_for_utility(0.0, 1.0).is_err());
    assert!(preference.y_for_utility(-3.0, 1.0).is_err());
    assert!(preference.y_for_utility(10.0, 0.0).is_err());
}
