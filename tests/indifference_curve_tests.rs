use edgeworth_rs::core::{
    BoxExtent, CobbDouglas, PlotPoint, SamplingConfig, indifference_curve_a, indifference_curve_b,
    sample_grid,
};

fn default_grid() -> Vec<f64> {
    sample_grid(10.0, SamplingConfig::default()).expect("valid grid")
}

#[test]
fn curve_a_satisfies_the_utility_identity() {
    let preference = CobbDouglas::new(0.4).expect("valid share");
    let u = 8.0;
    let grid = default_grid();

    let curve = indifference_curve_a(u, preference, &grid).expect("curve a");
    for point in &curve.points {
        let recovered = preference.utility(point.x, point.y).expect("utility");
        assert!(
            (recovered - u).abs() <= 1e-6,
            "identity violated at x={}: {recovered}",
            point.x
        );
    }
}

#[test]
fn curve_b_satisfies_the_identity_after_unreflecting() {
    let extent = BoxExtent::default();
    let preference = CobbDouglas::new(0.6).expect("valid share");
    let u = 12.0;
    let grid = default_grid();

    let curve = indifference_curve_b(u, preference, &grid, extent).expect("curve b");
    for point in &curve.points {
        let native_x = extent.total_x - point.x;
        let native_y = extent.total_y - point.y;
        let recovered = preference.utility(native_x, native_y).expect("utility");
        assert!(
            (recovered - u).abs() <= 1e-6,
            "identity violated at x'={}: {recovered}",
            point.x
        );
    }
}

#[test]
fn curves_preserve_sample_length_and_ordering() {
    let extent = BoxExtent::default();
    let preference = CobbDouglas::new(0.5).expect("valid share");
    let grid = default_grid();

    let curve_a = indifference_curve_a(10.0, preference, &grid).expect("curve a");
    let curve_b = indifference_curve_b(10.0, preference, &grid, extent).expect("curve b");

    assert_eq!(curve_a.len(), grid.len());
    assert_eq!(curve_b.len(), grid.len());

    for (point, &x) in curve_a.points.iter().zip(&grid) {
        assert_eq!(point.x, x);
    }
    // B's x-values are the exact mirror of the input sequence, in input order.
    for (point, &x) in curve_b.points.iter().zip(&grid) {
        assert_eq!(point.x, extent.total_x - x);
    }
}

#[test]
fn reflection_through_center_is_an_involution() {
    let extent = BoxExtent::default();
    // Half-step coordinates are exactly representable, so the double
    // reflection must round-trip bit-for-bit.
    for (x, y) in [(2.5, 7.5), (0.5, 0.5), (9.5, 1.0), (5.0, 5.0)] {
        let point = PlotPoint::new(x, y);
        let twice = extent.reflect_through_center(extent.reflect_through_center(point));
        assert_eq!(twice, point);
    }
}

#[test]
fn out_of_box_values_are_returned_as_is() {
    // Near the left edge the curve shoots far above the box; that segment is
    // informative content and must survive untouched.
    let preference = CobbDouglas::new(0.5).expect("valid share");
    let curve = indifference_curve_a(10.0, preference, &[0.1, 5.0]).expect("curve a");

    assert!(curve.points[0].y > 10.0);
    assert!(curve.points[0].y.is_finite());
}

#[test]
fn invalid_utility_levels_are_rejected() {
    let preference = CobbDouglas::new(0.5).expect("valid share");
    let grid = default_grid();

    for u in [0.0, -1.0, f64::NAN] {
        assert!(indifference_curve_a(u, preference, &grid).is_err());
        assert!(indifference_curve_b(u, preference, &grid, BoxExtent::default()).is_err());
    }
}

#[test]
fn degenerate_sample_sequences_are_rejected() {
    let preference = CobbDouglas::new(0.5).expect("valid share");

    assert!(indifference_curve_a(10.0, preference, &[]).is_err());
    assert!(indifference_curve_a(10.0, preference, &[0.0, 1.0]).is_err());
    assert!(indifference_curve_a(10.0, preference, &[-1.0, 1.0]).is_err());
    assert!(indifference_curve_a(10.0, preference, &[2.0, 1.0]).is_err());
    assert!(indifference_curve_a(10.0, preference, &[1.0, 1.0]).is_err());
}

#[test]
fn grid_stays_strictly_interior_with_default_margins() {
    let grid = default_grid();

    assert_eq!(grid.len(), 100);
    assert!((grid[0] - 0.1).abs() <= 1e-9);
    assert!((grid[99] - 9.9).abs() <= 1e-9);
    for pair in grid.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}
