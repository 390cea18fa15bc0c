use edgeworth_rs::core::{
    BoxExtent, CobbDouglas, PlotPoint, SamplingConfig, indifference_curve_a, indifference_curve_b,
    sample_grid,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn curve_a_identity_property(
        share in 0.05f64..0.95,
        u in 0.1f64..50.0,
        x_factor in 0.01f64..0.99
    ) {
        let x = x_factor * 10.0;
        let preference = CobbDouglas::new(share).expect("valid share");

        let curve = indifference_curve_a(u, preference, &[x]).expect("curve a");
        let point = curve.points[0];
        let recovered = preference.utility(point.x, point.y).expect("utility");

        prop_assert!((recovered - u).abs() <= 1e-6 * u.max(1.0));
    }

    #[test]
    fn curve_b_identity_property(
        share in 0.05f64..0.95,
        u in 0.1f64..50.0,
        x_factor in 0.01f64..0.99
    ) {
        let extent = BoxExtent::default();
        let x = x_factor * 10.0;
        let preference = CobbDouglas::new(share).expect("valid share");

        let curve = indifference_curve_b(u, preference, &[x], extent).expect("curve b");
        let point = curve.points[0];
        let recovered = preference
            .utility(extent.total_x - point.x, extent.total_y - point.y)
            .expect("utility");

        prop_assert!((recovered - u).abs() <= 1e-6 * u.max(1.0));
    }

    #[test]
    fn reflection_involution_property(
        x in -100.0f64..100.0,
        y in -100.0f64..100.0
    ) {
        let extent = BoxExtent::default();
        let point = PlotPoint::new(x, y);
        let twice = extent.reflect_through_center(extent.reflect_through_center(point));

        prop_assert!((twice.x - point.x).abs() <= 1e-9);
        prop_assert!((twice.y - point.y).abs() <= 1e-9);
    }

    #[test]
    fn half_step_reflection_is_exact(
        kx in 1u32..20,
        ky in 1u32..20
    ) {
        // Half-integer coordinates inside a 10 x 10 box reflect exactly.
        let extent = BoxExtent::default();
        let point = PlotPoint::new(f64::from(kx) * 0.5, f64::from(ky) * 0.5);
        let twice = extent.reflect_through_center(extent.reflect_through_center(point));

        prop_assert_eq!(twice, point);
    }

    #[test]
    fn curve_a_y_decreases_along_the_grid(
        share in 0.1f64..0.9,
        u in 1.0f64..25.0,
        count in 10usize..200
    ) {
        let grid = sample_grid(10.0, SamplingConfig { count, margin_ratio: 0.01 })
            .expect("valid grid");
        let preference = CobbDouglas::new(share).expect("valid share");
        let curve = indifference_curve_a(u, preference, &grid).expect("curve a");

        for pair in curve.points.windows(2) {
            prop_assert!(pair[1].y < pair[0].y);
        }
    }

    #[test]
    fn sample_grid_stays_strictly_interior(
        range_end in 0.5f64..1000.0,
        count in 2usize..500,
        margin_ratio in 0.001f64..0.4
    ) {
        let grid = sample_grid(range_end, SamplingConfig { count, margin_ratio })
            .expect("valid grid");

        prop_assert_eq!(grid.len(), count);
        for &x in &grid {
            prop_assert!(x > 0.0 && x < range_end);
        }
        for pair in grid.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }
}
