use guess_chart::core::{CoordinateMapper, DomainBounds, Viewport};
use proptest::prelude::*;

proptest! {
    #[test]
    fn pixel_round_trip_recovers_domain_values(
        width in 1u32..4_000,
        height in 1u32..4_000,
        x_min in -1_000_000.0f64..1_000_000.0,
        x_span in 1e-3f64..1_000_000.0,
        y_min in -1_000.0f64..1_000.0,
        y_span in 1e-3f64..1_000.0,
        x_factor in -0.5f64..1.5,
        y_factor in -0.5f64..1.5
    ) {
        let bounds = DomainBounds::new(x_min, x_min + x_span, y_min, y_min + y_span)
            .expect("valid bounds");
        let mapper = CoordinateMapper::new(Viewport::new(width, height), bounds)
            .expect("valid mapper");

        let x = x_min + x_span * x_factor;
        let y = y_min + y_span * y_factor;
        let restored_x = mapper.to_domain_x(mapper.to_pixel_x(x));
        let restored_y = mapper.to_domain_y(mapper.to_pixel_y(y));

        let x_tolerance = 1e-9 * (x_span + x.abs() + x_min.abs());
        let y_tolerance = 1e-9 * (y_span + y.abs() + y_min.abs());
        prop_assert!((restored_x - x).abs() <= x_tolerance);
        prop_assert!((restored_y - y).abs() <= y_tolerance);
    }

    #[test]
    fn pixel_mapping_is_monotonic(
        width in 1u32..2_000,
        height in 1u32..2_000,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0
    ) {
        let bounds = DomainBounds::new(0.0, 1.0, 0.0, 1.0).expect("valid bounds");
        let mapper = CoordinateMapper::new(Viewport::new(width, height), bounds)
            .expect("valid mapper");
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        prop_assert!(mapper.to_pixel_x(low) <= mapper.to_pixel_x(high));
        prop_assert!(mapper.to_pixel_y(low) >= mapper.to_pixel_y(high));
    }
}
