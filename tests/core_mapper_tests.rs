use approx::assert_abs_diff_eq;
use guess_chart::ChartError;
use guess_chart::core::{CoordinateMapper, DataPoint, DomainBounds, LinearScale, Viewport};

fn foreign_born_mapper() -> CoordinateMapper {
    let bounds = DomainBounds::new(1860.0, 2010.0, 0.0, 0.2).expect("valid bounds");
    CoordinateMapper::new(Viewport::new(570, 340), bounds).expect("valid mapper")
}

#[test]
fn mapper_maps_bounds_onto_plot_edges() {
    let mapper = foreign_born_mapper();

    assert_abs_diff_eq!(mapper.to_pixel_x(1860.0), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(mapper.to_pixel_x(2010.0), 570.0, epsilon = 1e-9);
    assert_abs_diff_eq!(mapper.to_pixel_y(0.0), 340.0, epsilon = 1e-9);
    assert_abs_diff_eq!(mapper.to_pixel_y(0.2), 0.0, epsilon = 1e-9);
}

#[test]
fn mapper_flips_vertical_axis() {
    let mapper = foreign_born_mapper();

    assert!(mapper.to_pixel_y(0.15) < mapper.to_pixel_y(0.05));
    assert_abs_diff_eq!(mapper.to_pixel_y(0.1), 170.0, epsilon = 1e-9);
}

#[test]
fn mapper_round_trips_interior_points() {
    let mapper = foreign_born_mapper();
    let point = DataPoint::new(1937.5, 0.083);

    let (px, py) = mapper.to_pixel(point);
    let restored = mapper.to_domain(px, py);

    assert_abs_diff_eq!(restored.x, point.x, epsilon = 1e-9);
    assert_abs_diff_eq!(restored.y, point.y, epsilon = 1e-12);
}

#[test]
fn mapper_extrapolates_outside_plot() {
    let mapper = foreign_born_mapper();

    assert_abs_diff_eq!(mapper.to_domain_x(-57.0), 1845.0, epsilon = 1e-9);
    assert_abs_diff_eq!(mapper.to_domain_y(680.0), -0.2, epsilon = 1e-12);
}

#[test]
fn mapper_rejects_zero_sized_plot() {
    let bounds = DomainBounds::new(0.0, 1.0, 0.0, 1.0).expect("valid bounds");
    let err = CoordinateMapper::new(Viewport::new(0, 300), bounds)
        .expect_err("zero width must fail");

    assert!(matches!(
        err,
        ChartError::InvalidViewport {
            width: 0,
            height: 300
        }
    ));
}

#[test]
fn bounds_reject_degenerate_and_non_finite_ranges() {
    assert!(matches!(
        DomainBounds::new(5.0, 5.0, 0.0, 1.0),
        Err(ChartError::InvalidData(_))
    ));
    assert!(matches!(
        DomainBounds::new(0.0, 1.0, 2.0, 1.0),
        Err(ChartError::InvalidData(_))
    ));
    assert!(matches!(
        DomainBounds::new(0.0, f64::INFINITY, 0.0, 1.0),
        Err(ChartError::InvalidData(_))
    ));
}

#[test]
fn bounds_from_points_use_reference_extent() {
    let bounds = DomainBounds::from_points(&[
        DataPoint::new(3.0, 0.5),
        DataPoint::new(1.0, 2.5),
        DataPoint::new(2.0, -1.0),
    ])
    .expect("valid extent");

    assert_eq!(bounds, DomainBounds::new(1.0, 3.0, -1.0, 2.5).expect("bounds"));
    assert!(DomainBounds::from_points(&[]).is_err());
}

#[test]
fn bounds_clamp_into_rectangle() {
    let bounds = DomainBounds::new(1860.0, 2010.0, 0.0, 0.2).expect("valid bounds");

    assert_eq!(bounds.clamp_x(3000.0), 2010.0);
    assert_eq!(bounds.clamp_x(-5.0), 1860.0);
    assert_eq!(bounds.clamp_y(5.0), 0.2);
    assert_eq!(bounds.clamp_y(-0.1), 0.0);
    assert!(bounds.contains(1900.0, 0.1));
    assert!(!bounds.contains(1900.0, 0.3));
}

#[test]
fn linear_scale_supports_reversed_range() {
    let scale = LinearScale::new(0.0, 10.0, 100.0, 0.0).expect("valid scale");

    assert_abs_diff_eq!(scale.to_range(2.5), 75.0, epsilon = 1e-12);
    assert_abs_diff_eq!(scale.to_domain(75.0), 2.5, epsilon = 1e-12);
    assert_eq!(scale.to_range(10.0), 0.0);
    assert_eq!(scale.range(), (100.0, 0.0));
}

#[test]
fn linear_scale_rejects_zero_span() {
    assert!(LinearScale::new(1.0, 1.0, 0.0, 10.0).is_err());
    assert!(LinearScale::new(0.0, 1.0, 5.0, 5.0).is_err());
    assert!(LinearScale::new(f64::NAN, 1.0, 0.0, 5.0).is_err());
}
