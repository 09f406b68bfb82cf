use super::*;

fn res(w: u32, h: u32) -> Resolution {
    Resolution::new(w, h).unwrap()
}

#[test]
fn half_size_display_doubles_coordinates() {
    let rect = DisplayRect::new(0.0, 0.0, 300.0, 75.0);
    let p = map_to_surface(Point::new(150.0, 37.5), Some(rect), res(600, 150));
    assert_eq!(p, Point::new(300.0, 75.0));
}

#[test]
fn rect_offset_is_subtracted_before_scaling() {
    let rect = DisplayRect::new(40.0, 100.0, 300.0, 75.0);
    let p = map_to_surface(Point::new(45.0, 105.0), Some(rect), res(600, 150));
    assert_eq!(p, Point::new(10.0, 10.0));
}

#[test]
fn mapping_is_linear() {
    let rect = DisplayRect::new(8.0, 8.0, 400.0, 237.0);
    let r = res(584, 150);
    let a = map_to_surface(Point::new(20.0, 30.0), Some(rect), r);
    let b = map_to_surface(Point::new(120.0, 90.0), Some(rect), r);
    let mid = map_to_surface(Point::new(70.0, 60.0), Some(rect), r);
    assert!((mid.x - (a.x + b.x) / 2.0).abs() < 1e-9);
    assert!((mid.y - (a.y + b.y) / 2.0).abs() < 1e-9);
}

#[test]
fn unmounted_surface_maps_to_origin() {
    assert_eq!(
        map_to_surface(Point::new(150.0, 37.5), None, res(600, 150)),
        Point::ORIGIN
    );
    let zero = DisplayRect::new(0.0, 0.0, 0.0, 0.0);
    assert_eq!(
        map_to_surface(Point::new(150.0, 37.5), Some(zero), res(600, 150)),
        Point::ORIGIN
    );
}
