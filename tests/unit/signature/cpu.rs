use super::*;

fn surface(w: u32, h: u32) -> CpuSurface {
    CpuSurface::new(Resolution::new(w, h).unwrap(), PenStyle::default())
}

#[test]
fn new_surface_is_blank() {
    let s = surface(64, 32);
    assert!(s.is_blank());
    assert_eq!(s.raster_premul_rgba8().len(), 64 * 32 * 4);
}

#[test]
fn segment_paints_along_its_path() {
    let mut s = surface(64, 32);
    s.begin_stroke(Point::new(4.0, 16.0));
    s.extend_stroke(Point::new(60.0, 16.0));

    assert!(!s.is_blank());
    assert!(s.alpha_at(32, 16).unwrap() > 0);
    assert_eq!(s.alpha_at(32, 2), Some(0));
}

#[test]
fn begin_stamps_a_dot() {
    let mut s = surface(32, 32);
    s.begin_stroke(Point::new(16.0, 16.0));
    assert!(!s.is_blank());
    assert_eq!(s.alpha_at(2, 2), Some(0));
}

#[test]
fn extend_without_begin_is_a_noop() {
    let mut s = surface(32, 32);
    s.extend_stroke(Point::new(10.0, 10.0));
    assert!(s.is_blank());
}

#[test]
fn clear_wipes_raster_and_forgets_last_point() {
    let mut s = surface(32, 32);
    s.begin_stroke(Point::new(4.0, 4.0));
    s.extend_stroke(Point::new(28.0, 28.0));
    s.clear();
    assert!(s.is_blank());

    s.extend_stroke(Point::new(4.0, 28.0));
    assert!(s.is_blank());
}

#[test]
fn resize_keeps_overlapping_pixels() {
    let mut s = surface(64, 32);
    s.begin_stroke(Point::new(4.0, 16.0));
    s.extend_stroke(Point::new(60.0, 16.0));
    let before = s.alpha_at(10, 16).unwrap();
    assert!(before > 0);

    s.resize(Resolution::new(32, 32).unwrap());
    assert_eq!(s.resolution(), Resolution::new(32, 32).unwrap());
    assert_eq!(s.raster_premul_rgba8().len(), 32 * 32 * 4);
    assert_eq!(s.alpha_at(10, 16), Some(before));
    assert_eq!(s.alpha_at(40, 16), None);
}

#[test]
fn drawing_continues_after_resize() {
    let mut s = surface(32, 32);
    s.begin_stroke(Point::new(2.0, 2.0));
    s.resize(Resolution::new(64, 64).unwrap());
    s.extend_stroke(Point::new(60.0, 60.0));
    assert!(s.alpha_at(40, 40).unwrap() > 0);
}

#[test]
fn export_matches_resolution() {
    let mut s = surface(48, 20);
    s.begin_stroke(Point::new(5.0, 5.0));
    s.extend_stroke(Point::new(40.0, 15.0));
    let img = s.export_image().unwrap().to_rgba8().unwrap();
    assert_eq!(img.dimensions(), (48, 20));
    assert!(img.pixels().any(|p| p.0[3] > 0));
}

#[test]
fn premul_over_composites_opaque_source() {
    let mut dst = vec![10, 20, 30, 255, 0, 0, 0, 0];
    let src = vec![0, 0, 0, 255, 0, 0, 0, 0];
    premul_over_in_place(&mut dst, &src);
    assert_eq!(dst, vec![0, 0, 0, 255, 0, 0, 0, 0]);
}
