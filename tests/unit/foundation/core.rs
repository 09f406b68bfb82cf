use super::*;

#[test]
fn resolution_rejects_zero_and_oversized() {
    assert!(Resolution::new(0, 150).is_err());
    assert!(Resolution::new(600, 0).is_err());
    assert!(Resolution::new(70_000, 10).is_err());

    let r = Resolution::new(600, 150).unwrap();
    assert_eq!(r.width_u16(), 600);
    assert_eq!(r.height_u16(), 150);
    assert_eq!(r.byte_len(), 600 * 150 * 4);
}

#[test]
fn display_rect_degenerate_cases() {
    assert!(!DisplayRect::new(0.0, 0.0, 300.0, 75.0).is_degenerate());
    assert!(DisplayRect::new(0.0, 0.0, 0.0, 75.0).is_degenerate());
    assert!(DisplayRect::new(0.0, 0.0, 300.0, -1.0).is_degenerate());
    assert!(DisplayRect::new(0.0, 0.0, f64::NAN, 75.0).is_degenerate());
}

#[test]
fn hex_colors_parse() {
    assert_eq!(Rgba8::from_hex("#000").unwrap(), Rgba8::BLACK);
    assert_eq!(
        Rgba8::from_hex("#ff3366").unwrap(),
        Rgba8 {
            r: 255,
            g: 0x33,
            b: 0x66,
            a: 255
        }
    );
    assert_eq!(Rgba8::from_hex("#00000080").unwrap().a, 0x80);
    assert!(Rgba8::from_hex("000").is_err());
    assert!(Rgba8::from_hex("#12").is_err());
    assert!(Rgba8::from_hex("#zzz").is_err());
}

