use super::*;

#[test]
fn defaults_match_the_claim_form_canvas() {
    let cfg = PadConfig::default();
    assert_eq!(cfg.pen.color, Rgba8::BLACK);
    assert_eq!(cfg.pen.width, 2.0);
    assert_eq!(cfg.pen.cap, LineCap::Round);
    assert_eq!(cfg.pen.join, LineJoin::Round);
    assert_eq!(
        cfg.layout.initial_resolution().unwrap(),
        Resolution::new(600, 150).unwrap()
    );
}

#[test]
fn resolution_tracks_container_and_caps_width() {
    let layout = SurfaceLayout::default();
    assert_eq!(layout.resolution_for(1200.0).unwrap().width, 600);
    assert_eq!(layout.resolution_for(416.0).unwrap().width, 400);
    assert_eq!(layout.resolution_for(316.5).unwrap().width, 300);
    assert_eq!(layout.resolution_for(416.0).unwrap().height, 150);
}

#[test]
fn tiny_or_bogus_containers_clamp_to_one_pixel() {
    let layout = SurfaceLayout::default();
    assert_eq!(layout.resolution_for(4.0).unwrap().width, 1);
    assert_eq!(layout.resolution_for(-50.0).unwrap().width, 1);
    assert_eq!(layout.resolution_for(f64::NAN).unwrap().width, 1);
}

#[test]
fn json_config_fills_missing_keys_with_defaults() {
    let cfg = PadConfig::from_json_str(r##"{ "pen": { "color": "#1a237e", "width": 3 } }"##)
        .unwrap();
    assert_eq!(
        cfg.pen.color,
        Rgba8 {
            r: 0x1a,
            g: 0x23,
            b: 0x7e,
            a: 255
        }
    );
    assert_eq!(cfg.pen.width, 3.0);
    assert_eq!(cfg.pen.cap, LineCap::Round);
    assert_eq!(cfg.layout, SurfaceLayout::default());
}

#[test]
fn json_config_rejects_bad_values() {
    assert!(PadConfig::from_json_str(r#"{ "pen": { "width": 0 } }"#).is_err());
    assert!(PadConfig::from_json_str(r#"{ "layout": { "height": 0 } }"#).is_err());
    assert!(PadConfig::from_json_str(r#"{ "pen": { "color": "black" } }"#).is_err());
}

#[test]
fn pen_color_serializes_as_hex() {
    let json = serde_json::to_string(&PenStyle::default()).unwrap();
    assert!(json.contains("\"#000000ff\""), "{json}");
}
