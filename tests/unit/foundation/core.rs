use super::*;

#[test]
fn parses_hex_with_and_without_hash() {
    assert_eq!(Rgb8::from_hex("#ff0000").unwrap(), Rgb8::new(255, 0, 0));
    assert_eq!(Rgb8::from_hex("00FF7f").unwrap(), Rgb8::new(0, 255, 127));
    assert_eq!(Rgb8::from_hex("  #102030 ").unwrap(), Rgb8::new(16, 32, 48));
}

#[test]
fn rejects_malformed_hex() {
    assert!(Rgb8::from_hex("#fff").is_err());
    assert!(Rgb8::from_hex("#ff00zz").is_err());
    assert!(Rgb8::from_hex("").is_err());
    assert!(Rgb8::from_hex("#ff0000aa").is_err());
}

#[test]
fn hex_roundtrip_is_lowercase() {
    let c = Rgb8::from_hex("#AaBbCc").unwrap();
    assert_eq!(c.to_hex(), "#aabbcc");
    assert_eq!(Rgb8::from_hex(&c.to_hex()).unwrap(), c);
}

#[test]
fn serde_uses_hex_form() {
    let c: Rgb8 = serde_json::from_value(serde_json::json!("#ffd700")).unwrap();
    assert_eq!(c, Rgb8::new(0xff, 0xd7, 0x00));
    assert_eq!(serde_json::to_value(c).unwrap(), serde_json::json!("#ffd700"));
}

#[test]
fn lerp_endpoints_and_midpoint() {
    let a = Rgb8::new(0, 100, 200);
    let b = Rgb8::new(100, 200, 250);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Rgb8::new(50, 150, 225));
    // t is clamped.
    assert_eq!(a.lerp(b, 7.0), b);
}

#[test]
fn placement_validates_range() {
    assert!(Placement::new(0.0, 0.0).is_ok());
    assert!(Placement::new(-0.8, 0.8).is_ok());
    assert!(Placement::new(0.81, 0.0).is_err());
    assert!(Placement::new(0.0, f64::NAN).is_err());
}

#[test]
fn placement_clamped_saturates() {
    let p = Placement::clamped(-5.0, 2.0);
    assert_eq!(p, Placement { x: -0.8, y: 0.8 });
    assert_eq!(Placement::clamped(f64::NAN, 0.5), Placement { x: 0.0, y: 0.5 });
}

#[test]
fn placement_deserializes_from_array_or_object() {
    let p: Placement = serde_json::from_value(serde_json::json!([0.1, -0.2])).unwrap();
    assert_eq!(p, Placement { x: 0.1, y: -0.2 });
    let p: Placement = serde_json::from_value(serde_json::json!({"x": 0.3, "y": 0.4})).unwrap();
    assert_eq!(p, Placement { x: 0.3, y: 0.4 });
    // Out-of-range input is rejected, not silently clamped.
    assert!(serde_json::from_value::<Placement>(serde_json::json!([2.0, 0.0])).is_err());
}

#[test]
fn logo_scale_bounds() {
    assert!(LogoScale::new(1.0).is_ok());
    assert!(LogoScale::new(0.0).is_err());
    assert!(LogoScale::new(1.01).is_err());
    assert_eq!(LogoScale::clamped(0.0).value(), LogoScale::MIN);
    assert_eq!(LogoScale::clamped(3.0).value(), 1.0);
}

#[test]
fn pixel_buffer_starts_opaque_black() {
    let buf = PixelBuffer::new(4, 3);
    assert_eq!(buf.width(), 4);
    assert_eq!(buf.height(), 3);
    assert_eq!(buf.as_bytes().len(), 4 * 3 * 4);
    assert_eq!(buf.pixel(0, 0), [0, 0, 0, 255]);
    assert_eq!(buf.pixel(3, 2), [0, 0, 0, 255]);
}

#[test]
fn pixel_buffer_put_get_roundtrip() {
    let mut buf = PixelBuffer::new(4, 4);
    buf.put_pixel(2, 1, [10, 20, 30, 40]);
    assert_eq!(buf.pixel(2, 1), [10, 20, 30, 40]);
    // Neighbors untouched.
    assert_eq!(buf.pixel(1, 1), [0, 0, 0, 255]);
    assert_eq!(buf.pixel(2, 2), [0, 0, 0, 255]);
}
