use super::*;

#[test]
fn mul_div255_identity_edges() {
    assert_eq!(mul_div255_u8(0, 255), 0);
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(255, 0), 0);
    // Rounded, not truncated.
    assert_eq!(mul_div255_u8(128, 128), 64);
}

#[test]
fn mul2_div255_stays_in_byte_range_for_overlay_inputs() {
    // Lower overlay branch only sees d < 128.
    assert_eq!(mul2_div255_u16(127, 255), 254);
    assert_eq!(mul2_div255_u16(0, 255), 0);
}

#[test]
fn smoothstep_endpoints_and_midpoint() {
    assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
    assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-12);
    assert!(smoothstep(0.0, 6.0, 1.0) < smoothstep(0.0, 6.0, 5.0));
}
