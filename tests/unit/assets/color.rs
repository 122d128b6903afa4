use super::*;

#[test]
fn zero_amount_is_identity() {
    for c in [
        Rgb8::new(0, 0, 0),
        Rgb8::new(255, 255, 255),
        Rgb8::new(12, 130, 200),
    ] {
        assert_eq!(adjust_brightness(c, 0.0), c);
    }
}

#[test]
fn positive_amount_lightens_until_saturation() {
    let c = Rgb8::new(100, 150, 200);
    let lighter = adjust_brightness(c, 0.1);
    assert_eq!(lighter, Rgb8::new(126, 176, 226));

    // Monotonic in the amount, per channel.
    let mut prev = c;
    for step in 1..=10 {
        let next = adjust_brightness(c, f64::from(step) * 0.05);
        assert!(next.r >= prev.r && next.g >= prev.g && next.b >= prev.b);
        prev = next;
    }

    assert_eq!(adjust_brightness(c, 10.0), Rgb8::new(255, 255, 255));
}

#[test]
fn negative_amount_darkens_and_clamps() {
    let c = Rgb8::new(30, 128, 250);
    assert_eq!(adjust_brightness(c, -0.1), Rgb8::new(5, 103, 225));
    assert_eq!(adjust_brightness(c, -1.0), Rgb8::new(0, 0, 0));
    assert_eq!(adjust_brightness(c, -1e9), Rgb8::new(0, 0, 0));
}

#[test]
fn any_amount_stays_in_channel_range() {
    let c = Rgb8::new(7, 99, 240);
    for amount in [-5.0, -0.51, -0.2, 0.0, 0.33, 0.77, 2.0, 1e6] {
        let out = adjust_brightness(c, amount);
        // u8 already bounds the channels; what matters is no panic and
        // monotone ordering between darken and lighten.
        assert!(out.r <= 255 && out.g <= 255 && out.b <= 255);
    }
}
