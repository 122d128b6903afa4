use super::*;

#[test]
fn canonical_side_is_a_power_of_two() {
    assert!(TEXTURE_SIDE.is_power_of_two());

    let tex = synthesize_texture(
        Rgb8::new(0x33, 0x66, 0xcc),
        None,
        Placement::clamped(0.0, 0.0),
        LogoScale::clamped(0.4),
        FabricNoise::Seeded(1),
    );
    assert_eq!(tex.side(), TEXTURE_SIDE);
    assert_eq!(tex.pixels().width(), tex.pixels().height());
}

#[test]
fn sampling_metadata_matches_the_uv_convention() {
    let tex = synthesize_texture(
        Rgb8::new(0x33, 0x66, 0xcc),
        None,
        Placement::clamped(0.0, 0.0),
        LogoScale::clamped(0.4),
        FabricNoise::Seeded(1),
    );
    assert!(!tex.flip_y());
    assert_eq!(tex.wrap_s(), WrapMode::Repeat);
    assert_eq!(tex.wrap_t(), WrapMode::Repeat);
    assert!(tex.generate_mipmaps());
}

#[test]
fn without_a_logo_the_texture_is_pure_fabric() {
    let base = Rgb8::new(0x80, 0x80, 0x80);
    let seed = FabricNoise::Seeded(11);

    let tex = synthesize_texture(base, None, Placement::clamped(0.0, 0.0), LogoScale::clamped(1.0), seed);

    let mut fabric = PixelBuffer::new(TEXTURE_SIDE, TEXTURE_SIDE);
    render_fabric(&mut fabric, base, seed);
    assert_eq!(tex.pixels().as_bytes(), fabric.as_bytes());
}

#[test]
fn from_pixels_enforces_power_of_two_squares() {
    assert!(SynthesizedTexture::from_pixels(PixelBuffer::new(512, 512)).is_ok());
    assert!(SynthesizedTexture::from_pixels(PixelBuffer::new(512, 256)).is_err());
    assert!(SynthesizedTexture::from_pixels(PixelBuffer::new(500, 500)).is_err());
    assert!(SynthesizedTexture::from_pixels(PixelBuffer::new(0, 0)).is_err());
}
