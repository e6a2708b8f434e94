//! Tests for the RGBA colour type and source-over blending

#[cfg(test)]
mod tests {
    use pixelbobo::palette::Color;

    // Tests hex literals split into channels with opaque alpha
    // Verified by swapping the red and blue shifts
    #[test]
    fn test_hex_channels() {
        let gold = Color::hex(0xFFD700);
        assert_eq!((gold.r, gold.g, gold.b, gold.a), (0xFF, 0xD7, 0x00, 0xFF));
    }

    // Tests eight-digit literals carry their alpha byte
    // Verified by forcing alpha to 0xFF in hexa
    #[test]
    fn test_hexa_channels() {
        let aura = Color::hexa(0xFFD7_0033);
        assert_eq!(aura.to_array(), [0xFF, 0xD7, 0x00, 0x33]);
        assert_eq!(Color::hex(0xFFD700).with_alpha(0x33), aura);
    }

    // Tests opaque sources replace the destination
    // Verified by always blending through the float path
    #[test]
    fn test_opaque_blend_replaces() {
        let src = Color::hex(0x123456);
        assert_eq!(src.blend_over(Color::hex(0xFFFFFF)), src);
    }

    // Tests fully transparent sources leave the destination untouched
    // Verified by returning the source for zero alpha
    #[test]
    fn test_transparent_blend_keeps_destination() {
        let dst = Color::hex(0x654321);
        assert_eq!(Color::hexa(0xFFFF_FF00).blend_over(dst), dst);
    }

    // Tests half-transparent white over black lands mid-grey and opaque
    // Verified by dropping the destination contribution
    #[test]
    fn test_translucent_blend() {
        let result = Color::hexa(0xFFFF_FF80).blend_over(Color::hex(0x000000));
        assert_eq!(result.to_array(), [128, 128, 128, 255]);
    }

    // Tests translucent blends over translucent destinations accumulate alpha
    // Verified by using source alpha as the output alpha
    #[test]
    fn test_translucent_over_translucent() {
        let result = Color::hexa(0xFF00_0080).blend_over(Color::hexa(0x0000_FF80));
        assert!(result.a > 0x80);
        assert!(result.r > result.b);
    }

    // Tests display uses six digits for opaque colours and eight otherwise
    // Verified by always printing the alpha byte
    #[test]
    fn test_display_format() {
        assert_eq!(Color::hex(0xFFD700).to_string(), "#FFD700");
        assert_eq!(Color::hexa(0xB565_D966).to_string(), "#B565D966");
    }

    // Tests conversion into image pixels keeps channel order
    // Verified by reversing the channel array
    #[test]
    fn test_image_pixel_conversion() {
        let color = Color::hexa(0x1020_3040);
        let pixel: image::Rgba<u8> = color.into();
        assert_eq!(pixel.0, [0x10, 0x20, 0x30, 0x40]);
        assert_eq!(Color::from(pixel), color);
    }
}
