//! RGBA colour value with source-over blending

use std::fmt;

/// 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Color {
    /// Opaque colour from a `0xRRGGBB` literal
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
            a: 0xFF,
        }
    }

    /// Colour from a `0xRRGGBBAA` literal
    pub const fn hexa(rgba: u32) -> Self {
        Self {
            r: ((rgba >> 24) & 0xFF) as u8,
            g: ((rgba >> 16) & 0xFF) as u8,
            b: ((rgba >> 8) & 0xFF) as u8,
            a: (rgba & 0xFF) as u8,
        }
    }

    /// Same colour with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Composite `self` over `dst`
    pub fn blend_over(self, dst: Self) -> Self {
        match self.a {
            0xFF => self,
            0 => dst,
            _ => {
                let src_a = f32::from(self.a) / 255.0;
                let dst_a = f32::from(dst.a) / 255.0;
                let out_a = src_a + dst_a * (1.0 - src_a);
                if out_a <= 0.0 {
                    return Self::default();
                }
                let channel = |s: u8, d: u8| {
                    let value = (f32::from(s) * src_a + f32::from(d) * dst_a * (1.0 - src_a))
                        / out_a;
                    value.round().clamp(0.0, 255.0) as u8
                };
                Self {
                    r: channel(self.r, dst.r),
                    g: channel(self.g, dst.g),
                    b: channel(self.b, dst.b),
                    a: (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
                }
            }
        }
    }

    /// Channels in `[r, g, b, a]` order
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Colour from `[r, g, b, a]` channels
    pub const fn from_array(channels: [u8; 4]) -> Self {
        let [r, g, b, a] = channels;
        Self { r, g, b, a }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xFF {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(color: Color) -> Self {
        Self(color.to_array())
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(pixel: image::Rgba<u8>) -> Self {
        Self::from_array(pixel.0)
    }
}
