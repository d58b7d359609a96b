//! RGBA [`Color`] and the "over" compositing rule used by the console.

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGBA colour, 8 bits per channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque white, the default foreground.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black, the default background.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// All channels zero. Drawing it leaves the existing colour unchanged.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Construct from individual RGBA components.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Construct an opaque colour.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Same colour with a different alpha (builder).
    #[inline]
    pub const fn with_alpha(mut self, a: u8) -> Self {
        self.a = a;
        self
    }

    /// Whether the alpha channel is 255.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Composite `over` on top of `self`.
    ///
    /// Each RGB channel becomes `over * a + self * (1 - a)` with
    /// `a = over.a / 255`, rounded to the nearest integer. The result is
    /// always fully opaque, so layering translucent colours accumulates.
    pub fn blend(self, over: Color) -> Color {
        let a = over.a as f64 / 255.0;
        let mix = |under: u8, top: u8| -> u8 {
            (top as f64 * a + under as f64 * (1.0 - a)).round() as u8
        };
        Color {
            r: mix(self.r, over.r),
            g: mix(self.g, over.g),
            b: mix(self.b, over.b),
            a: 255,
        }
    }

    /// Pack as `0x00RRGGBB`, the softbuffer pixel layout.
    #[inline]
    pub const fn to_pixel(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}
