//! Display colors for killer regions.
//!
//! The palette is presentation-facing only: region ids and target sums
//! never depend on it, and mutating the palette cannot affect rule logic.
//! Region ids may exceed the palette size — lookups wrap around, so
//! colors intentionally repeat on busy boards.

/// An RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("rgb({r}, {g}, {b})")]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Error removing a color that is not in the palette.
///
/// Unlike bank failures this is a hard error: asking to remove a color
/// that was never added indicates a programming mistake, not external
/// data corruption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PaletteError {
    /// The color to remove is not in the palette.
    #[display("color {_0} is not in the palette")]
    ColorNotFound(#[error(not(source))] Rgb),
}

/// The colors a killer board paints its regions with, in order.
///
/// Starts out with twelve defaults; colors can be added and removed at
/// any time without touching region semantics.
///
/// # Examples
///
/// ```
/// use varidoku_game::{ColorPalette, Rgb};
///
/// let mut palette = ColorPalette::new();
/// assert_eq!(palette.len(), 12);
/// assert_eq!(palette.get(0), Some(Rgb::new(255, 0, 0)));
///
/// palette.add(Rgb::new(12, 13, 21));
/// assert_eq!(palette.get(12), Some(Rgb::new(12, 13, 21)));
///
/// // region ids wrap around the palette
/// assert_eq!(palette.color_for_region(13), palette.get(0).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPalette {
    colors: Vec<Rgb>,
}

impl ColorPalette {
    /// The default region colors.
    pub const DEFAULT_COLORS: [Rgb; 12] = [
        Rgb::new(255, 0, 0),
        Rgb::new(0, 255, 0),
        Rgb::new(254, 225, 162),
        Rgb::new(255, 255, 0),
        Rgb::new(255, 175, 175),
        Rgb::new(255, 0, 255),
        Rgb::new(0, 255, 255),
        Rgb::new(192, 192, 192),
        Rgb::new(255, 255, 255),
        Rgb::new(255, 200, 0),
        Rgb::new(88, 144, 79),
        Rgb::new(255, 101, 121),
    ];

    /// Creates a palette holding the default colors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            colors: Self::DEFAULT_COLORS.to_vec(),
        }
    }

    /// Returns the number of colors in the palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns whether the palette holds no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the color at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    /// Appends a color to the palette.
    pub fn add(&mut self, color: Rgb) {
        self.colors.push(color);
    }

    /// Removes the first occurrence of `color`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ColorNotFound`] when the color is not in
    /// the palette.
    pub fn remove(&mut self, color: Rgb) -> Result<(), PaletteError> {
        let index = self
            .colors
            .iter()
            .position(|&c| c == color)
            .ok_or(PaletteError::ColorNotFound(color))?;
        self.colors.remove(index);
        Ok(())
    }

    /// Returns the color for a region id, wrapping around the palette.
    ///
    /// # Panics
    ///
    /// Panics if the palette is empty.
    #[must_use]
    pub fn color_for_region(&self, region: u32) -> Rgb {
        assert!(!self.colors.is_empty(), "palette has no colors");
        // a palette longer than u32::MAX is not representable in banks
        #[expect(clippy::cast_possible_truncation)]
        let index = region as usize % self.colors.len();
        self.colors[index]
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::new()
    }
}
