//! Display colours for stellar classes.

use super::types::StellarType;

/// Gray used for anything that is not a known class.
pub const UNKNOWN_COLOR: Rgb = Rgb::new(128, 128, 128);

/// Magnitude-to-brightness scale; a magnitude of ~5 maps to full brightness.
const BRIGHTNESS_SCALE: f64 = 100.0;

/// Pogson's ratio: one magnitude step is a 2.512x change in brightness.
const MAGNITUDE_RATIO: f64 = 2.512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl StellarType {
    pub fn color(self) -> Rgb {
        match self {
            StellarType::O => Rgb::new(255, 255, 255),
            StellarType::B => Rgb::new(173, 216, 230),
            StellarType::A => Rgb::new(255, 255, 0),
            StellarType::F => Rgb::new(255, 165, 0),
            StellarType::G => Rgb::new(255, 140, 0),
            StellarType::K => Rgb::new(255, 69, 0),
            StellarType::M => Rgb::new(255, 0, 0),
        }
    }
}

/// Colour for a free-form spectral string (e.g. `"G2V"`), keyed on its first letter.
pub fn color_for_class(class: &str) -> Rgb {
    class
        .chars()
        .next()
        .and_then(StellarType::from_letter)
        .map(StellarType::color)
        .unwrap_or(UNKNOWN_COLOR)
}

/// Dim a colour according to apparent magnitude (brighter stars have lower magnitudes).
pub fn adjust_brightness(color: Rgb, magnitude: f64) -> Rgb {
    let factor = (BRIGHTNESS_SCALE / MAGNITUDE_RATIO.powf(magnitude)).clamp(0.0, 1.0);
    let scale = |c: u8| (f64::from(c) * factor) as u8;
    Rgb::new(scale(color.r), scale(color.g), scale(color.b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_strings_use_first_letter() {
        assert_eq!(color_for_class("K5III"), Rgb::new(255, 69, 0));
        assert_eq!(color_for_class("B"), Rgb::new(173, 216, 230));
        assert_eq!(color_for_class("DA"), UNKNOWN_COLOR);
        assert_eq!(color_for_class(""), UNKNOWN_COLOR);
    }

    #[test]
    fn bright_stars_keep_full_colour() {
        let k = StellarType::K.color();
        assert_eq!(adjust_brightness(k, 0.0), k);
        assert_eq!(adjust_brightness(k, -1.5), k);
    }

    #[test]
    fn faint_stars_are_dimmed_towards_black() {
        let k = StellarType::K.color();
        let dim = adjust_brightness(k, 6.0);
        // 100 / 2.512^6 ~= 0.398
        assert_eq!(dim, Rgb::new(101, 27, 0));
        assert_eq!(adjust_brightness(k, 22.0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(StellarType::B.color().hex(), "#add8e6");
    }
}
