//! Serializing colors back to CSS strings.
//!
//! The renderer supports hex notation (with an IE `#AARRGGBB` variant),
//! `rgb()`/`rgba()`/`hsl()`/`hsla()` functional notation, and an automatic
//! mode that picks the shortest form preserving the stored value.

use crate::color::Color;
use crate::convert;

// ============================================================================
// Options
// ============================================================================

/// Output notation selector for [`Color::to_css_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringFormat {
    /// Pick the best notation for the stored value: hex when the color is
    /// fully opaque and exactly representable in 8-bit RGB, `rgba()` when
    /// only the alpha prevents that, and `hsl()`/`hsla()` when rounding
    /// to RGB would lose precision.
    #[default]
    Auto,
    /// `rgb(...)`, switching to `rgba(...)` when alpha is below 1.
    Rgb,
    /// Always `rgba(...)`.
    Rgba,
    /// `hsl(...)`, switching to `hsla(...)` when alpha is below 1.
    Hsl,
    /// Always `hsla(...)`.
    Hsla,
    /// `#rrggbb` hex notation, alpha discarded.
    Hex,
    /// Legacy Internet Explorer `#aarrggbb` hex notation.
    IeHex,
}

/// Options for [`Color::to_css_string`].
///
/// # Examples
///
/// ```
/// use matiz::{Color, StringFormat, StringOptions};
///
/// let mut color = Color::parse("rgba(128, 68, 34, 0.7)").unwrap();
/// assert_eq!(
///     color.to_css_string(&StringOptions::default()),
///     "rgba(128, 68, 34, 0.7)"
/// );
/// assert_eq!(
///     color.to_css_string(&StringOptions {
///         compress: true,
///         ..StringOptions::default()
///     }),
///     "rgba(128,68,34,.7)"
/// );
/// assert_eq!(
///     color.to_css_string(&StringOptions {
///         format: StringFormat::Hex,
///         ..StringOptions::default()
///     }),
///     "#804422"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StringOptions {
    /// Output notation, [`StringFormat::Auto`] by default.
    pub format: StringFormat,
    /// Serialize as fully opaque regardless of the stored alpha.
    pub ignore_alpha: bool,
    /// Digits kept after the decimal point for hue, saturation, and
    /// lightness. Zero rounds to whole numbers; negative values round to
    /// coarser magnitudes (tens, hundreds).
    pub round_precision: i32,
    /// Digits kept after the decimal point for the alpha component.
    pub alpha_precision: i32,
    /// Strip optional characters: the space after commas, leading zeros
    /// in fractions, and repeated hex digit pairs.
    pub compress: bool,
}

impl Default for StringOptions {
    fn default() -> Self {
        Self {
            format: StringFormat::Auto,
            ignore_alpha: false,
            round_precision: 2,
            alpha_precision: 2,
            compress: false,
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

impl Color {
    /// Serializes the color according to `options`.
    ///
    /// Reading may convert between spaces, so the receiver is mutable.
    ///
    /// # Examples
    ///
    /// ```
    /// use matiz::{Color, StringOptions};
    ///
    /// let mut color = Color::new();
    /// color.set_hsl(270.0, 50.0, 25.0);
    /// assert_eq!(
    ///     color.to_css_string(&StringOptions::default()),
    ///     "hsl(270, 50%, 25%)"
    /// );
    /// ```
    pub fn to_css_string(&mut self, options: &StringOptions) -> String {
        let alpha = if options.ignore_alpha {
            1.0
        } else {
            convert::round_to(self.get_alpha(), options.alpha_precision)
        };
        let comma = if options.compress { "," } else { ", " };

        let mut format = options.format;
        if format == StringFormat::Auto {
            let (exact, rounded) = self.force_rgb_rounded();
            if options.round_precision > 0 && exact != rounded {
                // Rounding to 8-bit channels would change the value, so a
                // fractional hsl() rendering preserves more of it.
                format = StringFormat::Hsl;
            } else if alpha == 1.0 {
                return self.hex_value(options.compress, false);
            } else {
                let text = format!(
                    "rgba({}{comma}{}{comma}{}{comma}{alpha})",
                    rounded[0], rounded[1], rounded[2]
                );
                return maybe_compress(text, options.compress);
            }
        }

        match format {
            StringFormat::Rgb | StringFormat::Rgba => {
                let [r, g, b] = self.get_rgb(true);
                let text = if alpha == 1.0 && format != StringFormat::Rgba {
                    format!("rgb({r}{comma}{g}{comma}{b})")
                } else {
                    format!("rgba({r}{comma}{g}{comma}{b}{comma}{alpha})")
                };
                maybe_compress(text, options.compress)
            }
            StringFormat::Hsl | StringFormat::Hsla => {
                let [h, s, l] = self
                    .force_hsl_exact()
                    .map(|v| convert::round_to(v, options.round_precision));
                let text = if alpha == 1.0 && format != StringFormat::Hsla {
                    format!("hsl({h}{comma}{s}%{comma}{l}%)")
                } else {
                    format!("hsla({h}{comma}{s}%{comma}{l}%{comma}{alpha})")
                };
                maybe_compress(text, options.compress)
            }
            StringFormat::Hex => self.hex_value(options.compress, false),
            StringFormat::IeHex => self.hex_value(options.compress, true),
            StringFormat::Auto => unreachable!("auto resolved above"),
        }
    }

    /// Shorthand for [`Self::to_css_string`] with [`StringFormat::Hex`].
    pub fn to_hex(&mut self, compress: bool) -> String {
        self.hex_value(compress, false)
    }

    /// Shorthand for [`Self::to_css_string`] with [`StringFormat::IeHex`].
    pub fn to_ie_hex(&mut self, compress: bool) -> String {
        self.hex_value(compress, true)
    }

    /// Shorthand for [`Self::to_css_string`] with [`StringFormat::Rgb`].
    pub fn to_rgb_string(&mut self, compress: bool) -> String {
        self.to_css_string(&StringOptions {
            format: StringFormat::Rgb,
            compress,
            ..StringOptions::default()
        })
    }

    /// Shorthand for [`Self::to_css_string`] with [`StringFormat::Hsl`].
    pub fn to_hsl_string(&mut self, compress: bool) -> String {
        self.to_css_string(&StringOptions {
            format: StringFormat::Hsl,
            compress,
            ..StringOptions::default()
        })
    }

    fn hex_value(&mut self, compress: bool, include_alpha: bool) -> String {
        let (_, rounded) = self.force_rgb_rounded();
        let byte = |v: f64| v.clamp(0.0, 255.0) as u8;

        let mut hex = String::from("#");
        if include_alpha {
            let alpha = convert::round_half_up(self.get_alpha() * 255.0);
            hex.push_str(&format!("{:02x}", byte(alpha)));
        }
        for v in rounded {
            hex.push_str(&format!("{:02x}", byte(v)));
        }
        if compress {
            compress_hex(&hex)
        } else {
            hex
        }
    }
}

/// Collapses `#rrggbb` or `#aarrggbb` to shorthand when every digit pair
/// repeats a single digit. Shorthand input passes through unchanged.
fn compress_hex(hex: &str) -> String {
    let digits = &hex.as_bytes()[1..];
    if digits.len() != 6 && digits.len() != 8 {
        return hex.to_string();
    }
    if !digits.chunks(2).all(|pair| pair[0] == pair[1]) {
        return hex.to_string();
    }
    let mut short = String::from("#");
    short.extend(digits.iter().step_by(2).map(|&b| b as char));
    short
}

/// Strips the leading zero from every fractional component of a
/// functional string, `rgba(0, 0, 0, 0.5)` becoming `rgba(0, 0, 0, .5)`.
fn maybe_compress(text: String, compress: bool) -> String {
    if compress {
        text.replace("(0.", "(.").replace(",0.", ",.")
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_opaque_hex() {
        let mut color = Color::new();
        color.set_rgb(17.0, 170.0, 51.0);
        assert_eq!(color.to_css_string(&StringOptions::default()), "#11aa33");
        assert_eq!(
            color.to_css_string(&StringOptions {
                compress: true,
                ..StringOptions::default()
            }),
            "#1a3"
        );
    }

    #[test]
    fn test_auto_translucent_rgba() {
        let mut color = Color::new();
        color.set_rgba(128.0, 68.0, 34.0, 0.7);
        assert_eq!(
            color.to_css_string(&StringOptions::default()),
            "rgba(128, 68, 34, 0.7)"
        );
        assert_eq!(
            color.to_css_string(&StringOptions {
                compress: true,
                ..StringOptions::default()
            }),
            "rgba(128,68,34,.7)"
        );
    }

    #[test]
    fn test_auto_fractional_falls_to_hsl() {
        let mut color = Color::new();
        color.set_rgb(255.0, 64.2, 17.0);
        let text = color.to_css_string(&StringOptions::default());
        assert!(text.starts_with("hsl("), "got {text}");

        // Whole-number precision keeps the hex path
        assert_eq!(
            color.to_css_string(&StringOptions {
                round_precision: 0,
                ..StringOptions::default()
            }),
            "#ff4011"
        );
    }

    #[test]
    fn test_ignore_alpha() {
        let mut color = Color::new();
        color.set_rgba(17.0, 170.0, 51.0, 0.4);
        assert_eq!(
            color.to_css_string(&StringOptions {
                ignore_alpha: true,
                ..StringOptions::default()
            }),
            "#11aa33"
        );
    }

    #[test]
    fn test_alpha_precision() {
        let mut color = Color::new();
        color.set_rgba(10.0, 20.0, 30.0, 0.12345);
        assert_eq!(
            color.to_css_string(&StringOptions::default()),
            "rgba(10, 20, 30, 0.12)"
        );
        assert_eq!(
            color.to_css_string(&StringOptions {
                alpha_precision: 3,
                ..StringOptions::default()
            }),
            "rgba(10, 20, 30, 0.123)"
        );
        // Rounding alpha up to 1 drops the alpha component entirely
        color.set_alpha(0.999);
        assert_eq!(color.to_css_string(&StringOptions::default()), "#0a141e");
    }

    #[test]
    fn test_rgb_format() {
        let mut color = Color::new();
        color.set_rgb(10.0, 20.0, 30.0);
        assert_eq!(color.to_rgb_string(false), "rgb(10, 20, 30)");
        assert_eq!(color.to_rgb_string(true), "rgb(10,20,30)");
        assert_eq!(
            color.to_css_string(&StringOptions {
                format: StringFormat::Rgba,
                ..StringOptions::default()
            }),
            "rgba(10, 20, 30, 1)"
        );

        color.set_alpha(0.5);
        assert_eq!(
            color.to_css_string(&StringOptions {
                format: StringFormat::Rgb,
                ..StringOptions::default()
            }),
            "rgba(10, 20, 30, 0.5)"
        );
    }

    #[test]
    fn test_hsl_format() {
        let mut color = Color::new();
        color.set_hsl(270.0, 50.0, 25.0);
        assert_eq!(color.to_hsl_string(false), "hsl(270, 50%, 25%)");
        assert_eq!(color.to_hsl_string(true), "hsl(270,50%,25%)");
        assert_eq!(
            color.to_css_string(&StringOptions {
                format: StringFormat::Hsla,
                ..StringOptions::default()
            }),
            "hsla(270, 50%, 25%, 1)"
        );

        color.set_hsla(412.5, 120.0, 50.0, 0.1);
        assert_eq!(
            color.to_css_string(&StringOptions {
                format: StringFormat::Hsl,
                ..StringOptions::default()
            }),
            "hsla(412.5, 120%, 50%, 0.1)"
        );
    }

    #[test]
    fn test_hsl_round_precision() {
        let mut color = Color::new();
        color.set_hsl(10.123, 20.567, 30.449);
        assert_eq!(color.to_hsl_string(false), "hsl(10.12, 20.57%, 30.45%)");
        assert_eq!(
            color.to_css_string(&StringOptions {
                format: StringFormat::Hsl,
                round_precision: 0,
                ..StringOptions::default()
            }),
            "hsl(10, 21%, 30%)"
        );
    }

    #[test]
    fn test_hex_format() {
        let mut color = Color::new();
        color.set_rgb(18.0, 52.0, 246.0);
        assert_eq!(color.to_hex(false), "#1234f6");

        color.set_rgba(17.0, 170.0, 51.0, 0.2);
        assert_eq!(color.to_hex(false), "#11aa33");
        assert_eq!(color.to_hex(true), "#1a3");
    }

    #[test]
    fn test_ie_hex_format() {
        let mut color = Color::new();
        color.set_rgba(255.0, 128.0, 0.0, 0.7);
        assert_eq!(color.to_ie_hex(false), "#b3ff8000");

        color.set_rgb(17.0, 170.0, 51.0);
        assert_eq!(color.to_ie_hex(true), "#f1a3");
    }

    #[test]
    fn test_ie_hex_clamps_alpha() {
        let mut color = Color::new();
        color.set_rgba(0.0, 0.0, 0.0, 0.0);
        assert_eq!(color.to_ie_hex(false), "#00000000");
        color.set_alpha(1.0);
        assert_eq!(color.to_ie_hex(false), "#ff000000");
    }

    #[test]
    fn test_compress_hex() {
        assert_eq!(compress_hex("#11aa33"), "#1a3");
        assert_eq!(compress_hex("#cc11aa33"), "#c1a3");
        assert_eq!(compress_hex("#11aa34"), "#11aa34");
        // Shorthand is a fixed point
        assert_eq!(compress_hex("#1a3"), "#1a3");
    }

    #[test]
    fn test_compress_strips_all_leading_zeros() {
        let mut color = Color::new();
        color.set_hsla(0.5, 0.25, 50.0, 0.75);
        assert_eq!(
            color.to_css_string(&StringOptions {
                format: StringFormat::Hsla,
                compress: true,
                ..StringOptions::default()
            }),
            "hsla(.5,.25%,50%,.75)"
        );
    }

    #[test]
    fn test_fresh_color_defaults() {
        let mut color = Color::new();
        assert_eq!(color.to_hex(false), "#ff0000");
        let mut color = Color::new();
        assert_eq!(color.to_hsl_string(false), "hsl(0, 100%, 50%)");
    }
}
