//! Parsing colors from hex, functional, and keyword strings.
//!
//! Implements the accepted grammar:
//!
//! - Hex: optional `#` plus 3 (`RGB`), 4 (`ARGB`), 6 (`RRGGBB`), or
//!   8 (`AARRGGBB`) hex digits, case-insensitive.
//! - Functional: `rgb()`, `rgba()`, `hsl()`, `hsla()`, case-insensitive,
//!   arbitrary whitespace around tokens. `rgb()` components are either all
//!   percentages or all integers; `hsl()` hue is a bare number while
//!   saturation and lightness are percentages.
//! - Keywords: CSS color names plus the literal `transparent`.
//!
//! All failures are [`Error`] values; out-of-range numeric components are
//! clamped or wrapped instead of rejected.

use std::str::FromStr;

use crate::color::Color;
use crate::convert;
use crate::error::{Error, Result};
use crate::keywords::{self, KeywordSet};

impl Color {
    /// Parses a hex color string with an optional `#` prefix.
    ///
    /// Shorthand digits are doubled; 4- and 8-digit forms carry the alpha
    /// channel *first* (`#ARGB`, `#AARRGGBB`), scaled from 0–255 to 0–1.
    ///
    /// # Examples
    ///
    /// ```
    /// use matiz::Color;
    ///
    /// let mut color = Color::from_hex("#1a3").unwrap();
    /// assert_eq!(color.get_rgba(false), [17.0, 170.0, 51.0, 1.0]);
    /// ```
    pub fn from_hex(input: &str) -> Result<Self> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(input.to_string()));
        }

        let digits: Vec<u32> = hex
            .bytes()
            .filter_map(|b| (b as char).to_digit(16))
            .collect();

        let double = |d: u32| f64::from(d * 16 + d);
        let pair = |hi: u32, lo: u32| f64::from(hi * 16 + lo);

        let (rgb, alpha) = match digits[..] {
            [r, g, b] => ([double(r), double(g), double(b)], 1.0),
            [a, r, g, b] => ([double(r), double(g), double(b)], double(a) / 255.0),
            [r1, r0, g1, g0, b1, b0] => ([pair(r1, r0), pair(g1, g0), pair(b1, b0)], 1.0),
            [a1, a0, r1, r0, g1, g0, b1, b0] => (
                [pair(r1, r0), pair(g1, g0), pair(b1, b0)],
                pair(a1, a0) / 255.0,
            ),
            _ => return Err(Error::InvalidHex(input.to_string())),
        };

        let mut color = Color::new();
        color.store_rgb(rgb, alpha, true);
        Ok(color)
    }

    /// Parses a color keyword, case-insensitively, against the base or
    /// extended keyword set. The literal `transparent` always maps to
    /// `rgba(0, 0, 0, 0)`.
    pub fn from_keyword(name: &str, extended: bool) -> Result<Self> {
        let lower = name.to_lowercase();
        let mut color = Color::new();

        if lower == "transparent" {
            color.store_rgb([0.0, 0.0, 0.0], 0.0, true);
            return Ok(color);
        }

        let set = if extended {
            KeywordSet::Extended
        } else {
            KeywordSet::Base
        };
        let rgb =
            keywords::lookup(&lower, set).ok_or_else(|| Error::UnknownKeyword(name.to_string()))?;
        color.store_rgb(rgb.map(f64::from), 1.0, true);
        Ok(color)
    }

    /// Parses any supported textual form: hex, keyword, or functional
    /// notation. Strings without `(` are tried as hex first, then as an
    /// extended-set keyword.
    ///
    /// # Examples
    ///
    /// ```
    /// use matiz::Color;
    ///
    /// let mut color = Color::parse("rgb(10%, 20%, 30%)").unwrap();
    /// assert_eq!(color.get_rgba(false), [25.5, 51.0, 76.5, 1.0]);
    ///
    /// assert!(Color::parse("rgb(10%, 20%, 30)").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        if !input.contains('(') {
            return Self::from_hex(input).or_else(|_| Self::from_keyword(input, true));
        }

        let text: String = input.to_lowercase().split_whitespace().collect();
        let Some(text) = text.strip_suffix(')') else {
            return Err(Error::MalformedString(input.to_string()));
        };
        let Some((name, args)) = text.split_once('(') else {
            return Err(Error::MalformedString(input.to_string()));
        };
        if !args
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b',' | b'%' | b'-'))
        {
            return Err(Error::MalformedString(input.to_string()));
        }

        let mut parts: Vec<&str> = args.split(',').collect();
        let mut alpha = 1.0;
        if name.ends_with('a') {
            if parts.len() != 4 {
                return Err(Error::ArgumentCount {
                    expected: 4,
                    found: parts.len(),
                });
            }
            if let Some(raw) = parts.pop() {
                alpha = float_prefix(raw).map_or(0.0, |a| a.clamp(0.0, 1.0));
            }
        } else if parts.len() != 3 {
            return Err(Error::ArgumentCount {
                expected: 3,
                found: parts.len(),
            });
        }

        match name {
            "rgb" | "rgba" => parse_rgb_args(args, &parts, alpha),
            "hsl" | "hsla" => parse_hsl_args(args, &parts, alpha),
            other => Err(Error::UnknownFunction(other.to_string())),
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

/// `rgb()`/`rgba()` argument list: all three components are percentages
/// (scaled by 2.55) or all are integers; mixing the forms fails.
fn parse_rgb_args(args: &str, parts: &[&str], alpha: f64) -> Result<Color> {
    let mut color = Color::new();

    if parts[0].ends_with('%') {
        if !parts[1].ends_with('%') || !parts[2].ends_with('%') {
            return Err(Error::UnitMismatch);
        }
        let scale = |raw: &str| {
            float_prefix(raw).map_or(0.0, |v| {
                if v < 0.0 {
                    0.0
                } else if v > 100.0 {
                    255.0
                } else {
                    v * 2.55
                }
            })
        };
        color.store_rgb([scale(parts[0]), scale(parts[1]), scale(parts[2])], alpha, false);
        return Ok(color);
    }

    // A percentage anywhere else (third component, or the alpha argument)
    // also counts as mixing forms.
    if args.contains('%') {
        return Err(Error::UnitMismatch);
    }

    let channel = |raw: &str| int_prefix(raw).map_or(0.0, |v| v.clamp(0.0, 255.0));
    color.store_rgb(
        [channel(parts[0]), channel(parts[1]), channel(parts[2])],
        alpha,
        true,
    );
    Ok(color)
}

/// `hsl()`/`hsla()` argument list: hue is a bare (possibly fractional)
/// number, saturation and lightness are percentages. The rounded-cache
/// hint is set only when the whole argument text has no decimal point.
fn parse_hsl_args(args: &str, parts: &[&str], alpha: f64) -> Result<Color> {
    if parts[0].contains('%') || !parts[1].ends_with('%') || !parts[2].ends_with('%') {
        return Err(Error::UnitMismatch);
    }

    let h = float_prefix(parts[0]).map_or(0.0, convert::wrap_hue);
    let percent = |raw: &str| float_prefix(raw).map_or(0.0, |v| v.clamp(0.0, 100.0));
    let rounded = !args.contains('.');

    let mut color = Color::new();
    color.store_hsl([h, percent(parts[1]), percent(parts[2])], alpha, rounded);
    Ok(color)
}

/// Parses the longest leading decimal-float prefix of `raw` (optional
/// sign, digits, at most one dot), returning `None` when no digit is
/// present. This is the permissive number scanning the functional grammar
/// requires: `"20%"` reads as 20, `"1.2.3"` as 1.2.
fn float_prefix(raw: &str) -> Option<f64> {
    let bytes = raw.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));
    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }
    raw[..end].parse().ok()
}

/// Integer counterpart of [`float_prefix`]: a decimal point stops the
/// scan, so `"10.5"` reads as 10.
fn int_prefix(raw: &str) -> Option<f64> {
    let bytes = raw.as_bytes();
    let start = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));
    let mut end = start;
    while let Some(b) = bytes.get(end) {
        if !b.is_ascii_digit() {
            break;
        }
        end += 1;
    }
    if end == start {
        return None;
    }
    raw[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_shorthand() {
        let mut color = Color::from_hex("1a3").unwrap();
        assert_eq!(color.get_rgba(false), [17.0, 170.0, 51.0, 1.0]);

        let mut color = Color::from_hex("#1a3").unwrap();
        assert_eq!(color.get_rgba(false), [17.0, 170.0, 51.0, 1.0]);
    }

    #[test]
    fn test_hex_argb_shorthand() {
        let mut color = Color::from_hex("#c1a3").unwrap();
        assert_eq!(color.get_rgba(false), [17.0, 170.0, 51.0, 204.0 / 255.0]);
    }

    #[test]
    fn test_hex_full() {
        let mut color = Color::from_hex("1234F6").unwrap();
        assert_eq!(color.get_rgba(false), [18.0, 52.0, 246.0, 1.0]);

        let mut color = Color::from_hex("#11Aa33").unwrap();
        assert_eq!(color.get_rgba(false), [17.0, 170.0, 51.0, 1.0]);
    }

    #[test]
    fn test_hex_with_alpha() {
        let mut color = Color::from_hex("a51234f6").unwrap();
        assert_eq!(color.get_rgba(false), [18.0, 52.0, 246.0, 165.0 / 255.0]);

        let mut color = Color::from_hex("#a51234f6").unwrap();
        assert_eq!(color.get_rgba(false), [18.0, 52.0, 246.0, 165.0 / 255.0]);
    }

    #[test]
    fn test_hex_invalid() {
        assert!(Color::from_hex("21a3B").is_err()); // 5 digits
        assert!(Color::from_hex("a51234f612").is_err()); // 10 digits
        assert!(Color::from_hex("1az").is_err());
        assert!(Color::from_hex("#12G").is_err());
        assert!(Color::from_hex("12G521").is_err());
        assert!(Color::from_hex("").is_err());
        assert!(Color::from_hex("#").is_err());
    }

    #[test]
    fn test_keyword() {
        let mut color = Color::from_keyword("blue", false).unwrap();
        assert_eq!(color.get_rgba(true), [0.0, 0.0, 255.0, 1.0]);

        let mut color = Color::from_keyword("SkyBlue", true).unwrap();
        assert_eq!(color.get_rgba(true), [135.0, 206.0, 235.0, 1.0]);

        // Extended-only name absent from the base set
        assert_eq!(
            Color::from_keyword("skyblue", false).unwrap_err(),
            Error::UnknownKeyword("skyblue".to_string())
        );
        assert!(Color::from_keyword("not-a-color", true).is_err());
    }

    #[test]
    fn test_keyword_transparent() {
        let mut color = Color::from_keyword("transparent", false).unwrap();
        assert_eq!(color.get_rgba(false), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_parse_rgb() {
        let mut color = Color::parse("RGB(10,20,30)").unwrap();
        assert_eq!(color.get_rgba(false), [10.0, 20.0, 30.0, 1.0]);

        let mut color = Color::parse("rgb  (\t10  ,   20  ,   30  )").unwrap();
        assert_eq!(color.get_rgba(false), [10.0, 20.0, 30.0, 1.0]);

        let mut color = Color::parse("rgba(10, 20, 30, .5)").unwrap();
        assert_eq!(color.get_rgba(false), [10.0, 20.0, 30.0, 0.5]);
    }

    #[test]
    fn test_parse_rgb_percentages() {
        let mut color = Color::parse("rgb(10%, 20%, 30%)").unwrap();
        assert_eq!(color.get_rgba(false), [25.5, 51.0, 76.5, 1.0]);

        // Out-of-range percentages pin to the channel extremes
        let mut color = Color::parse("rgb(-10%, 150%, 50%)").unwrap();
        assert_eq!(color.get_rgb(false), [0.0, 255.0, 127.5]);
    }

    #[test]
    fn test_parse_rgb_clamps_integers() {
        let mut color = Color::parse("rgb(-10, 300, 128)").unwrap();
        assert_eq!(color.get_rgb(false), [0.0, 255.0, 128.0]);
    }

    #[test]
    fn test_parse_hsl() {
        let mut color = Color::parse("hsl(10, 20%, 30%)").unwrap();
        assert_eq!(color.get_hsla(false), [10.0, 20.0, 30.0, 1.0]);

        let mut color = Color::parse("HSLA ( 10 , 20% , 30% , .2 )").unwrap();
        assert_eq!(color.get_hsla(false), [10.0, 20.0, 30.0, 0.2]);

        // Fractional components: rounded cache not seeded
        let mut color = Color::parse("hsl(10.4, 20.7%, 30.1%)").unwrap();
        assert_eq!(color.get_hsl(true), [10.0, 21.0, 30.0]);
    }

    #[test]
    fn test_parse_hsl_wraps_hue() {
        let mut color = Color::parse("hsl(370, 20%, 30%)").unwrap();
        assert_eq!(color.get_hue(false), 10.0);

        let mut color = Color::parse("hsl(-30, 20%, 30%)").unwrap();
        assert_eq!(color.get_hue(false), 330.0);

        // Negative full turns land on 0, inside the [0, 360) range
        let mut color = Color::parse("hsl(-360, 20%, 30%)").unwrap();
        assert_eq!(color.get_hue(false), 0.0);
        assert!(color.get_hue(false) < 360.0);
    }

    #[test]
    fn test_parse_alpha_clamped() {
        let mut color = Color::parse("rgba(10, 20, 30, 4)").unwrap();
        assert_eq!(color.get_alpha(), 1.0);

        let mut color = Color::parse("rgba(10, 20, 30, -1.5)").unwrap();
        assert_eq!(color.get_alpha(), 0.0);
    }

    #[test]
    fn test_parse_hex_and_keyword_fallback() {
        let mut color = Color::parse("#11aa33").unwrap();
        assert_eq!(color.get_rgba(true), [17.0, 170.0, 51.0, 1.0]);

        let mut color = Color::parse("a51234f6").unwrap();
        assert_eq!(color.get_rgba(true), [18.0, 52.0, 246.0, 165.0 / 255.0]);

        let mut color = Color::parse("skyblue").unwrap();
        assert_eq!(color.get_rgba(true), [135.0, 206.0, 235.0, 1.0]);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Color::parse("").is_err());
        assert!(Color::parse("1").is_err());
        // Mixed percentage and raw forms
        assert!(Color::parse("rgb(10%, 20%, 30)").is_err());
        assert!(Color::parse("rgb(10, 20, 30%)").is_err());
        // Percentage placement in hsl()
        assert!(Color::parse("hsl(10%, 20%, 30%)").is_err());
        assert!(Color::parse("hsl(10, 20, 30%)").is_err());
        assert!(Color::parse("hsl(10, 20%, 30)").is_err());
        // Invalid character
        assert!(Color::parse("hsl(10, 20%, 0F%)").is_err());
        // Wrong argument counts
        assert!(Color::parse("rgb(10%, 20%, 30%, 40%)").is_err());
        assert!(Color::parse("rgba(10%, 20%, 30%, 40%, 50%)").is_err());
        assert!(Color::parse("hsl(10%, 20%, 30%, 40%)").is_err());
        assert!(Color::parse("hsla(10%, 20%, 30%, 40%, 50%)").is_err());
        assert!(Color::parse("rgb(10%, 20%)").is_err());
        assert!(Color::parse("rgba(10%, 20%, 30%)").is_err());
        assert!(Color::parse("hsl(10, 20%)").is_err());
        assert!(Color::parse("hsla(10, 20%, 30%)").is_err());
        // Unknown function names and nested notations
        assert!(Color::parse("hwb(10, 20%, 30%)").is_err());
        assert!(Color::parse("rgba(#123, 30%)").is_err());
        assert!(Color::parse("rgba(rgb(10, 20, 30), 30%)").is_err());
        assert!(Color::parse("rgb(@primary, 20, 30)").is_err());
        // Missing closing parenthesis
        assert!(Color::parse("rgb(10, 20, 30").is_err());
    }

    #[test]
    fn test_from_str_trait() {
        let mut color: Color = "hsl(270, 50%, 25%)".parse().unwrap();
        assert_eq!(color.get_hsl(false), [270.0, 50.0, 25.0]);
        assert!("nope".parse::<Color>().is_err());
    }

    #[test]
    fn test_float_prefix() {
        assert_eq!(float_prefix("20%"), Some(20.0));
        assert_eq!(float_prefix("12.5%"), Some(12.5));
        assert_eq!(float_prefix(".5"), Some(0.5));
        assert_eq!(float_prefix("-.5"), Some(-0.5));
        assert_eq!(float_prefix("1.2.3"), Some(1.2));
        assert_eq!(float_prefix("-"), None);
        assert_eq!(float_prefix(""), None);
        assert_eq!(float_prefix("%"), None);
    }

    #[test]
    fn test_int_prefix() {
        assert_eq!(int_prefix("10"), Some(10.0));
        assert_eq!(int_prefix("10.5"), Some(10.0));
        assert_eq!(int_prefix("-5"), Some(-5.0));
        assert_eq!(int_prefix(".5"), None);
        assert_eq!(int_prefix("-"), None);
    }
}
