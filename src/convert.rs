//! Color space conversion and rounding math.
//!
//! Stateless functions shared by [`Color`](crate::Color) and the text
//! codec: RGB↔HSL conversion, hue wrapping, precision rounding, and the
//! WCAG relative-luminance / contrast-ratio formulas.
//!
//! Channel conventions: RGB components are 0–255, hue is degrees (wraps at
//! 360), saturation and lightness are percentages 0–100, alpha and
//! luminance are 0–1. Inputs outside the nominal range are clamped or
//! wrapped by the individual functions rather than rejected.

/// RGB value materialized when a color is read before anything was set.
pub(crate) const DEFAULT_RGB: [f64; 3] = [255.0, 0.0, 0.0];

/// HSL value materialized when a color is read before anything was set.
///
/// Deliberately not derived from [`DEFAULT_RGB`]; both defaults denote the
/// same nominal red but are produced independently per requested space.
pub(crate) const DEFAULT_HSL: [f64; 3] = [0.0, 100.0, 50.0];

/// Round half toward positive infinity.
///
/// This is the rounding mode of the text formatting grammar
/// (`round(-2.5) == -2`), which differs from [`f64::round`] for negative
/// halves.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round `value` to `precision` digits after the decimal point.
#[must_use]
pub fn round_to(value: f64, precision: i32) -> f64 {
    let factor = 10f64.powi(precision);
    round_half_up(value * factor) / factor
}

/// Wrap a hue into the `[0, 360)` degree range.
///
/// Wraps the remainder rather than the input, so negative exact multiples
/// of 360 land on 0 and never on 360 itself.
#[must_use]
pub fn wrap_hue(value: f64) -> f64 {
    if value >= 0.0 && value < 360.0 {
        return value;
    }
    let v = value % 360.0;
    let v = if v < 0.0 { v + 360.0 } else { v };
    // Negative remainders within one ulp of zero shift to exactly 360.
    if v >= 360.0 {
        0.0
    } else {
        v
    }
}

/// Round each RGB channel to an integer and clamp to 0–255.
#[must_use]
pub fn round_rgb(rgb: [f64; 3]) -> [f64; 3] {
    [
        round_half_up(rgb[0]).clamp(0.0, 255.0),
        round_half_up(rgb[1]).clamp(0.0, 255.0),
        round_half_up(rgb[2]).clamp(0.0, 255.0),
    ]
}

/// Round each HSL channel to an integer; hue wraps modulo 360 instead of
/// clamping, saturation and lightness clamp to 0–100.
#[must_use]
pub fn round_hsl(hsl: [f64; 3]) -> [f64; 3] {
    [
        wrap_hue(round_half_up(hsl[0])),
        round_half_up(hsl[1]).clamp(0.0, 100.0),
        round_half_up(hsl[2]).clamp(0.0, 100.0),
    ]
}

/// Convert an RGB triple (0–255 per channel) to HSL (hue in degrees,
/// saturation/lightness in percent).
#[must_use]
pub fn rgb_to_hsl(rgb: [f64; 3]) -> [f64; 3] {
    let c = [rgb[0] / 255.0, rgb[1] / 255.0, rgb[2] / 255.0];
    let kmin = c[0].min(c[1]).min(c[2]);
    let kmax = c[0].max(c[1]).max(c[2]);
    let l = (kmax + kmin) / 2.0;

    if kmax == kmin {
        return [0.0, 0.0, l * 100.0];
    }

    let s = if l < 0.5 {
        (kmax - kmin) / (kmax + kmin)
    } else {
        (kmax - kmin) / (2.0 - kmax - kmin)
    };

    let delta = kmax - kmin;
    // When two channels tie for the maximum, the later one decides the
    // hue segment.
    let mut h = 0.0;
    if kmax == c[0] {
        h = (c[1] - c[2]) / delta;
    }
    if kmax == c[1] {
        h = 2.0 + (c[2] - c[0]) / delta;
    }
    if kmax == c[2] {
        h = 4.0 + (c[0] - c[1]) / delta;
    }

    h *= 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    [h, s * 100.0, l * 100.0]
}

/// Convert an HSL triple (hue in degrees, saturation/lightness in percent)
/// to RGB with 0–255 channels.
#[must_use]
pub fn hsl_to_rgb(hsl: [f64; 3]) -> [f64; 3] {
    fn channel(m1: f64, m2: f64, hue: f64) -> f64 {
        let hue = wrap_hue(hue);
        if hue >= 240.0 {
            m1
        } else if hue < 60.0 {
            m1 + (m2 - m1) * hue / 60.0
        } else if hue < 180.0 {
            m2
        } else {
            m1 + (m2 - m1) * (240.0 - hue) / 60.0
        }
    }

    let hue = wrap_hue(hsl[0]);
    let sat = if hsl[1] < 0.0 {
        0.0
    } else if hsl[1] > 100.0 {
        1.0
    } else {
        hsl[1] / 100.0
    };
    let lum = if hsl[2] < 0.0 {
        0.0
    } else if hsl[2] > 100.0 {
        1.0
    } else {
        hsl[2] / 100.0
    };

    let m2 = if lum <= 0.5 {
        lum * (1.0 + sat)
    } else {
        lum + sat * (1.0 - lum)
    };
    let m1 = 2.0 * lum - m2;

    let (c1, c2, c3) = if sat == 0.0 && hue == 0.0 {
        (lum, lum, lum)
    } else {
        (
            channel(m1, m2, hue + 120.0),
            channel(m1, m2, hue),
            channel(m1, m2, hue - 120.0),
        )
    };

    [c1 * 255.0, c2 * 255.0, c3 * 255.0]
}

/// WCAG relative luminance of an RGB triple (0–255 channels), in 0–1.
///
/// Applies the sRGB-to-linear transform per channel and the standard
/// 0.2126/0.7152/0.0722 weights.
#[must_use]
pub fn relative_luminance(rgb: [f64; 3]) -> f64 {
    let mut linear = [0.0; 3];
    for (linear, channel) in linear.iter_mut().zip(rgb) {
        let v = channel / 255.0;
        *linear = if v < 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        };
    }
    linear[0] * 0.2126 + linear[1] * 0.7152 + linear[2] * 0.0722
}

/// WCAG contrast ratio between two relative luminance values, in 1–21.
#[must_use]
pub fn contrast_ratio(lum1: f64, lum2: f64) -> f64 {
    let l1 = lum1 + 0.05;
    let l2 = lum2 + 0.05;
    if l1 > l2 {
        l1 / l2
    } else {
        l2 / l1
    }
}
