//! The [`Color`] value type and its dual-representation cache.
//!
//! A [`Color`] holds a color in RGB or HSL space with an alpha channel and
//! converts lazily between the two spaces on demand. Key properties:
//!
//! - **One authoritative space**: after any component-level mutation only
//!   one space holds ground truth; the other is dropped and rebuilt on the
//!   next read. Both may coexist right after a conversion read.
//! - **Rounded caches**: each space keeps an optional integer-snapped copy,
//!   valid only until the exact values change.
//! - **Lazy defaults**: reading a never-set color materializes pure red:
//!   `[255, 0, 0]` in RGB, `(0, 100%, 50%)` in HSL, each produced
//!   independently for the requested space.
//!
//! # Examples
//!
//! ```
//! use matiz::Color;
//!
//! let mut color = Color::new();
//! color.set_rgba(255.0, 128.0, 0.0, 0.2);
//! assert_eq!(color.get_hue(true), 30.0);
//! assert_eq!(color.get_saturation(false), 100.0);
//! assert_eq!(color.get_lightness(false), 50.0);
//! ```

use crate::convert;
use crate::error::{Error, Result};

/// Rounded-cache hint accepted by the array setters.
///
/// `Yes` asserts the supplied components are already integers, so the
/// rounded cache can be seeded from them without recomputation. `Values`
/// supplies an independent rounded triple, useful when input precision
/// differs from display precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rounded {
    /// Components are not known to be rounded; the cache stays empty.
    No,
    /// Components are already rounded; seed the cache from them.
    Yes,
    /// Use these values as the rounded cache.
    Values([f64; 3]),
}

/// One color space's channels: the exact values plus an optional
/// integer-snapped copy that is valid only while `exact` is unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Channels {
    exact: [f64; 3],
    rounded: Option<[f64; 3]>,
}

impl Channels {
    fn new(exact: [f64; 3], rounded: bool) -> Self {
        Self {
            exact,
            rounded: rounded.then_some(exact),
        }
    }
}

/// Authoritative-space state. The variant names the space that holds
/// ground truth; the other space, when present, is a derived cache that is
/// dropped whenever the authoritative side mutates.
#[derive(Debug, Clone, Default)]
enum Repr {
    /// Nothing set yet; reads materialize per-space defaults.
    #[default]
    Unset,
    /// RGB is authoritative; `hsl` is a derived cache.
    Rgb {
        rgb: Channels,
        hsl: Option<Channels>,
    },
    /// HSL is authoritative; `rgb` is a derived cache.
    Hsl {
        hsl: Channels,
        rgb: Option<Channels>,
    },
}

/// A mutable color value with lazy RGB↔HSL conversion.
///
/// Setters return `&mut Self` for chaining; getters return fresh copies,
/// never shared references into the caches. Getters take `&mut self`
/// because a read may convert between spaces and memoize the result.
///
/// # Examples
///
/// ```
/// use matiz::Color;
///
/// let mut color = Color::new();
/// color.set_rgb(17.0, 170.0, 51.0).set_alpha(204.0 / 255.0);
/// assert_eq!(color.to_ie_hex(true), "#c1a3");
/// ```
#[derive(Debug)]
pub struct Color {
    repr: Repr,
    alpha: f64,
    luminance: Option<f64>,
}

impl Default for Color {
    fn default() -> Self {
        Self {
            repr: Repr::Unset,
            alpha: 1.0,
            luminance: None,
        }
    }
}

impl Clone for Color {
    /// Copies the color value, not the full cache state: whichever space's
    /// channels are available (RGB preferred) carry over with their rounded
    /// cache; the derived space and memoized luminance are rebuilt on
    /// demand. Alpha is carried only when below 1.
    fn clone(&self) -> Self {
        let mut color = Color::new();
        match &self.repr {
            Repr::Unset => {}
            Repr::Rgb { rgb, .. }
            | Repr::Hsl {
                rgb: Some(rgb), ..
            } => {
                color.repr = Repr::Rgb {
                    rgb: *rgb,
                    hsl: None,
                };
            }
            Repr::Hsl { hsl, rgb: None } => {
                color.repr = Repr::Hsl {
                    hsl: *hsl,
                    rgb: None,
                };
            }
        }
        if self.alpha < 1.0 {
            color.alpha = self.alpha;
        }
        color
    }
}

// ============================================================================
// Constructors and setters
// ============================================================================

impl Color {
    /// Creates an empty color: no space set, alpha 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the color in RGB space (0–255 channels), resetting alpha to 1.
    pub fn set_rgb(&mut self, red: f64, green: f64, blue: f64) -> &mut Self {
        self.store_rgb([red, green, blue], 1.0, false);
        self
    }

    /// Sets the color in RGB space with an alpha channel (0–1).
    pub fn set_rgba(&mut self, red: f64, green: f64, blue: f64, alpha: f64) -> &mut Self {
        self.store_rgb([red, green, blue], alpha, false);
        self
    }

    /// Sets the color from an RGB slice of 3 (alpha resets to 1) or 4
    /// components, with a rounded-cache hint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentCount`] for any other slice length.
    pub fn set_rgb_array(&mut self, components: &[f64], rounded: Rounded) -> Result<&mut Self> {
        let (rgb, alpha) = split_components(components)?;
        match rounded {
            Rounded::No => self.store_rgb(rgb, alpha, false),
            Rounded::Yes => self.store_rgb(rgb, alpha, true),
            Rounded::Values(values) => {
                self.store_rgb(rgb, alpha, false);
                if let Repr::Rgb { rgb, .. } = &mut self.repr {
                    rgb.rounded = Some(values);
                }
            }
        }
        Ok(self)
    }

    /// Sets the color in HSL space (hue in degrees, saturation/lightness in
    /// percent), resetting alpha to 1.
    pub fn set_hsl(&mut self, hue: f64, saturation: f64, lightness: f64) -> &mut Self {
        self.store_hsl([hue, saturation, lightness], 1.0, false);
        self
    }

    /// Sets the color in HSL space with an alpha channel (0–1).
    pub fn set_hsla(
        &mut self,
        hue: f64,
        saturation: f64,
        lightness: f64,
        alpha: f64,
    ) -> &mut Self {
        self.store_hsl([hue, saturation, lightness], alpha, false);
        self
    }

    /// Sets the color from an HSL slice of 3 or 4 components, with a
    /// rounded-cache hint. Counterpart of [`Color::set_rgb_array`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentCount`] for any other slice length.
    pub fn set_hsl_array(&mut self, components: &[f64], rounded: Rounded) -> Result<&mut Self> {
        let (hsl, alpha) = split_components(components)?;
        match rounded {
            Rounded::No => self.store_hsl(hsl, alpha, false),
            Rounded::Yes => self.store_hsl(hsl, alpha, true),
            Rounded::Values(values) => {
                self.store_hsl(hsl, alpha, false);
                if let Repr::Hsl { hsl, .. } = &mut self.repr {
                    hsl.rounded = Some(values);
                }
            }
        }
        Ok(self)
    }

    /// Sets the alpha channel (0–1). No other cache is touched.
    pub fn set_alpha(&mut self, alpha: f64) -> &mut Self {
        self.alpha = alpha;
        self
    }

    /// Sets the red component (0–255). Converts to RGB first if needed.
    pub fn set_red(&mut self, value: f64, rounded: bool) -> &mut Self {
        self.set_rgb_component(0, value, rounded);
        self
    }

    /// Sets the green component (0–255). Converts to RGB first if needed.
    pub fn set_green(&mut self, value: f64, rounded: bool) -> &mut Self {
        self.set_rgb_component(1, value, rounded);
        self
    }

    /// Sets the blue component (0–255). Converts to RGB first if needed.
    pub fn set_blue(&mut self, value: f64, rounded: bool) -> &mut Self {
        self.set_rgb_component(2, value, rounded);
        self
    }

    /// Sets the hue (degrees). Converts to HSL first if needed.
    pub fn set_hue(&mut self, value: f64, rounded: bool) -> &mut Self {
        self.set_hsl_component(0, value, rounded);
        self
    }

    /// Sets the saturation (percent). Converts to HSL first if needed.
    pub fn set_saturation(&mut self, value: f64, rounded: bool) -> &mut Self {
        self.set_hsl_component(1, value, rounded);
        self
    }

    /// Sets the lightness (percent). Converts to HSL first if needed.
    pub fn set_lightness(&mut self, value: f64, rounded: bool) -> &mut Self {
        self.set_hsl_component(2, value, rounded);
        self
    }
}

// ============================================================================
// Getters
// ============================================================================

impl Color {
    /// Returns the RGB triple, converting from HSL (or materializing the
    /// red default) if RGB is absent. With `round`, returns the
    /// integer-snapped triple, computing and caching it on first use.
    pub fn get_rgb(&mut self, round: bool) -> [f64; 3] {
        let channels = self.force_rgb();
        if round {
            *channels
                .rounded
                .get_or_insert_with(|| convert::round_rgb(channels.exact))
        } else {
            channels.exact
        }
    }

    /// Returns the RGB triple plus alpha.
    pub fn get_rgba(&mut self, round: bool) -> [f64; 4] {
        let [r, g, b] = self.get_rgb(round);
        [r, g, b, self.alpha]
    }

    /// Returns the HSL triple, converting from RGB (or materializing the
    /// default) if HSL is absent. With `round`, hue wraps modulo 360 and
    /// saturation/lightness clamp to 0–100 after integer rounding.
    pub fn get_hsl(&mut self, round: bool) -> [f64; 3] {
        let channels = self.force_hsl();
        if round {
            *channels
                .rounded
                .get_or_insert_with(|| convert::round_hsl(channels.exact))
        } else {
            channels.exact
        }
    }

    /// Returns the HSL triple plus alpha.
    pub fn get_hsla(&mut self, round: bool) -> [f64; 4] {
        let [h, s, l] = self.get_hsl(round);
        [h, s, l, self.alpha]
    }

    /// Returns the alpha channel (0–1).
    #[must_use]
    pub fn get_alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the red component (0–255).
    pub fn get_red(&mut self, round: bool) -> f64 {
        self.get_rgb(round)[0]
    }

    /// Returns the green component (0–255).
    pub fn get_green(&mut self, round: bool) -> f64 {
        self.get_rgb(round)[1]
    }

    /// Returns the blue component (0–255).
    pub fn get_blue(&mut self, round: bool) -> f64 {
        self.get_rgb(round)[2]
    }

    /// Returns the hue in degrees.
    pub fn get_hue(&mut self, round: bool) -> f64 {
        self.get_hsl(round)[0]
    }

    /// Returns the saturation in percent.
    pub fn get_saturation(&mut self, round: bool) -> f64 {
        self.get_hsl(round)[1]
    }

    /// Returns the lightness in percent.
    pub fn get_lightness(&mut self, round: bool) -> f64 {
        self.get_hsl(round)[2]
    }

    /// Returns the WCAG relative luminance (0–1), memoized until the color
    /// changes.
    pub fn get_luminance(&mut self) -> f64 {
        if let Some(luminance) = self.luminance {
            return luminance;
        }
        let rgb = self.force_rgb().exact;
        let luminance = convert::relative_luminance(rgb);
        self.luminance = Some(luminance);
        luminance
    }

    /// Returns the WCAG contrast ratio against another color (1–21).
    ///
    /// The other color is read without warming its caches; use
    /// [`Color::get_contrast_with_luminance`] when the luminance is already
    /// known.
    pub fn get_contrast(&mut self, other: &Color) -> f64 {
        let other_luminance = other.peek_luminance();
        self.get_contrast_with_luminance(other_luminance)
    }

    /// Returns the WCAG contrast ratio against a precomputed relative
    /// luminance value.
    pub fn get_contrast_with_luminance(&mut self, luminance: f64) -> f64 {
        convert::contrast_ratio(self.get_luminance(), luminance)
    }
}

// ============================================================================
// Mixing and maintenance
// ============================================================================

impl Color {
    /// Mixes another color into this one by linear interpolation in
    /// RGB+alpha space. `weight` is the percentage of `other` in the
    /// result: `<= 0` leaves the color unchanged, `>= 100` replaces it
    /// with an exact copy of `other`'s RGBA.
    pub fn mix(&mut self, other: &Color, weight: f64) -> &mut Self {
        if weight <= 0.0 {
            return self;
        }

        let [or, og, ob, oa] = other.peek_rgba();
        if weight >= 100.0 {
            self.reset();
            self.store_rgb([or, og, ob], oa, false);
            return self;
        }

        let rgb = self.force_rgb().exact;
        let mix2 = weight / 100.0;
        let mix1 = 1.0 - mix2;

        let alpha = self.alpha * mix1 + oa * mix2;
        self.store_rgb(
            [
                rgb[0] * mix1 + or * mix2,
                rgb[1] * mix1 + og * mix2,
                rgb[2] * mix1 + ob * mix2,
            ],
            alpha,
            false,
        );
        self
    }

    /// Clears both spaces and the luminance cache; alpha resets to 1.
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }

    /// Clamps every present value into its nominal range: RGB channels to
    /// 0–255, hue wrapped modulo 360, saturation/lightness to 0–100, alpha
    /// to 0–1. Absent spaces are not converted; luminance is invalidated.
    pub fn normalize(&mut self) -> &mut Self {
        match &mut self.repr {
            Repr::Unset => {}
            Repr::Rgb { rgb, hsl } => {
                normalize_rgb_channels(rgb);
                if let Some(hsl) = hsl {
                    normalize_hsl_channels(hsl);
                }
            }
            Repr::Hsl { hsl, rgb } => {
                normalize_hsl_channels(hsl);
                if let Some(rgb) = rgb {
                    normalize_rgb_channels(rgb);
                }
            }
        }
        self.alpha = self.alpha.clamp(0.0, 1.0);
        self.luminance = None;
        self
    }
}

// ============================================================================
// Internal cache management
// ============================================================================

impl Color {
    /// Replaces the color with an authoritative RGB value, invalidating
    /// HSL and luminance.
    pub(crate) fn store_rgb(&mut self, rgb: [f64; 3], alpha: f64, rounded: bool) {
        self.repr = Repr::Rgb {
            rgb: Channels::new(rgb, rounded),
            hsl: None,
        };
        self.alpha = alpha;
        self.luminance = None;
    }

    /// Replaces the color with an authoritative HSL value, invalidating
    /// RGB and luminance.
    pub(crate) fn store_hsl(&mut self, hsl: [f64; 3], alpha: f64, rounded: bool) {
        self.repr = Repr::Hsl {
            hsl: Channels::new(hsl, rounded),
            rgb: None,
        };
        self.alpha = alpha;
        self.luminance = None;
    }

    /// Materializes RGB channels without disturbing which space is
    /// authoritative: converts from HSL into the derived slot, or installs
    /// the red default on a fresh color.
    fn force_rgb(&mut self) -> &mut Channels {
        match &mut self.repr {
            Repr::Unset => {
                self.repr = Repr::Rgb {
                    rgb: Channels::new(convert::DEFAULT_RGB, false),
                    hsl: None,
                };
            }
            Repr::Hsl { hsl, rgb } if rgb.is_none() => {
                *rgb = Some(Channels::new(convert::hsl_to_rgb(hsl.exact), false));
            }
            _ => {}
        }
        match &mut self.repr {
            Repr::Rgb { rgb, .. } | Repr::Hsl { rgb: Some(rgb), .. } => rgb,
            _ => unreachable!("rgb channels were just materialized"),
        }
    }

    /// Counterpart of [`Color::force_rgb`] for the HSL side.
    fn force_hsl(&mut self) -> &mut Channels {
        match &mut self.repr {
            Repr::Unset => {
                self.repr = Repr::Hsl {
                    hsl: Channels::new(convert::DEFAULT_HSL, false),
                    rgb: None,
                };
            }
            Repr::Rgb { rgb, hsl } if hsl.is_none() => {
                *hsl = Some(Channels::new(convert::rgb_to_hsl(rgb.exact), false));
            }
            _ => {}
        }
        match &mut self.repr {
            Repr::Hsl { hsl, .. } | Repr::Rgb { hsl: Some(hsl), .. } => hsl,
            _ => unreachable!("hsl channels were just materialized"),
        }
    }

    /// Forced RGB exact + rounded pair for the formatter.
    pub(crate) fn force_rgb_rounded(&mut self) -> ([f64; 3], [f64; 3]) {
        let channels = self.force_rgb();
        let rounded = *channels
            .rounded
            .get_or_insert_with(|| convert::round_rgb(channels.exact));
        (channels.exact, rounded)
    }

    /// Forced exact HSL triple for the formatter.
    pub(crate) fn force_hsl_exact(&mut self) -> [f64; 3] {
        self.force_hsl().exact
    }

    fn set_rgb_component(&mut self, index: usize, value: f64, rounded: bool) {
        self.force_rgb();
        // Promote the RGB channels (authoritative or derived) and drop HSL.
        let mut channels = match std::mem::take(&mut self.repr) {
            Repr::Rgb { rgb, .. } | Repr::Hsl { rgb: Some(rgb), .. } => rgb,
            _ => unreachable!("rgb channels were just materialized"),
        };
        channels.exact[index] = value;
        update_rounded_component(&mut channels, index, value, rounded);
        self.repr = Repr::Rgb {
            rgb: channels,
            hsl: None,
        };
        self.luminance = None;
    }

    fn set_hsl_component(&mut self, index: usize, value: f64, rounded: bool) {
        self.force_hsl();
        let mut channels = match std::mem::take(&mut self.repr) {
            Repr::Hsl { hsl, .. } | Repr::Rgb { hsl: Some(hsl), .. } => hsl,
            _ => unreachable!("hsl channels were just materialized"),
        };
        channels.exact[index] = value;
        update_rounded_component(&mut channels, index, value, rounded);
        self.repr = Repr::Hsl {
            hsl: channels,
            rgb: None,
        };
        self.luminance = None;
    }

    /// Current RGB triple without touching any cache.
    pub(crate) fn peek_rgb(&self) -> [f64; 3] {
        match &self.repr {
            Repr::Unset => convert::DEFAULT_RGB,
            Repr::Rgb { rgb, .. } | Repr::Hsl { rgb: Some(rgb), .. } => rgb.exact,
            Repr::Hsl { hsl, rgb: None } => convert::hsl_to_rgb(hsl.exact),
        }
    }

    /// Current RGBA without touching any cache.
    pub(crate) fn peek_rgba(&self) -> [f64; 4] {
        let [r, g, b] = self.peek_rgb();
        [r, g, b, self.alpha]
    }

    /// Current relative luminance without touching any cache.
    pub(crate) fn peek_luminance(&self) -> f64 {
        self.luminance
            .unwrap_or_else(|| convert::relative_luminance(self.peek_rgb()))
    }
}

/// Splits a 3- or 4-element component slice into channels and alpha
/// (missing alpha defaults to 1).
fn split_components(components: &[f64]) -> Result<([f64; 3], f64)> {
    match *components {
        [a, b, c] => Ok(([a, b, c], 1.0)),
        [a, b, c, alpha] => Ok(([a, b, c], alpha)),
        _ => Err(Error::ComponentCount(components.len())),
    }
}

/// Keeps the rounded cache coherent after a single-component write: the
/// cache survives only if the new value is itself integral (or asserted
/// rounded by the caller).
fn update_rounded_component(channels: &mut Channels, index: usize, value: f64, rounded: bool) {
    if channels.rounded.is_some() {
        if rounded || value == value.trunc() {
            if let Some(cache) = channels.rounded.as_mut() {
                cache[index] = value;
            }
        } else {
            channels.rounded = None;
        }
    }
}

fn normalize_rgb_channels(channels: &mut Channels) {
    for value in &mut channels.exact {
        *value = value.clamp(0.0, 255.0);
    }
    if let Some(rounded) = channels.rounded.as_mut() {
        for value in rounded {
            *value = value.clamp(0.0, 255.0);
        }
    }
}

fn normalize_hsl_channels(channels: &mut Channels) {
    let wrap_and_clamp = |hsl: &mut [f64; 3]| {
        hsl[0] = convert::wrap_hue(hsl[0]);
        hsl[1] = hsl[1].clamp(0.0, 100.0);
        hsl[2] = hsl[2].clamp(0.0, 100.0);
    };
    wrap_and_clamp(&mut channels.exact);
    if let Some(rounded) = channels.rounded.as_mut() {
        wrap_and_clamp(rounded);
    }
}
