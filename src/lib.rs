//! # Matiz
//!
//! CSS color value type with RGB/HSL conversion, parsing, formatting, and
//! keyword matching.
//!
//! A [`Color`] holds one authoritative color space at a time (RGB or HSL,
//! plus alpha) and converts to the other space lazily, caching both the
//! exact and the rounded forms until a write invalidates them. On top of
//! that sit a parser and a serializer for the common CSS textual encodings,
//! nearest-keyword matching against the CSS named-color tables, linear
//! color mixing, and WCAG relative luminance and contrast ratios.
//!
//! ## Quick Start
//!
//! ```rust
//! use matiz::{Color, StringOptions};
//!
//! let mut color = Color::parse("#1a3")?;
//! assert_eq!(color.get_rgb(true), [17.0, 170.0, 51.0]);
//!
//! color.set_alpha(0.5);
//! assert_eq!(
//!     color.to_css_string(&StringOptions::default()),
//!     "rgba(17, 170, 51, 0.5)"
//! );
//!
//! let mut navy = Color::parse("rgb(0, 0, 128)")?;
//! assert_eq!(navy.to_keyword(true, true), Some("navy"));
//! # Ok::<(), matiz::Error>(())
//! ```
//!
//! ## Design
//!
//! - Components are `f64` throughout; reads return exact stored values or
//!   display-rounded ones depending on the `round` argument.
//! - Getters take `&mut self` because reading the non-authoritative space
//!   converts and memoizes. Parsing and formatting never lose precision
//!   until explicitly rounded.
//! - Out-of-range numeric input is clamped (channels, alpha) or wrapped
//!   (hue) rather than rejected; only structural errors fail.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod color;
pub mod convert;
pub mod error;
pub mod format;
pub mod keywords;
mod parse;

pub use color::{Color, Rounded};
pub use error::{Error, Result};
pub use format::{StringFormat, StringOptions};
pub use keywords::KeywordSet;

/// Convenience re-exports for glob imports.
pub mod prelude {
    pub use crate::color::{Color, Rounded};
    pub use crate::error::{Error, Result};
    pub use crate::format::{StringFormat, StringOptions};
    pub use crate::keywords::KeywordSet;
}
