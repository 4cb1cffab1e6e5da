//! Color model and conversion engine.
//!
//! The [`Color`] value type stores one canonical representation — a packed
//! unsigned 32-bit integer — plus a flag recording whether an alpha channel is
//! semantically present. It can be constructed from, and rendered to, five
//! representations: packed integer ("decimal"), hexadecimal string, RGB, HSL,
//! and CMYK.
//!
//! # Examples
//!
//! ## Constructing colors
//!
//! ```
//! use colorkit::color::{Color, Rgb, Hsl};
//!
//! let orange = Color::from_hex("#FF5733").unwrap();
//! let same = Color::from_decimal(0xFF5733, false);
//! assert_eq!(orange, same);
//!
//! let from_rgb = Color::from_rgb(Rgb::new(255, 87, 51)).unwrap();
//! let from_hsl = Color::from_hsl(Hsl::new(11.0, 100.0, 60.0)).unwrap();
//! ```
//!
//! ## Converting between representations
//!
//! ```
//! use colorkit::color::Color;
//!
//! let color = Color::from_hex("#FF5733").unwrap();
//! assert_eq!(color.to_hex(), "#FF5733");
//! assert_eq!(color.to_decimal(), 0xFF5733);
//! assert_eq!(color.to_rgb().r, 255);
//! ```
//!
//! ## Manipulating colors
//!
//! ```
//! use colorkit::color::Color;
//!
//! let mut color = Color::from_hex("#FF5733").unwrap();
//! color.lighten(20.0).unwrap();
//!
//! let other = Color::from_hex("#33FF57").unwrap();
//! color.mix(&other, 50.0).unwrap();
//! ```

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::sync::LazyLock;
use std::sync::Mutex;

use lru::LruCache;
use regex::Regex;
use serde::Serialize;
use serde_json::json;
use smallvec::SmallVec;

use crate::blend::{hue_to_channel, mix_bytes};

/// RGB record with byte channels and an optional alpha in `0.0..=1.0`.
///
/// The alpha slot is three-state: absent (no alpha channel), present and zero
/// (fully transparent), or present and positive. See [`Color::to_rgb`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl Rgb {
    /// Create an opaque RGB record.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: None }
    }

    /// Create an RGB record with an alpha component in `0.0..=1.0`.
    #[must_use]
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a: Some(a) }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// HSL record: hue in degrees `0..=360`, saturation and lightness as
/// percentages `0..=100`, optional alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl Hsl {
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l, a: None }
    }

    #[must_use]
    pub const fn with_alpha(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a: Some(a) }
    }
}

/// CMYK record, each component a percentage `0..=100`. No alpha slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    #[must_use]
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }
}

/// A color channel tag, used to spell out a custom byte order for
/// [`Color::to_decimal_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
    Alpha = 3,
}

impl Channel {
    /// Get the lowercase name of this channel.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Alpha => "alpha",
        }
    }
}

/// Error type for color construction and rendering.
///
/// Exactly three kinds exist: a wrong-shaped argument, a well-typed but
/// out-of-bounds argument, and a hex string that does not match the color
/// grammar. Every error names the field at fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Argument has the wrong shape (e.g. a non-finite float where a number
    /// is required).
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },
    /// Argument has the right type but an out-of-bounds value.
    OutOfRange {
        field: &'static str,
        constraint: &'static str,
    },
    /// String does not match `#` followed by 3, 4, 6, or 8 hex digits.
    Syntax { input: String },
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidType { field, expected } => {
                write!(f, "`{field}` must be {expected}")
            }
            Self::OutOfRange { field, constraint } => {
                write!(f, "`{field}` must be {constraint}")
            }
            Self::Syntax { input } => write!(
                f,
                "`{input}` is not a valid hexadecimal color code (e.g. `#FFFFFF`)"
            ),
        }
    }
}

impl std::error::Error for ColorError {}

fn ensure_finite(field: &'static str, value: f64) -> Result<(), ColorError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ColorError::InvalidType {
            field,
            expected: "a finite number",
        })
    }
}

fn check_alpha(field: &'static str, value: f64) -> Result<(), ColorError> {
    ensure_finite(field, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ColorError::OutOfRange {
            field,
            constraint: "between 0 and 1, inclusive",
        })
    }
}

fn check_percentage(field: &'static str, value: f64) -> Result<(), ColorError> {
    ensure_finite(field, value)?;
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ColorError::OutOfRange {
            field,
            constraint: "between 0 and 100, inclusive",
        })
    }
}

/// A color packed into an unsigned 32-bit integer, convertible to and from
/// decimal, hexadecimal, RGB, HSL, and CMYK representations.
///
/// Byte layout when alpha is present: bits 31-24 alpha, 23-16 red, 15-8 green,
/// 7-0 blue. When alpha is absent the top byte is zero and carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    packed: u32,
    has_alpha: bool,
}

impl Color {
    /// Create a color from a packed decimal value.
    ///
    /// A non-zero top byte is auto-detected as an alpha channel; pass
    /// `has_alpha = true` explicitly to represent a fully transparent color,
    /// since an `0x00` alpha byte is otherwise indistinguishable from "no
    /// alpha channel".
    ///
    /// # Examples
    ///
    /// ```
    /// use colorkit::color::Color;
    ///
    /// let opaque = Color::from_decimal(0xFF5733, false);
    /// assert!(!opaque.has_alpha_channel());
    ///
    /// let detected = Color::from_decimal(0xAAFF5733, false);
    /// assert!(detected.has_alpha_channel());
    /// ```
    #[must_use]
    pub const fn from_decimal(value: u32, has_alpha: bool) -> Self {
        Self {
            packed: value,
            has_alpha: has_alpha || value & 0xFF00_0000 != 0,
        }
    }

    /// Parse a hex color code (cached).
    ///
    /// Accepted forms: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`, hex digits
    /// case-insensitive. In the 8-digit form the alpha byte trails and is
    /// moved to the most significant position internally.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Syntax`] when the string does not match the
    /// grammar.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        static CACHE: LazyLock<Mutex<LruCache<String, Color>>> =
            LazyLock::new(|| Mutex::new(LruCache::new(NonZeroUsize::new(1024).expect("non-zero"))));

        if let Ok(mut cache) = CACHE.lock()
            && let Some(&cached) = cache.get(hex)
        {
            return Ok(cached);
        }

        let result = Self::from_hex_uncached(hex)?;

        if let Ok(mut cache) = CACHE.lock() {
            cache.put(hex.to_string(), result);
        }

        Ok(result)
    }

    fn from_hex_uncached(hex: &str) -> Result<Self, ColorError> {
        static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{4}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$")
                .expect("valid regex")
        });

        if !HEX_RE.is_match(hex) {
            return Err(ColorError::Syntax {
                input: hex.to_string(),
            });
        }

        log::trace!("parsing hex color {hex}");

        let digits = &hex[1..];

        match digits.len() {
            3 | 4 => {
                // Each digit is doubled to form a byte: `F` -> `FF`.
                let byte = |i: usize| {
                    let d = &digits[i..=i];
                    u8::from_str_radix(&format!("{d}{d}"), 16).expect("validated hex digit")
                };
                let (r, g, b) = (byte(0), byte(1), byte(2));
                let a = if digits.len() == 4 {
                    Some(f64::from(byte(3)) / 255.0)
                } else {
                    None
                };
                Self::from_rgb(Rgb { r, g, b, a })
            }
            6 => {
                let value = u32::from_str_radix(digits, 16).expect("validated hex digits");
                Ok(Self::from_decimal(value, false))
            }
            _ => {
                // Source order is RRGGBBAA; canonical order is AARRGGBB.
                let reordered = format!("{}{}", &digits[6..8], &digits[..6]);
                let value = u32::from_str_radix(&reordered, 16).expect("validated hex digits");
                Ok(Self::from_decimal(value, true))
            }
        }
    }

    /// Create a color from an RGB record.
    ///
    /// # Errors
    ///
    /// Returns an error when the alpha component is non-finite
    /// ([`ColorError::InvalidType`]) or outside `0.0..=1.0`
    /// ([`ColorError::OutOfRange`]). The byte channels cannot be out of range.
    pub fn from_rgb(rgb: Rgb) -> Result<Self, ColorError> {
        let Rgb { r, g, b, a } = rgb;

        let packed = if let Some(a) = a {
            check_alpha("a", a)?;
            #[expect(clippy::cast_possible_truncation, reason = "alpha scaled into 0..=255")]
            #[expect(clippy::cast_sign_loss, reason = "alpha validated non-negative")]
            let alpha = (a * 255.0).round() as u32;
            (alpha << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
        } else {
            (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
        };

        Ok(Self::from_decimal(packed, a.is_some()))
    }

    /// Create a color from an HSL record.
    ///
    /// `h = 0` and `h = 360` produce identical output (hue wraparound).
    ///
    /// # Errors
    ///
    /// Returns an error when a component is non-finite or out of range
    /// (`h` in `0..=360`, `s`/`l` in `0..=100`, `a` in `0..=1`).
    pub fn from_hsl(hsl: Hsl) -> Result<Self, ColorError> {
        let Hsl { h, s, l, a } = hsl;

        ensure_finite("h", h)?;
        ensure_finite("s", s)?;
        ensure_finite("l", l)?;
        if !(0.0..=360.0).contains(&h) {
            return Err(ColorError::OutOfRange {
                field: "h",
                constraint: "between 0 and 360, inclusive",
            });
        }
        check_percentage("s", s)?;
        check_percentage("l", l)?;
        if let Some(a) = a {
            check_alpha("a", a)?;
        }

        let h = h.rem_euclid(360.0) / 360.0;
        let s = s / 100.0;
        let l = l / 100.0;

        let (r, g, b) = if s.abs() < f64::EPSILON {
            // Achromatic: a gray with no hue influence.
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        #[expect(clippy::cast_possible_truncation, reason = "channel scaled into 0..=255")]
        #[expect(clippy::cast_sign_loss, reason = "channel intensity is non-negative")]
        let scale = |v: f64| (v * 255.0).round() as u8;

        Self::from_rgb(Rgb {
            r: scale(r),
            g: scale(g),
            b: scale(b),
            a,
        })
    }

    /// Create a color from a CMYK record.
    ///
    /// All-zero CMYK yields pure white; `k = 100` forces pure black. This
    /// path carries no alpha.
    ///
    /// # Errors
    ///
    /// Returns an error when a component is non-finite or outside `0..=100`.
    pub fn from_cmyk(cmyk: Cmyk) -> Result<Self, ColorError> {
        let Cmyk { c, m, y, k } = cmyk;

        check_percentage("c", c)?;
        check_percentage("m", m)?;
        check_percentage("y", y)?;
        check_percentage("k", k)?;

        let c = c / 100.0;
        let m = m / 100.0;
        let y = y / 100.0;
        let k = k / 100.0;

        #[expect(clippy::cast_possible_truncation, reason = "product scaled into 0..=255")]
        #[expect(clippy::cast_sign_loss, reason = "factors are in 0..=1")]
        let scale = |v: f64| (255.0 * v * (1.0 - k)).round() as u8;

        Self::from_rgb(Rgb::new(scale(1.0 - c), scale(1.0 - m), scale(1.0 - y)))
    }

    /// Get the stored packed value verbatim.
    #[must_use]
    pub const fn to_decimal(&self) -> u32 {
        self.packed
    }

    /// Re-pack the color's bytes in a caller-chosen channel order,
    /// most-significant byte first.
    ///
    /// A 3-channel order yields a 24-bit value, a 4-channel order a full
    /// 32-bit value. The alpha byte reads as 0 when no alpha is present.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::OutOfRange`] when the order does not have 3 or 4
    /// channels or repeats a channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorkit::color::{Channel, Color};
    ///
    /// let color = Color::from_hex("#FF5733").unwrap();
    /// let bgr = color
    ///     .to_decimal_with(&[Channel::Blue, Channel::Green, Channel::Red])
    ///     .unwrap();
    /// assert_eq!(bgr, 0x3357FF);
    /// ```
    pub fn to_decimal_with(&self, byte_order: &[Channel]) -> Result<u32, ColorError> {
        if byte_order.len() < 3 || byte_order.len() > 4 {
            return Err(ColorError::OutOfRange {
                field: "byte_order",
                constraint: "3 or 4 channels long",
            });
        }

        let mut seen = [false; 4];
        for &channel in byte_order {
            if seen[channel as usize] {
                return Err(ColorError::OutOfRange {
                    field: "byte_order",
                    constraint: "free of duplicate channels",
                });
            }
            seen[channel as usize] = true;
        }

        let bytes: SmallVec<[u32; 4]> = byte_order
            .iter()
            .map(|&channel| match channel {
                Channel::Alpha => (self.packed >> 24) & 0xFF,
                Channel::Red => (self.packed >> 16) & 0xFF,
                Channel::Green => (self.packed >> 8) & 0xFF,
                Channel::Blue => self.packed & 0xFF,
            })
            .collect();

        Ok(if bytes.len() == 3 {
            (bytes[0] << 16) | (bytes[1] << 8) | bytes[2]
        } else {
            (bytes[0] << 24) | (bytes[1] << 16) | (bytes[2] << 8) | bytes[3]
        })
    }

    /// Render the color as an uppercase hex code, 8 digits when an alpha
    /// channel is present and 6 otherwise.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.hex_with_digits(if self.has_alpha { 8 } else { 6 })
    }

    /// Render the color as an uppercase hex code with an explicit width.
    ///
    /// The 3- and 4-digit forms are lossy short forms keeping the first hex
    /// character of each byte pair. Widths 3 and 6 drop the alpha byte.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::OutOfRange`] when `digits` is not 3, 4, 6, or 8.
    pub fn to_hex_with(&self, digits: u8) -> Result<String, ColorError> {
        if matches!(digits, 3 | 4 | 6 | 8) {
            Ok(self.hex_with_digits(digits))
        } else {
            Err(ColorError::OutOfRange {
                field: "digits",
                constraint: "3, 4, 6, or 8",
            })
        }
    }

    fn hex_with_digits(&self, digits: u8) -> String {
        let mut n = self.packed;

        if self.has_alpha && (digits == 3 || digits == 6) {
            n &= 0x00FF_FFFF;
        }

        if digits == 3 || digits == 4 {
            let full = format!("{n:0width$X}", width = if digits == 3 { 6 } else { 8 });
            let short: String = full
                .as_bytes()
                .chunks(2)
                .map(|pair| pair[0] as char)
                .collect();
            format!("#{short}")
        } else {
            format!("#{n:0width$X}", width = usize::from(digits))
        }
    }

    /// Get the RGB view of the color.
    ///
    /// The alpha slot is three-state: `Some(a > 0)` when the packed value
    /// carries a non-zero top byte, `Some(0.0)` when an alpha channel exists
    /// but is fully transparent, and `None` when no alpha channel exists.
    #[must_use]
    pub fn to_rgb(&self) -> Rgb {
        let a = if self.packed > 0xFF_FFFF {
            Some(f64::from((self.packed >> 24) & 0xFF) / 255.0)
        } else if self.has_alpha {
            Some(0.0)
        } else {
            None
        };

        #[expect(clippy::cast_possible_truncation, reason = "masked to one byte")]
        let byte = |shift: u32| ((self.packed >> shift) & 0xFF) as u8;

        Rgb {
            r: byte(16),
            g: byte(8),
            b: byte(0),
            a,
        }
    }

    /// Get the HSL view of the color.
    ///
    /// Hue is unrounded degrees in `[0, 360)`; saturation and lightness are
    /// percentages rounded to one decimal place.
    #[must_use]
    pub fn to_hsl(&self) -> Hsl {
        let rgb = self.to_rgb();
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = f64::midpoint(max, min);

        let mut h = if delta.abs() < f64::EPSILON {
            0.0
        } else if (max - r).abs() < f64::EPSILON {
            ((g - b) / delta) % 6.0
        } else if (max - g).abs() < f64::EPSILON {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        h *= 60.0;
        if h < 0.0 {
            h += 360.0;
        }

        let s = if delta.abs() < f64::EPSILON {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };

        Hsl {
            h,
            s: round_percent(s),
            l: round_percent(l),
            a: rgb.a,
        }
    }

    /// Get the CMYK view of the color. Alpha is dropped; CMYK has no alpha
    /// slot in this model.
    #[must_use]
    pub fn to_cmyk(&self) -> Cmyk {
        let rgb = self.to_rgb();
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;

        let k = 1.0 - r.max(g).max(b);

        let (c, m, y) = if (k - 1.0).abs() < f64::EPSILON {
            // Pure black; avoid dividing by zero.
            (0.0, 0.0, 0.0)
        } else {
            (
                (1.0 - r - k) / (1.0 - k),
                (1.0 - g - k) / (1.0 - k),
                (1.0 - b - k) / (1.0 - k),
            )
        };

        Cmyk {
            c: round_percent(c),
            m: round_percent(m),
            y: round_percent(y),
            k: round_percent(k),
        }
    }

    /// Raise the HSL lightness by `amount` percentage points, clamped to 100.
    ///
    /// # Errors
    ///
    /// Returns an error when `amount` is non-finite or outside `0..=100`; the
    /// color is untouched on error.
    pub fn lighten(&mut self, amount: f64) -> Result<&mut Self, ColorError> {
        check_percentage("amount", amount)?;

        let mut hsl = self.to_hsl();
        hsl.l = (hsl.l + amount).min(100.0);
        *self = Self::from_hsl(hsl)?;

        Ok(self)
    }

    /// Lower the HSL lightness by `amount` percentage points, clamped to 0.
    ///
    /// # Errors
    ///
    /// Returns an error when `amount` is non-finite or outside `0..=100`; the
    /// color is untouched on error.
    pub fn darken(&mut self, amount: f64) -> Result<&mut Self, ColorError> {
        check_percentage("amount", amount)?;

        let mut hsl = self.to_hsl();
        hsl.l = (hsl.l - amount).max(0.0);
        *self = Self::from_hsl(hsl)?;

        Ok(self)
    }

    /// Blend this color toward `other` by `amount` percent. 0 keeps this
    /// color, 100 adopts `other` entirely.
    ///
    /// When either side has an alpha channel, a side without one defaults to
    /// fully opaque before blending.
    ///
    /// # Errors
    ///
    /// Returns an error when `amount` is non-finite or outside `0..=100`; the
    /// color is untouched on error.
    pub fn mix(&mut self, other: &Self, amount: f64) -> Result<&mut Self, ColorError> {
        check_percentage("amount", amount)?;

        let ratio = amount / 100.0;
        let ours = self.to_rgb();
        let theirs = other.to_rgb();

        #[expect(clippy::cast_possible_truncation, reason = "alpha scaled into 0..=255")]
        #[expect(clippy::cast_sign_loss, reason = "alpha is non-negative")]
        let alpha_byte = |rgb: &Rgb, has_alpha: bool| -> u8 {
            if has_alpha {
                (rgb.a.unwrap_or(0.0) * 255.0).round() as u8
            } else {
                255
            }
        };

        let a = if self.has_alpha || other.has_alpha {
            let blended = mix_bytes(
                alpha_byte(&ours, self.has_alpha),
                alpha_byte(&theirs, other.has_alpha),
                ratio,
            );
            Some(f64::from(blended) / 255.0)
        } else {
            None
        };

        *self = Self::from_rgb(Rgb {
            r: mix_bytes(ours.r, theirs.r, ratio),
            g: mix_bytes(ours.g, theirs.g, ratio),
            b: mix_bytes(ours.b, theirs.b, ratio),
            a,
        })?;

        Ok(self)
    }

    /// Whether the color semantically carries an alpha channel.
    #[must_use]
    pub const fn has_alpha_channel(&self) -> bool {
        self.has_alpha
    }

    /// The HSL lightness percentage of the color.
    #[must_use]
    pub fn lightness(&self) -> f64 {
        self.to_hsl().l
    }

    /// Whether the lightness is at least 50%.
    #[must_use]
    pub fn is_light(&self) -> bool {
        self.lightness() >= 50.0
    }

    /// Whether the lightness is below 50%.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        !self.is_light()
    }

    /// All five representations of the color as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "decimal": self.to_decimal(),
            "hex": self.to_hex(),
            "rgb": self.to_rgb(),
            "hsl": self.to_hsl(),
            "cmyk": self.to_cmyk(),
        })
    }
}

/// Scale a `0..=1` fraction to a percentage rounded to one decimal place.
fn round_percent(fraction: f64) -> f64 {
    (fraction * 1000.0).round() / 10.0
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_hex(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_decimal()
    }
}
