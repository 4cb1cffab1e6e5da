//! # colorkit
//!
//! A color model and conversion engine built around a single [`Color`] value
//! type, plus a handful of small pure value-type utilities.
//!
//! ## Quick Start
//!
//! ```rust
//! use colorkit::prelude::*;
//!
//! let mut color = Color::from_hex("#FF5733").unwrap();
//! assert_eq!(color.to_decimal(), 0xFF5733);
//!
//! color.lighten(10.0).unwrap();
//! assert!(color.is_light());
//! ```
//!
//! ## Core Concepts
//!
//! - **Color**: a packed `u32` in `AARRGGBB` layout plus an alpha-presence flag
//! - **Representations**: decimal, hex string, RGB, HSL, and CMYK, all
//!   convertible in both directions
//! - **Mutators**: `lighten`, `darken`, and `mix` update a color in place and
//!   return it for chaining
//!
//! The companion modules cover durations ([`time`]), integer math ([`math`]),
//! slice helpers ([`array`]), RNG helpers ([`random`]), and URL extraction
//! ([`links`]).

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod array;
pub mod blend;
pub mod color;
pub mod links;
pub mod math;
pub mod random;
pub mod time;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::array::{chunk, shuffle, symmetric_diff};
    pub use crate::color::{Channel, Cmyk, Color, ColorError, Hsl, Rgb};
    pub use crate::links::links;
    pub use crate::math::{
        binomial_coefficient, binomial_probability, factorial, gcd, lcm, MathError,
    };
    pub use crate::random::{random_int, random_item};
    pub use crate::time::{to_milliseconds, Time, TimeError, TimeUnit};
}

// Re-export key types at crate root
pub use color::{Channel, Cmyk, Color, ColorError, Hsl, Rgb};
pub use time::{Time, TimeUnit};
