//! Theme token store.
//!
//! A `ThemeTokens` value is built once at startup (from the built-in preset or
//! a TOML file) and handed to the frame driver behind an `Arc`. Nothing in the
//! engine mutates it.

pub mod color;
pub mod presets;
pub mod tokens;

pub use color::{Color, ParseColorError};
pub use tokens::{ColorRoles, RadiiScale, SpacingScale, ThemeTokens, TypeScale, TypeStyle};
