//! FCPX Hacks Distribution Tools
//!
//! Support tooling for packaging and shipping the FCPX Hacks macOS
//! automation add-on. It exposes modules for the installer disk-image
//! settings, Unicode Script_Extensions lookup, and font family-name
//! extraction.

#![warn(missing_docs)]

pub mod dmg;
pub mod error;
pub mod font;
pub mod unicode;

// Re-export commonly used types
pub use dmg::{Define, DmgSettings};
pub use error::{DistError, DmgError, FontError};
pub use font::{family_name, FontNames};
pub use unicode::{script_extensions, script_extensions_char};
