//! Macro for implementing Display and FromStr for domain enums
//!
//! Used for enums that round-trip through configuration files, environment
//! variables and log fields (environments, HTTP methods, log levels).
//!
//! # Example
//!
//! ```rust
//! use rewards_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Channel {
//!     Stable,
//!     Beta,
//! }
//!
//! impl_domain_enum_conversions!(Channel {
//!     Stable => "stable",
//!     Beta => "beta",
//! });
//!
//! assert_eq!("BETA".parse::<Channel>().unwrap(), Channel::Beta);
//! ```

/// Implements Display and FromStr traits for unit-only enums
///
/// Display writes the mapped lowercase string; FromStr parses it back
/// case-insensitively and reports the enum name on failure.
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
