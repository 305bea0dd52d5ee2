//! Theme preference state machine.
//!
//! The stored preference is tri-state (`light`, `dark`, `auto`); the
//! concrete scheme is derived by consulting the OS signal whenever the
//! preference is `auto`. Transitions happen on explicit selection or on
//! an OS preference change while in `auto`.

pub mod tokens;

pub use tokens::{tokens_for, ThemeTokens};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-facing theme preference. `auto` defers to the OS scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    // The web client briefly shipped this mode as "system".
    #[default]
    #[serde(alias = "system")]
    Auto,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
            ThemeMode::Auto => write!(f, "auto"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "auto" | "system" => Ok(ThemeMode::Auto),
            _ => Err(format!(
                "Invalid theme mode '{}'. Valid options: light, dark, auto",
                s
            )),
        }
    }
}

impl ThemeMode {
    /// Explicit user selection cycles light -> dark -> auto.
    pub fn cycled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Auto,
            ThemeMode::Auto => ThemeMode::Light,
        }
    }
}

/// Concrete rendering scheme after resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorScheme::Light => write!(f, "light"),
            ColorScheme::Dark => write!(f, "dark"),
        }
    }
}

impl ColorScheme {
    /// OS preference signal for a terminal session. There is no media
    /// query to subscribe to, so the scheme comes from NICA_COLOR_SCHEME
    /// and defaults to light.
    pub fn from_env() -> Self {
        match std::env::var("NICA_COLOR_SCHEME").as_deref() {
            Ok("dark") => ColorScheme::Dark,
            _ => ColorScheme::Light,
        }
    }
}

/// Dark wins when selected explicitly or inherited from the OS in auto.
pub fn resolve(mode: ThemeMode, os_preference: ColorScheme) -> ColorScheme {
    match mode {
        ThemeMode::Dark => ColorScheme::Dark,
        ThemeMode::Light => ColorScheme::Light,
        ThemeMode::Auto => os_preference,
    }
}

/// Holds the preference, the last observed OS signal, and the applied
/// concrete scheme.
#[derive(Debug)]
pub struct ThemeEngine {
    mode: ThemeMode,
    os_preference: ColorScheme,
    applied: ColorScheme,
}

impl ThemeEngine {
    pub fn new(mode: ThemeMode, os_preference: ColorScheme) -> Self {
        Self {
            mode,
            os_preference,
            applied: resolve(mode, os_preference),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn resolved(&self) -> ColorScheme {
        self.applied
    }

    pub fn active_tokens(&self) -> &'static ThemeTokens {
        tokens_for(self.applied)
    }

    /// Applies an explicit selection and returns the resolved tokens.
    pub fn set_mode(&mut self, mode: ThemeMode) -> &'static ThemeTokens {
        self.mode = mode;
        self.applied = resolve(self.mode, self.os_preference);
        self.active_tokens()
    }

    /// Feeds an OS preference change. The derived scheme only moves
    /// while the mode is `auto`; returns the new tokens when it did.
    pub fn os_preference_changed(&mut self, scheme: ColorScheme) -> Option<&'static ThemeTokens> {
        self.os_preference = scheme;
        let resolved = resolve(self.mode, self.os_preference);
        if resolved != self.applied {
            self.applied = resolved;
            Some(self.active_tokens())
        } else {
            None
        }
    }
}
