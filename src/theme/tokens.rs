//! Semantic design tokens resolved per concrete color scheme.
//!
//! The web client walked a nested token object with string keys at
//! runtime; here the mapping is a typed struct with one `const` table
//! per scheme, so a missing token is a compile error.

use super::ColorScheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub scheme: ColorScheme,

    pub background_primary: &'static str,
    pub background_secondary: &'static str,
    pub background_elevated: &'static str,
    pub background_muted: &'static str,

    pub surface_solid: &'static str,
    pub surface_inverse: &'static str,

    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_subtle: &'static str,
    pub text_inverse: &'static str,

    pub border_default: &'static str,
    pub border_strong: &'static str,
    pub border_focus: &'static str,

    pub accent: &'static str,
    pub accent_hover: &'static str,
    pub accent_active: &'static str,

    pub feedback_success: &'static str,
    pub feedback_warning: &'static str,
    pub feedback_danger: &'static str,
    pub feedback_info: &'static str,
}

pub const LIGHT: ThemeTokens = ThemeTokens {
    scheme: ColorScheme::Light,

    background_primary: "#FAFAFA",
    background_secondary: "#F5F5F5",
    background_elevated: "#FFFFFF",
    background_muted: "#EEEEEE",

    surface_solid: "#FFFFFF",
    surface_inverse: "#212121",

    text_primary: "#212121",
    text_secondary: "#616161",
    text_subtle: "#757575",
    text_inverse: "#FFFFFF",

    border_default: "#EEEEEE",
    border_strong: "#BDBDBD",
    border_focus: "#4CAF50",

    accent: "#4CAF50",
    accent_hover: "#388E3C",
    accent_active: "#1B5E20",

    feedback_success: "#2E7D32",
    feedback_warning: "#FFB300",
    feedback_danger: "#E53935",
    feedback_info: "#1E88E5",
};

pub const DARK: ThemeTokens = ThemeTokens {
    scheme: ColorScheme::Dark,

    background_primary: "#121212",
    background_secondary: "#212121",
    background_elevated: "#424242",
    background_muted: "#424242",

    surface_solid: "#212121",
    surface_inverse: "#FFFFFF",

    text_primary: "#FAFAFA",
    text_secondary: "#EEEEEE",
    text_subtle: "#BDBDBD",
    text_inverse: "#212121",

    border_default: "#424242",
    border_strong: "#616161",
    border_focus: "#A5D6A7",

    accent: "#A5D6A7",
    accent_hover: "#C8E6C9",
    accent_active: "#E8F5E9",

    feedback_success: "#C8E6C9",
    feedback_warning: "#FFECB3",
    feedback_danger: "#FACDCD",
    feedback_info: "#D2E3FC",
};

pub fn tokens_for(scheme: ColorScheme) -> &'static ThemeTokens {
    match scheme {
        ColorScheme::Light => &LIGHT,
        ColorScheme::Dark => &DARK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_match_scheme() {
        assert_eq!(tokens_for(ColorScheme::Light).scheme, ColorScheme::Light);
        assert_eq!(tokens_for(ColorScheme::Dark).scheme, ColorScheme::Dark);
    }

    #[test]
    fn test_schemes_differ_on_core_tokens() {
        assert_ne!(LIGHT.background_primary, DARK.background_primary);
        assert_ne!(LIGHT.text_primary, DARK.text_primary);
        assert_ne!(LIGHT.accent, DARK.accent);
    }
}
