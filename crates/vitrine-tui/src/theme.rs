use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey1: Color,

    // Semantic colors
    pub accent: Color,
    pub price: Color,
    pub badge: Color,
    pub selection: Color,
    pub error: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::showroom_dark()
    }
}

impl Theme {
    /// Gold-on-dark palette, after the storefront's look
    pub fn showroom_dark() -> Self {
        Self {
            bg0: Color::Rgb(0x1c, 0x1b, 0x1a),
            bg1: Color::Rgb(0x24, 0x22, 0x20),
            bg2: Color::Rgb(0x32, 0x2f, 0x2b),
            fg0: Color::Rgb(0xe8, 0xe0, 0xd2),
            fg1: Color::Rgb(0xcf, 0xc6, 0xb4),
            grey0: Color::Rgb(0x6e, 0x67, 0x5d),
            grey1: Color::Rgb(0x8a, 0x81, 0x74),
            accent: Color::Rgb(0xd6, 0xa7, 0x1e),
            price: Color::Rgb(0xd6, 0xa7, 0x1e),
            badge: Color::Rgb(0xb8, 0x90, 0x4a),
            selection: Color::Rgb(0x32, 0x2f, 0x2b),
            error: Color::Rgb(0xe0, 0x60, 0x4f),
            success: Color::Rgb(0x9b, 0xb3, 0x64),
        }
    }

    pub fn showroom_light() -> Self {
        Self {
            bg0: Color::Rgb(0xf6, 0xf1, 0xe7),
            bg1: Color::Rgb(0xec, 0xe5, 0xd8),
            bg2: Color::Rgb(0xde, 0xd5, 0xc4),
            fg0: Color::Rgb(0x2a, 0x27, 0x22),
            fg1: Color::Rgb(0x4a, 0x45, 0x3c),
            grey0: Color::Rgb(0xb0, 0xa8, 0x98),
            grey1: Color::Rgb(0x8c, 0x84, 0x74),
            accent: Color::Rgb(0xa8, 0x7b, 0x12),
            price: Color::Rgb(0xa8, 0x7b, 0x12),
            badge: Color::Rgb(0x8f, 0x6d, 0x2e),
            selection: Color::Rgb(0xde, 0xd5, 0xc4),
            error: Color::Rgb(0xb5, 0x3f, 0x30),
            success: Color::Rgb(0x5f, 0x75, 0x2e),
        }
    }
}

/// Load a theme by name from config, defaulting to the dark palette
pub fn load_theme(name: &str) -> Theme {
    match name.to_lowercase().as_str() {
        "showroom-dark" | "dark" => Theme::showroom_dark(),
        "showroom-light" | "light" => Theme::showroom_light(),
        other => {
            tracing::warn!("Unknown theme \"{}\", falling back to showroom-dark", other);
            Theme::showroom_dark()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_theme_names() {
        assert_eq!(load_theme("showroom-light").bg0, Theme::showroom_light().bg0);
        assert_eq!(load_theme("LIGHT").bg0, Theme::showroom_light().bg0);
        // Unknown names fall back to the dark palette
        assert_eq!(load_theme("no-such-theme").bg0, Theme::showroom_dark().bg0);
    }
}
