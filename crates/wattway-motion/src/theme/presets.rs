//! Built-in token presets.

use super::color::Color;
use super::tokens::{ColorRoles, RadiiScale, SpacingScale, ThemeTokens, TypeScale, TypeStyle};

/// Build a color from a literal hex string known to be well-formed.
fn hex(s: &str) -> Color {
    Color::from_hex(s).unwrap_or(Color::TRANSPARENT)
}

impl ThemeTokens {
    /// The Wattway dark palette (emerald primary on slate).
    pub fn wattway_dark() -> Self {
        Self {
            colors: ColorRoles {
                primary: hex("#10b981"),
                primary_dark: hex("#059669"),
                primary_light: hex("#34d399"),
                accent: hex("#06b6d4"),
                background: hex("#0f172a"),
                surface: hex("#1e293b"),
                card: hex("#334155"),
                border: hex("#475569"),
                text: hex("#f8fafc"),
                text_dim: hex("#cbd5e1"),
                success: hex("#10b981"),
                danger: hex("#ef4444"),
                warning: hex("#f59e0b"),
                white: hex("#ffffff"),
                black: hex("#000000"),
                overlay: hex("#00000080"),
            },
            spacing: SpacingScale {
                xs: 4.0,
                sm: 8.0,
                md: 12.0,
                lg: 16.0,
                xl: 24.0,
                xxl: 32.0,
            },
            radii: RadiiScale {
                sm: 8.0,
                md: 12.0,
                lg: 16.0,
                xl: 24.0,
                round: 999.0,
            },
            typography: TypeScale {
                h1: TypeStyle::new(36.0, 800, 44.0, -0.5),
                h2: TypeStyle::new(28.0, 700, 36.0, -0.25),
                h3: TypeStyle::new(22.0, 600, 28.0, 0.0),
                title: TypeStyle::new(18.0, 600, 24.0, 0.0),
                subtitle: TypeStyle::new(16.0, 500, 22.0, 0.15),
                body: TypeStyle::new(15.0, 400, 22.0, 0.25),
                caption: TypeStyle::new(12.0, 400, 16.0, 0.4),
                button: TypeStyle::new(16.0, 700, 20.0, 0.5),
                label: TypeStyle::new(14.0, 500, 20.0, 0.1),
            },
        }
    }
}
