use crate::render::Color;

/// Semantic color role resolved by [`InterfaceColors`].
///
/// Components ask for a role rather than a concrete color so a host theme can
/// restyle every built-in widget in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Fill,
    Background,
    AlternativeBackground,
    Text,
    Grid,
    Disabled,
}

/// Maps semantic color roles to concrete colors.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceColors {
    fill: Color,
    background: Color,
    alternative_background: Color,
    text: Color,
    grid: Color,
    disabled: Color,
}

impl InterfaceColors {
    #[must_use]
    pub fn get(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Fill => self.fill,
            ColorRole::Background => self.background,
            ColorRole::AlternativeBackground => self.alternative_background,
            ColorRole::Text => self.text,
            ColorRole::Grid => self.grid,
            ColorRole::Disabled => self.disabled,
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: ColorRole, color: Color) -> Self {
        match role {
            ColorRole::Fill => self.fill = color,
            ColorRole::Background => self.background = color,
            ColorRole::AlternativeBackground => self.alternative_background = color,
            ColorRole::Text => self.text = color,
            ColorRole::Grid => self.grid = color,
            ColorRole::Disabled => self.disabled = color,
        }
        self
    }
}

impl Default for InterfaceColors {
    /// Light interface palette.
    fn default() -> Self {
        Self {
            fill: Color::rgb(0.9, 0.9, 0.9),
            background: Color::rgb(1.0, 1.0, 1.0),
            alternative_background: Color::rgb(0.0, 0.0, 0.0),
            text: Color::rgb(0.0, 0.0, 0.0),
            grid: Color::rgb(0.75, 0.75, 0.75),
            disabled: Color::rgb(0.55, 0.55, 0.55),
        }
    }
}
