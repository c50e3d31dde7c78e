use crate::error::{SceneError, SceneResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> SceneResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SceneError::InvalidPrimitive(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one filled/stroked SVG path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    /// SVG path data (`d` attribute).
    pub data: String,
    pub fill: Option<Color>,
    pub fill_opacity: f64,
    pub opacity: f64,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            fill: None,
            fill_opacity: 1.0,
            opacity: 1.0,
        }
    }

    #[must_use]
    pub fn with_fill(mut self, fill: Color, fill_opacity: f64) -> Self {
        self.fill = Some(fill);
        self.fill_opacity = fill_opacity;
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn validate(&self) -> SceneResult<()> {
        if self.data.is_empty() {
            return Err(SceneError::InvalidPrimitive(
                "path primitive must carry path data".to_owned(),
            ));
        }
        for (field, value) in [("fill_opacity", self.fill_opacity), ("opacity", self.opacity)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SceneError::InvalidPrimitive(format!(
                    "path `{field}` must be finite and in [0, 1]"
                )));
            }
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to `TextPrimitive::y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVAlign {
    Top,
    Middle,
    Bottom,
}

/// Draw command for one label.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub color: Color,
    pub fill_opacity: f64,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, x: f64, y: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            color,
            fill_opacity: 1.0,
            h_align: TextHAlign::Left,
            v_align: TextVAlign::Top,
        }
    }

    #[must_use]
    pub fn aligned(mut self, h_align: TextHAlign, v_align: TextVAlign) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }

    #[must_use]
    pub fn with_fill_opacity(mut self, fill_opacity: f64) -> Self {
        self.fill_opacity = fill_opacity;
        self
    }

    pub fn validate(&self) -> SceneResult<()> {
        if self.text.is_empty() {
            return Err(SceneError::InvalidPrimitive(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(SceneError::InvalidPrimitive(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.fill_opacity.is_finite() || !(0.0..=1.0).contains(&self.fill_opacity) {
            return Err(SceneError::InvalidPrimitive(
                "text fill opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        self.color.validate()
    }
}
