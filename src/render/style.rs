use serde::{Deserialize, Serialize};

use crate::error::{BoxError, BoxResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
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

    pub fn validate(self) -> BoxResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(BoxError::InvalidParameter(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stroke pattern for one scene polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// Per-series presentation defaults for one scene.
///
/// Defaults follow the classic textbook figure: red endowment marker, solid
/// curve for agent A, dashed curve for agent B, dashed box boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneStyle {
    pub endowment_color: Color,
    pub endowment_marker_size: f64,
    pub curve_a_color: Color,
    pub curve_a_line_style: LineStyle,
    pub curve_b_color: Color,
    pub curve_b_line_style: LineStyle,
    pub boundary_color: Color,
    pub boundary_line_style: LineStyle,
    pub stroke_width: f64,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            endowment_color: Color::rgb(0.85, 0.1, 0.1),
            endowment_marker_size: 6.0,
            curve_a_color: Color::rgb(0.1, 0.2, 0.85),
            curve_a_line_style: LineStyle::Solid,
            curve_b_color: Color::rgb(0.1, 0.6, 0.2),
            curve_b_line_style: LineStyle::Dashed,
            boundary_color: Color::rgb(0.0, 0.0, 0.0),
            boundary_line_style: LineStyle::Dashed,
            stroke_width: 1.5,
        }
    }
}

impl SceneStyle {
    #[must_use]
    pub fn with_curve_colors(mut self, curve_a: Color, curve_b: Color) -> Self {
        self.curve_a_color = curve_a;
        self.curve_b_color = curve_b;
        self
    }

    #[must_use]
    pub fn with_endowment_color(mut self, color: Color) -> Self {
        self.endowment_color = color;
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn validate(self) -> BoxResult<Self> {
        self.endowment_color.validate()?;
        self.curve_a_color.validate()?;
        self.curve_b_color.validate()?;
        self.boundary_color.validate()?;

        for (name, value) in [
            ("endowment_marker_size", self.endowment_marker_size),
            ("stroke_width", self.stroke_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(BoxError::InvalidParameter(format!(
                    "scene style `{name}` must be finite and > 0"
                )));
            }
        }

        Ok(self)
    }
}
