// File: crates/wxline-core/src/theme.rs
// Summary: Colour themes shared by the SVG and PNG outputs.

use skia_safe as skia;

/// 8-bit RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }

    /// CSS colour: `#rrggbb`, or `rgba(...)` when translucent.
    pub fn to_css(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a as f32 / 255.0)
        }
    }

    pub fn to_skia(self) -> skia::Color {
        skia::Color::from_argb(self.a, self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    /// `None` leaves the SVG transparent; PNG export falls back to white.
    pub background: Option<Rgba>,
    pub watermark: Rgba,
    pub axis: Rgba,
    pub axis_label: Rgba,
    pub line_stroke: Rgba,
}

impl Theme {
    /// Steel-blue line on the host page, dark grey watermark.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: None,
            watermark: Rgba::rgb(0x33, 0x33, 0x33),
            axis: Rgba::rgb(0, 0, 0),
            axis_label: Rgba::rgb(0, 0, 0),
            line_stroke: Rgba::rgb(70, 130, 180), // steelblue
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Some(Rgba::rgb(250, 250, 252)),
            watermark: Rgba::rgba(20, 20, 30, 48),
            axis: Rgba::rgb(60, 60, 70),
            axis_label: Rgba::rgb(20, 20, 30),
            line_stroke: Rgba::rgb(32, 120, 200),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Some(Rgba::rgb(18, 18, 20)),
            watermark: Rgba::rgba(235, 235, 245, 40),
            axis: Rgba::rgb(180, 180, 190),
            axis_label: Rgba::rgb(235, 235, 245),
            line_stroke: Rgba::rgb(64, 160, 255),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::classic() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::classic()
}
