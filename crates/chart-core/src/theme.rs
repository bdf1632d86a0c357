// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming and the fixed series palette.

use std::fmt;

/// Opaque RGB color, written as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Ordered series colors; the n-th series takes `colors[n % len]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: &'static [Color],
}

static TABLEAU: [Color; 8] = [
    Color::rgb(0x1f, 0x77, 0xb4), // blue
    Color::rgb(0xff, 0x7f, 0x0e), // orange
    Color::rgb(0x2c, 0xa0, 0x2c), // green
    Color::rgb(0xd6, 0x27, 0x28), // red
    Color::rgb(0x94, 0x67, 0xbd), // purple
    Color::rgb(0x8c, 0x56, 0x4b), // brown
    Color::rgb(0xe3, 0x77, 0xc2), // pink
    Color::rgb(0x17, 0xbe, 0xcf), // cyan
];

impl Palette {
    pub const fn new(colors: &'static [Color]) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// Color for the series registered at `index`. Black for an empty palette.
    pub fn color(&self, index: usize) -> Color {
        if self.colors.is_empty() {
            return Color::rgb(0, 0, 0);
        }
        self.colors[index % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(&TABLEAU)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub border: Color,
    pub grid: Color,
    pub axis_label: Color,
    pub title: Color,
    pub palette: Palette,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(255, 255, 255),
            border: Color::rgb(211, 211, 211),
            grid: Color::rgb(230, 230, 235),
            axis_label: Color::rgb(60, 60, 70),
            title: Color::rgb(20, 20, 30),
            palette: Palette::default(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            border: Color::rgb(60, 60, 66),
            grid: Color::rgb(40, 40, 45),
            axis_label: Color::rgb(180, 180, 190),
            title: Color::rgb(235, 235, 245),
            palette: Palette::default(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Look up a preset by `name`, ignoring ASCII case.
pub fn find_preset(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    find_preset(name).unwrap_or_default()
}
