use std::fmt;

use eframe::egui::Color32;
use palette::{Hsluv, IntoColor, Srgb};

use crate::data::model::Species;

// ---------------------------------------------------------------------------
// Color themes
// ---------------------------------------------------------------------------

/// Scatter-plot palette selected in the sidebar. The tokens mirror the
/// palettes the plot is styled after: `husl` is generated from evenly spaced
/// HSLuv hues, the rest are fixed qualitative palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTheme {
    Husl,
    Set1,
    Set2,
    Set3,
    Deep,
}

impl ColorTheme {
    /// All themes, in the order the selector lists them.
    pub const ALL: [ColorTheme; 5] = [
        ColorTheme::Husl,
        ColorTheme::Set1,
        ColorTheme::Set2,
        ColorTheme::Set3,
        ColorTheme::Deep,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ColorTheme::Husl => "husl",
            ColorTheme::Set1 => "Set1",
            ColorTheme::Set2 => "Set2",
            ColorTheme::Set3 => "Set3",
            ColorTheme::Deep => "deep",
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Fixed three-color palettes, one entry per known species.
const SET1: [Color32; 3] = [
    Color32::from_rgb(0xE4, 0x1A, 0x1C),
    Color32::from_rgb(0x37, 0x7E, 0xB8),
    Color32::from_rgb(0x4D, 0xAF, 0x4A),
];
const SET2: [Color32; 3] = [
    Color32::from_rgb(0x66, 0xC2, 0xA5),
    Color32::from_rgb(0xFC, 0x8D, 0x62),
    Color32::from_rgb(0x8D, 0xA0, 0xCB),
];
const SET3: [Color32; 3] = [
    Color32::from_rgb(0x8D, 0xD3, 0xC7),
    Color32::from_rgb(0xFF, 0xFF, 0xB3),
    Color32::from_rgb(0xBE, 0xBA, 0xDA),
];
const DEEP: [Color32; 3] = [
    Color32::from_rgb(0x4C, 0x72, 0xB0),
    Color32::from_rgb(0xDD, 0x84, 0x52),
    Color32::from_rgb(0x55, 0xA8, 0x68),
];

/// Generate `n` visually distinct colours from evenly spaced HSLuv hues.
fn husl_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let rgb: Srgb = Hsluv::new(hue, 90.0, 65.0).into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Colour for one species under the active theme. Species outside the three
/// known ones (never selectable, but reachable through the grid) render gray.
pub fn species_color(theme: ColorTheme, species: &Species) -> Color32 {
    let index = match species {
        Species::Adelie => 0,
        Species::Chinstrap => 1,
        Species::Gentoo => 2,
        Species::Other(_) => return Color32::GRAY,
    };
    match theme {
        ColorTheme::Husl => husl_palette(3)[index],
        ColorTheme::Set1 => SET1[index],
        ColorTheme::Set2 => SET2[index],
        ColorTheme::Set3 => SET3[index],
        ColorTheme::Deep => DEEP[index],
    }
}
