//! Built-in colour palettes for the player window.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skin {
    pub name: &'static str,
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub border: Color,
    pub disabled: Color,
    pub slider_track: Color,
}

pub const SKINS: [Skin; 3] = [
    Skin {
        name: "classic",
        background: Color::Black,
        foreground: Color::Green,
        accent: Color::LightGreen,
        border: Color::Green,
        disabled: Color::DarkGray,
        slider_track: Color::Rgb(0, 48, 0),
    },
    Skin {
        name: "midnight",
        background: Color::Rgb(40, 20, 50),
        foreground: Color::Rgb(255, 255, 255),
        accent: Color::Rgb(250, 189, 47),
        border: Color::Rgb(102, 102, 102),
        disabled: Color::Rgb(90, 80, 100),
        slider_track: Color::Rgb(50, 30, 60),
    },
    Skin {
        name: "paper",
        background: Color::Rgb(245, 242, 232),
        foreground: Color::Rgb(40, 40, 40),
        accent: Color::Rgb(176, 58, 46),
        border: Color::Rgb(150, 140, 120),
        disabled: Color::Rgb(190, 185, 175),
        slider_track: Color::Rgb(220, 214, 200),
    },
];

impl Skin {
    /// Look a skin up by name, ignoring case.
    pub fn by_name(name: &str) -> Option<Skin> {
        let name = name.trim();
        SKINS
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .copied()
    }

    /// The skin after this one, wrapping around.
    pub fn next(self) -> Skin {
        let pos = SKINS.iter().position(|s| s.name == self.name).unwrap_or(0);
        SKINS[(pos + 1) % SKINS.len()]
    }
}

impl Default for Skin {
    fn default() -> Self {
        SKINS[0]
    }
}
