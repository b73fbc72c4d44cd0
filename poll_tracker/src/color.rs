use std::fmt::Display;
use std::str::FromStr;

/// A display color for a party, as an 8-bit RGB triple.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const DARKBLUE: Rgb = Rgb::new(0, 0, 139);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const GREEN: Rgb = Rgb::new(0, 128, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const ORANGE: Rgb = Rgb::new(255, 165, 0);
    pub const PURPLE: Rgb = Rgb::new(128, 0, 128);
    pub const GRAY: Rgb = Rgb::new(128, 128, 128);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    const NAMED: [(&'static str, Rgb); 8] = [
        ("darkblue", Rgb::DARKBLUE),
        ("blue", Rgb::BLUE),
        ("green", Rgb::GREEN),
        ("red", Rgb::RED),
        ("orange", Rgb::ORANGE),
        ("purple", Rgb::PURPLE),
        ("gray", Rgb::GRAY),
        ("white", Rgb::WHITE),
    ];

    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }
}

/// Prints as `[r,g,b]`, the form used in the party summaries.
impl Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{},{}]", self.r, self.g, self.b)
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ParseRgbError(pub String);

impl Display for ParseRgbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "not a color: {:?} (expected #rrggbb or a color name)", self.0)
    }
}

impl std::error::Error for ParseRgbError {}

/// Accepts `#rrggbb` or one of the built-in color names, case-insensitive.
impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ParseRgbError(s.to_string()));
            }
            let channel = |i: usize| {
                u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParseRgbError(s.to_string()))
            };
            return Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?));
        }
        let lower = trimmed.to_lowercase();
        Rgb::NAMED
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, c)| *c)
            .ok_or_else(|| ParseRgbError(s.to_string()))
    }
}
