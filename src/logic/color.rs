use super::*;

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Leaves a sprite image untouched when used as a tint.
    pub const UNTINTED: Self = Self(255, 255, 255);

    fn shifted(self, shift: i32) -> Self {
        let channel = |c: u8| (c as i32 + shift).clamp(0, 255) as u8;
        Self(channel(self.0), channel(self.1), channel(self.2))
    }

    fn distance_squared(self, other: Self) -> i32 {
        let d = |a: u8, b: u8| (a as i32 - b as i32).pow(2);
        d(self.0, other.0) + d(self.1, other.1) + d(self.2, other.2)
    }
}

/// Foreground (platforms and particles) brightness shift.
pub const FG_SHIFT: i32 = -127;
/// Background brightness shift.
pub const BG_SHIFT: i32 = 128;
const WHITE_FG_SHIFT: i32 = 0;
const ORANGE_SHIFT_COEF: f32 = 0.25;

/// The palette. Level names, object colors and the player's color are all hues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Reflect)]
#[serde(rename_all = "lowercase")]
pub enum Hue {
    White,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Violet,
    Brown,
}

impl Hue {
    /// Palette order, which also breaks ties when blending.
    pub const ALL: [Hue; 9] = [
        Hue::White,
        Hue::Red,
        Hue::Orange,
        Hue::Yellow,
        Hue::Green,
        Hue::Blue,
        Hue::Indigo,
        Hue::Violet,
        Hue::Brown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Hue::White => "white",
            Hue::Red => "red",
            Hue::Orange => "orange",
            Hue::Yellow => "yellow",
            Hue::Green => "green",
            Hue::Blue => "blue",
            Hue::Indigo => "indigo",
            Hue::Violet => "violet",
            Hue::Brown => "brown",
        }
    }

    pub fn rgb(self) -> Rgb {
        match self {
            Hue::White => Rgb(230, 220, 215),
            Hue::Red => Rgb(225, 0, 0),
            Hue::Orange => Rgb(255, 128, 0),
            Hue::Yellow => Rgb(225, 225, 0),
            Hue::Green => Rgb(0, 225, 0),
            Hue::Blue => Rgb(0, 0, 255),
            Hue::Indigo => Rgb(128, 0, 255),
            Hue::Violet => Rgb(255, 0, 255),
            Hue::Brown => Rgb(128, 64, 0),
        }
    }

    fn scaled_shift(self, shift: i32) -> i32 {
        match self {
            // truncates toward zero
            Hue::Orange => (shift as f32 * ORANGE_SHIFT_COEF) as i32,
            _ => shift,
        }
    }

    /// Clear color of a level of this hue.
    pub fn background(self) -> Rgb {
        self.rgb().shifted(self.scaled_shift(BG_SHIFT))
    }

    /// Wall color of a level of this hue. View rectangles cut the background out of it.
    pub fn foreground(self) -> Rgb {
        let shift = match self {
            Hue::White => WHITE_FG_SHIFT,
            hue => hue.scaled_shift(FG_SHIFT),
        };
        self.rgb().shifted(shift)
    }

    /// Tint applied to a white sprite image to draw it in this hue.
    pub fn tint(self, shift: i32) -> Rgb {
        match self {
            Hue::White => Rgb::UNTINTED,
            hue => hue.rgb().shifted(hue.scaled_shift(shift)),
        }
    }
}

impl fmt::Display for Hue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Hue {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hue::ALL
            .into_iter()
            .find(|hue| hue.name() == s)
            .ok_or_else(|| Error::InvalidColor(s.to_owned()))
    }
}

/// Mixes two palette colors. White and equal colors leave the other side unchanged,
/// otherwise the integer average snaps to the nearest palette entry.
pub fn blend(a: Hue, b: Hue) -> Hue {
    if b == Hue::White || a == b {
        return a;
    }
    if a == Hue::White {
        return b;
    }
    let (a, b) = (a.rgb(), b.rgb());
    let mix = |x: u8, y: u8| ((x as u16 + y as u16) / 2) as u8;
    let mixed = Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2));
    let mut best = Hue::ALL[0];
    for hue in Hue::ALL {
        // strict comparison keeps the earliest palette entry on ties
        if hue.rgb().distance_squared(mixed) < best.rgb().distance_squared(mixed) {
            best = hue;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_is_commutative_and_idempotent() {
        for a in Hue::ALL {
            assert_eq!(blend(a, a), a);
            for b in Hue::ALL {
                assert_eq!(blend(a, b), blend(b, a), "{a} + {b}");
            }
        }
    }

    #[test]
    fn blend_examples() {
        assert_eq!(blend(Hue::White, Hue::Red), Hue::Red);
        assert_eq!(blend(Hue::Red, Hue::White), Hue::Red);
        assert_eq!(blend(Hue::Red, Hue::Blue), Hue::Indigo);
        assert_eq!(blend(Hue::Red, Hue::Yellow), Hue::Orange);
    }

    #[test]
    fn parse_names() {
        for hue in Hue::ALL {
            assert_eq!(hue.name().parse::<Hue>().unwrap(), hue);
        }
        assert!(matches!("pink".parse::<Hue>(), Err(Error::InvalidColor(name)) if name == "pink"));
    }

    #[test]
    fn level_colors() {
        assert_eq!(Hue::White.foreground(), Hue::White.rgb());
        assert_eq!(Hue::White.background(), Rgb(255, 255, 255));
        assert_eq!(Hue::Red.background(), Rgb(255, 128, 128));
        assert_eq!(Hue::Red.foreground(), Rgb(98, 0, 0));
        // orange shifts are scaled down: +32 and -31
        assert_eq!(Hue::Orange.background(), Rgb(255, 160, 32));
        assert_eq!(Hue::Orange.foreground(), Rgb(224, 97, 0));
    }
}
