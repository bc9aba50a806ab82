// File: crates/graphic-core/src/palette.rs
// Summary: Publication colour palette in three tiers, addressable by index or name.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub hex: &'static str,
}

const fn sw(name: &'static str, hex: &'static str) -> Swatch {
    Swatch { name, hex }
}

pub const PRIMARY: [Swatch; 7] = [
    sw("black", "#3a3e41"),
    sw("red", "#ea212d"),
    sw("blue", "#59889d"),
    sw("steel", "#8e9da6"),
    sw("green", "#9dba73"),
    sw("gold", "#faba54"),
    sw("orange", "#f49457"),
];

pub const SECONDARY: [Swatch; 7] = [
    sw("brick", "#bf6151"),
    sw("periwinkle", "#90b1c0"),
    sw("celery", "#c2cca1"),
    sw("goldenrod", "#fdcd80"),
    sw("peach", "#faba7d"),
    sw("lilac", "#ccb4c8"),
    sw("putty", "#b5997d"),
];

pub const TERTIARY: [Swatch; 8] = [
    sw("dusk", "#cad2d7"),
    sw("rose", "#dfc3b6"),
    sw("sky", "#c3d5de"),
    sw("celadon", "#cfd7c8"),
    sw("lemongrass", "#eeead0"),
    sw("tan", "#eee0d7"),
    sw("wisteria", "#dcdae5"),
    sw("khaki", "#e3e1d6"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Primary,
    Secondary,
    Tertiary,
}

/// Swatches of a tier, in the order series should consume them.
pub fn tier(t: Tier) -> &'static [Swatch] {
    match t {
        Tier::Primary => &PRIMARY,
        Tier::Secondary => &SECONDARY,
        Tier::Tertiary => &TERTIARY,
    }
}

/// Cycle through a tier for the `i`-th series.
pub fn nth(t: Tier, i: usize) -> &'static str {
    let swatches = tier(t);
    swatches[i % swatches.len()].hex
}

/// Find a colour by its name in any tier.
pub fn lookup(name: &str) -> Option<&'static str> {
    PRIMARY
        .iter()
        .chain(SECONDARY.iter())
        .chain(TERTIARY.iter())
        .find(|s| s.name.eq_ignore_ascii_case(name))
        .map(|s| s.hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("Red"), Some("#ea212d"));
        assert_eq!(lookup("khaki"), Some("#e3e1d6"));
        assert_eq!(lookup("chartreuse"), None);
    }

    #[test]
    fn nth_wraps() {
        assert_eq!(nth(Tier::Primary, 0), nth(Tier::Primary, 7));
        assert_eq!(nth(Tier::Tertiary, 9), "#dfc3b6");
    }
}
