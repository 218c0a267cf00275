//! Hero section identity: name typography, morphing titles, journey globe.

use glam::Vec3;

use crate::Rgb;

/// The two stacked name lines with their accent colors.
pub static NAME_LINES: [(&str, Rgb); 2] = [
    ("SHREYASH", Rgb::from_hex(0xD4AF37)),
    ("DESAI", Rgb::from_hex(0x00D4FF)),
];

/// Subtitle variants the hero cycles through.
pub static HERO_TITLES: [&str; 4] = [
    "Computer Engineer",
    "Designer",
    "Problem Solver",
    "Innovator",
];

/// Seconds each hero title stays on screen.
pub const HERO_TITLE_CYCLE_SECS: f32 = 3.0;

pub static HERO_TAGLINE: &str =
    "Crafting digital solutions that bridge creativity and functionality";

/// One marker pinned to the hero journey globe.
#[derive(Debug, Clone, Copy)]
pub struct GlobeMarker {
    pub label: &'static str,
    /// Position on the unit-ish globe surface (globe radius 1.5).
    pub position: Vec3,
    pub color: Rgb,
}

/// Origin and destination of the Oman-to-India journey, joined by an arc.
pub static GLOBE_MARKERS: [GlobeMarker; 2] = [
    GlobeMarker {
        label: "Muscat, Oman",
        position: Vec3::new(0.8, 0.5, 1.2),
        color: Rgb::from_hex(0xFF0066),
    },
    GlobeMarker {
        label: "Goa, India",
        position: Vec3::new(0.9, 0.2, 0.8),
        color: Rgb::from_hex(0x00FF88),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_titles_are_nonempty_and_distinct() {
        for title in HERO_TITLES {
            assert!(!title.is_empty());
        }
        let mut sorted = HERO_TITLES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), HERO_TITLES.len());
    }
}
