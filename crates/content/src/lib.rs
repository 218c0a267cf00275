//! Content registries for the Orbitfolio scenes.
//!
//! Each scene is driven by a static, ordered list of records defined here:
//! - `experience` - education/work timeline nodes
//! - `projects` - showcase holograms
//! - `certificates` - gallery frames
//! - `skills` - constellation systems and planets
//! - `contact` - contact info and social link planets
//! - `profile` - hero section identity strings
//!
//! Records are immutable `'static` data; identifiers are unique within a
//! registry and list order is display order.

pub mod certificates;
pub mod contact;
pub mod experience;
pub mod profile;
pub mod projects;
pub mod skills;

pub use certificates::{CertificateCategory, CertificateRecord, CERTIFICATES, GALLERY_STATS};
pub use contact::{ContactInfo, LinkTarget, SocialLink, CONTACT_INFO, SOCIAL_LINKS};
pub use experience::{Environment, ExperienceRecord, EXPERIENCES, JOURNEY_STATS};
pub use profile::{GlobeMarker, GLOBE_MARKERS, HERO_TAGLINE, HERO_TITLES, NAME_LINES};
pub use projects::{ProjectRecord, ProjectSetting, PROJECTS};
pub use skills::{SkillRecord, SkillSystem, SKILL_CONNECTIONS, SKILL_SYSTEMS};

use glam::Vec3;
use thiserror::Error;

/// Identifier of one content record, unique within its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(pub &'static str);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Linear-space RGB color for scene geometry and overlay accents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    /// Build from a 0xRRGGBB literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self([
            ((hex >> 16) & 0xFF) as f32 / 255.0,
            ((hex >> 8) & 0xFF) as f32 / 255.0,
            (hex & 0xFF) as f32 / 255.0,
        ])
    }

    pub const fn with_alpha(self, alpha: f32) -> [f32; 4] {
        [self.0[0], self.0[1], self.0[2], alpha]
    }
}

/// Primitive shape of one decorative prop attached to a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropShape {
    Sphere { radius: f32 },
    Box { w: f32, h: f32, d: f32 },
    Cylinder { radius: f32, height: f32 },
    Cone { radius: f32, height: f32 },
    Torus { radius: f32, tube: f32 },
}

/// One decorative prop: shape + placement relative to the node.
#[derive(Debug, Clone, Copy)]
pub struct DecorProp {
    pub shape: PropShape,
    pub offset: Vec3,
    pub color: Rgb,
}

/// Parameters of a node's ambient sparkle field.
#[derive(Debug, Clone, Copy)]
pub struct Sparkle {
    pub color: Rgb,
    pub count: u32,
    pub scale: f32,
    pub speed: f32,
}

/// How much of a record a panel should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailLevel {
    /// Pointer-over: abbreviated summary.
    Hover,
    /// Clicked/selected: full detail including nested lists.
    Selected,
}

/// Overlay panel text, projected from one record. Absent fields render as
/// empty; lists may be empty and must never panic downstream.
#[derive(Debug, Clone, Default)]
pub struct PanelContent {
    pub title: String,
    pub subtitle: String,
    pub meta: String,
    pub body: String,
    pub list_heading: &'static str,
    pub list: Vec<&'static str>,
    pub tags: Vec<&'static str>,
    pub footer: String,
    /// 0-100 proficiency meter, when the record carries one.
    pub meter: Option<u8>,
    pub accent: Rgb,
}

/// Projection of a record into overlay panel text.
pub trait PanelSource {
    fn record_id(&self) -> RecordId;
    fn panel(&self, detail: DetailLevel) -> PanelContent;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate record id `{0}` in {1} registry")]
    DuplicateId(&'static str, &'static str),
}

/// Check that `ids` are pairwise distinct. `registry` names the source for
/// the error message.
pub fn validate_unique_ids<I>(registry: &'static str, ids: I) -> Result<(), RegistryError>
where
    I: IntoIterator<Item = RecordId>,
{
    let mut seen: Vec<RecordId> = Vec::new();
    for id in ids {
        if seen.contains(&id) {
            return Err(RegistryError::DuplicateId(id.0, registry));
        }
        seen.push(id);
    }
    Ok(())
}

/// Validate every registry in the crate. Called from the viewer at startup
/// in debug builds; tests exercise it per registry.
pub fn validate_all() -> Result<(), RegistryError> {
    validate_unique_ids("experience", EXPERIENCES.iter().map(|e| e.id))?;
    validate_unique_ids("projects", PROJECTS.iter().map(|p| p.id))?;
    validate_unique_ids("certificates", CERTIFICATES.iter().map(|c| c.id))?;
    validate_unique_ids(
        "skills",
        SKILL_SYSTEMS
            .iter()
            .flat_map(|s| s.skills.iter().map(|k| k.id()).chain(std::iter::once(s.id()))),
    )?;
    validate_unique_ids("social", SOCIAL_LINKS.iter().map(|s| s.id))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_registries_have_distinct_ids() {
        validate_all().unwrap();
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let err = validate_unique_ids("test", [RecordId("a"), RecordId("b"), RecordId("a")])
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateId("a", "test"));
    }

    #[test]
    fn hex_colors_decode_to_unit_range() {
        let Rgb([r, g, b]) = Rgb::from_hex(0xFF6B35);
        assert!((r - 1.0).abs() < 1e-6);
        assert!(g > 0.0 && g < 1.0);
        assert!(b > 0.0 && b < 1.0);
    }
}
