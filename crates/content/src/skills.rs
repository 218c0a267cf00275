//! Skills constellation registry: four systems (stars), each with orbiting
//! skill planets. Planet size encodes proficiency.

use glam::Vec3;

use crate::{DetailLevel, PanelContent, PanelSource, RecordId, Rgb};

/// Sphere radius of a skill planet as a function of its level.
pub fn planet_radius(level: u8) -> f32 {
    0.3 + (level as f32 / 100.0) * 0.4
}

/// One skill planet inside a system.
#[derive(Debug, Clone, Copy)]
pub struct SkillRecord {
    pub name: &'static str,
    /// Proficiency 0-100; also drives planet radius.
    pub level: u8,
    pub color: Rgb,
    /// Offset from the owning system's position.
    pub offset: Vec3,
}

impl SkillRecord {
    pub fn id(&self) -> RecordId {
        RecordId(self.name)
    }
}

impl PanelSource for SkillRecord {
    fn record_id(&self) -> RecordId {
        self.id()
    }

    fn panel(&self, _detail: DetailLevel) -> PanelContent {
        PanelContent {
            title: self.name.to_string(),
            meter: Some(self.level),
            accent: self.color,
            ..Default::default()
        }
    }
}

/// One skill system: the central star plus its planets.
#[derive(Debug, Clone, Copy)]
pub struct SkillSystem {
    pub key: &'static str,
    pub name: &'static str,
    pub color: Rgb,
    pub position: Vec3,
    pub skills: &'static [SkillRecord],
}

impl SkillSystem {
    pub fn id(&self) -> RecordId {
        RecordId(self.key)
    }
}

impl PanelSource for SkillSystem {
    fn record_id(&self) -> RecordId {
        self.id()
    }

    fn panel(&self, _detail: DetailLevel) -> PanelContent {
        PanelContent {
            title: self.name.to_string(),
            accent: self.color,
            ..Default::default()
        }
    }
}

pub static SKILL_SYSTEMS: [SkillSystem; 4] = [
    SkillSystem {
        key: "frontend",
        name: "Frontend Galaxy",
        color: Rgb::from_hex(0x00D4FF),
        position: Vec3::new(-8.0, 2.0, 0.0),
        skills: &[
            SkillRecord {
                name: "HTML/CSS",
                level: 90,
                color: Rgb::from_hex(0xE34F26),
                offset: Vec3::new(0.0, 0.0, 0.0),
            },
            SkillRecord {
                name: "JavaScript",
                level: 85,
                color: Rgb::from_hex(0xF7DF1E),
                offset: Vec3::new(2.0, 1.0, -1.0),
            },
            SkillRecord {
                name: "React",
                level: 80,
                color: Rgb::from_hex(0x61DAFB),
                offset: Vec3::new(-1.0, -1.0, 1.0),
            },
            SkillRecord {
                name: "jQuery",
                level: 75,
                color: Rgb::from_hex(0x0769AD),
                offset: Vec3::new(1.0, -2.0, 0.0),
            },
        ],
    },
    SkillSystem {
        key: "backend",
        name: "Backend Universe",
        color: Rgb::from_hex(0x00FF88),
        position: Vec3::new(8.0, -1.0, 0.0),
        skills: &[
            SkillRecord {
                name: "PHP",
                level: 90,
                color: Rgb::from_hex(0x777BB4),
                offset: Vec3::new(0.0, 0.0, 0.0),
            },
            SkillRecord {
                name: "MySQL",
                level: 85,
                color: Rgb::from_hex(0x4479A1),
                offset: Vec3::new(-2.0, 1.0, 1.0),
            },
            SkillRecord {
                name: "APIs",
                level: 80,
                color: Rgb::from_hex(0xFF6B6B),
                offset: Vec3::new(1.0, -1.0, -1.0),
            },
            SkillRecord {
                name: "Git/GitHub",
                level: 85,
                color: Rgb::from_hex(0xF05032),
                offset: Vec3::new(-1.0, -2.0, 0.0),
            },
        ],
    },
    SkillSystem {
        key: "design",
        name: "Design Nebula",
        color: Rgb::from_hex(0xD4AF37),
        position: Vec3::new(0.0, 6.0, -3.0),
        skills: &[
            SkillRecord {
                name: "Figma",
                level: 88,
                color: Rgb::from_hex(0xF24E1E),
                offset: Vec3::new(0.0, 0.0, 0.0),
            },
            SkillRecord {
                name: "UI/UX",
                level: 85,
                color: Rgb::from_hex(0xA259FF),
                offset: Vec3::new(1.5, 1.0, -1.0),
            },
            SkillRecord {
                name: "Wireframing",
                level: 82,
                color: Rgb::from_hex(0x00C4CC),
                offset: Vec3::new(-1.0, -1.0, 1.0),
            },
            SkillRecord {
                name: "Prototyping",
                level: 80,
                color: Rgb::from_hex(0xFFC107),
                offset: Vec3::new(1.0, -1.5, 0.0),
            },
        ],
    },
    SkillSystem {
        key: "tools",
        name: "Tools Cluster",
        color: Rgb::from_hex(0xFF0066),
        position: Vec3::new(0.0, -6.0, 2.0),
        skills: &[
            SkillRecord {
                name: "Bootstrap",
                level: 75,
                color: Rgb::from_hex(0x7952B3),
                offset: Vec3::new(0.0, 0.0, 0.0),
            },
            SkillRecord {
                name: "VS Code",
                level: 90,
                color: Rgb::from_hex(0x007ACC),
                offset: Vec3::new(-1.0, 1.0, 1.0),
            },
            SkillRecord {
                name: "Linux",
                level: 70,
                color: Rgb::from_hex(0xFCC624),
                offset: Vec3::new(1.5, -1.0, -1.0),
            },
            SkillRecord {
                name: "Postman",
                level: 75,
                color: Rgb::from_hex(0xFF6C37),
                offset: Vec3::new(-1.5, -1.0, 0.0),
            },
        ],
    },
];

/// Lines drawn between system stars, as index pairs into `SKILL_SYSTEMS`.
pub static SKILL_CONNECTIONS: [(usize, usize); 4] = [(0, 1), (0, 2), (1, 3), (2, 3)];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate_unique_ids;

    #[test]
    fn system_and_skill_ids_are_distinct() {
        validate_unique_ids(
            "skills",
            SKILL_SYSTEMS
                .iter()
                .flat_map(|s| s.skills.iter().map(|k| k.id()).chain(std::iter::once(s.id()))),
        )
        .unwrap();
    }

    #[test]
    fn planet_radius_scales_with_level() {
        assert!(planet_radius(100) > planet_radius(50));
        assert!((planet_radius(0) - 0.3).abs() < 1e-6);
        assert!((planet_radius(100) - 0.7).abs() < 1e-6);
    }

    #[test]
    fn connections_reference_valid_systems() {
        for (a, b) in SKILL_CONNECTIONS {
            assert!(a < SKILL_SYSTEMS.len());
            assert!(b < SKILL_SYSTEMS.len());
            assert_ne!(a, b);
        }
    }

    #[test]
    fn skill_panel_carries_meter() {
        let skill = &SKILL_SYSTEMS[0].skills[0];
        let panel = skill.panel(DetailLevel::Hover);
        assert_eq!(panel.meter, Some(skill.level));
    }
}
