//! Experience timeline registry: one node per education/work stage.

use glam::Vec3;

use crate::{
    DecorProp, DetailLevel, PanelContent, PanelSource, PropShape, RecordId, Rgb, Sparkle,
};

/// Vertical spacing between adjacent timeline nodes.
pub const TIMELINE_STEP_Y: f32 = -4.0;
/// Ring rotation advance between adjacent timeline nodes.
pub const TIMELINE_STEP_ANGLE: f32 = std::f32::consts::FRAC_PI_2;

/// Setting a stage took place in. Selects the decorative sub-geometry and
/// sparkle field drawn around its node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Desert,
    Coastal,
    Campus,
    Corporate,
}

static DESERT_PROPS: [DecorProp; 2] = [
    DecorProp {
        shape: PropShape::Cone { radius: 0.15, height: 0.5 },
        offset: Vec3::new(1.2, 0.0, 0.0),
        color: Rgb::from_hex(0xDEB887),
    },
    DecorProp {
        shape: PropShape::Cone { radius: 0.1, height: 0.3 },
        offset: Vec3::new(-1.2, 0.0, 0.0),
        color: Rgb::from_hex(0xD2B48C),
    },
];

static COASTAL_PROPS: [DecorProp; 2] = [
    DecorProp {
        shape: PropShape::Sphere { radius: 0.2 },
        offset: Vec3::new(1.2, -0.2, 0.0),
        color: Rgb::from_hex(0x87CEEB),
    },
    DecorProp {
        shape: PropShape::Cylinder { radius: 0.05, height: 0.8 },
        offset: Vec3::new(-1.2, -0.2, 0.0),
        color: Rgb::from_hex(0x8FBC8F),
    },
];

static CAMPUS_PROPS: [DecorProp; 2] = [
    DecorProp {
        shape: PropShape::Box { w: 0.3, h: 0.4, d: 0.2 },
        offset: Vec3::new(1.2, 0.0, 0.0),
        color: Rgb::from_hex(0x8B4513),
    },
    DecorProp {
        shape: PropShape::Cylinder { radius: 0.1, height: 0.6 },
        offset: Vec3::new(-1.2, 0.0, 0.0),
        color: Rgb::from_hex(0x228B22),
    },
];

static CORPORATE_PROPS: [DecorProp; 2] = [
    DecorProp {
        shape: PropShape::Box { w: 0.2, h: 0.5, d: 0.1 },
        offset: Vec3::new(1.2, 0.0, 0.0),
        color: Rgb::from_hex(0x2F4F4F),
    },
    DecorProp {
        shape: PropShape::Box { w: 0.15, h: 0.4, d: 0.08 },
        offset: Vec3::new(-1.2, 0.0, 0.0),
        color: Rgb::from_hex(0x708090),
    },
];

impl Environment {
    pub fn props(&self) -> &'static [DecorProp] {
        match self {
            Environment::Desert => &DESERT_PROPS,
            Environment::Coastal => &COASTAL_PROPS,
            Environment::Campus => &CAMPUS_PROPS,
            Environment::Corporate => &CORPORATE_PROPS,
        }
    }

    pub fn sparkle(&self) -> Sparkle {
        match self {
            Environment::Desert => Sparkle {
                color: Rgb::from_hex(0xFFD700),
                count: 20,
                scale: 2.0,
                speed: 0.3,
            },
            Environment::Coastal => Sparkle {
                color: Rgb::from_hex(0x20B2AA),
                count: 15,
                scale: 1.5,
                speed: 0.4,
            },
            Environment::Campus => Sparkle {
                color: Rgb::from_hex(0x4169E1),
                count: 25,
                scale: 2.0,
                speed: 0.2,
            },
            Environment::Corporate => Sparkle {
                color: Rgb::from_hex(0x32CD32),
                count: 30,
                scale: 1.8,
                speed: 0.5,
            },
        }
    }
}

/// One education or work stage on the timeline.
#[derive(Debug, Clone, Copy)]
pub struct ExperienceRecord {
    pub id: RecordId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub color: Rgb,
    pub environment: Environment,
    /// Base position on the timeline spine.
    pub position: Vec3,
    /// Orbital ring rotation; advances by `TIMELINE_STEP_ANGLE` per node.
    pub y_rotation: f32,
}

impl PanelSource for ExperienceRecord {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn panel(&self, detail: DetailLevel) -> PanelContent {
        PanelContent {
            title: self.title.to_string(),
            subtitle: self.subtitle.to_string(),
            meta: format!("{} * {}", self.period, self.location),
            body: self.description.to_string(),
            list_heading: "Key Achievements:",
            list: if detail == DetailLevel::Selected {
                self.achievements.to_vec()
            } else {
                Vec::new()
            },
            accent: self.color,
            ..Default::default()
        }
    }
}

/// The timeline, newest stage last. Order is display order; positions step
/// by `TIMELINE_STEP_Y` and ring rotations by `TIMELINE_STEP_ANGLE`.
pub static EXPERIENCES: [ExperienceRecord; 4] = [
    ExperienceRecord {
        id: RecordId("oman-school"),
        title: "Indian School Muscat",
        subtitle: "KG - 10th Grade",
        period: "2008 - 2019",
        location: "Muscat, Oman",
        description: "International education in the Arabian desert. Developed global \
                      perspective and English fluency through diverse cultural environment.",
        achievements: &[
            "79.4% in CBSE 10th",
            "Cultural diversity exposure",
            "English proficiency",
            "International mindset",
        ],
        color: Rgb::from_hex(0xFF6B6B),
        environment: Environment::Desert,
        position: Vec3::new(0.0, 6.0, 0.0),
        y_rotation: 0.0,
    },
    ExperienceRecord {
        id: RecordId("goa-higher-secondary"),
        title: "Government Higher Secondary School",
        subtitle: "11th - 12th Grade",
        period: "2020 - 2021",
        location: "Canacona, Goa",
        description: "Transition to Indian education system. Focused on science stream \
                      with emphasis on mathematics and physics.",
        achievements: &[
            "69% in Goa Board",
            "Science stream specialization",
            "Local adaptation",
            "Foundation building",
        ],
        color: Rgb::from_hex(0x4ECDC4),
        environment: Environment::Coastal,
        position: Vec3::new(0.0, 2.0, 0.0),
        y_rotation: std::f32::consts::FRAC_PI_2,
    },
    ExperienceRecord {
        id: RecordId("goa-engineering"),
        title: "Goa College of Engineering",
        subtitle: "Computer Engineering",
        period: "2021 - 2025",
        location: "Ponda, Goa",
        description: "Pursuing Computer Engineering with focus on software development, \
                      database systems, and user experience design.",
        achievements: &[
            "Full-stack development",
            "Database expertise",
            "UI/UX design skills",
            "Project leadership",
        ],
        color: Rgb::from_hex(0x45B7D1),
        environment: Environment::Campus,
        position: Vec3::new(0.0, -2.0, 0.0),
        y_rotation: std::f32::consts::PI,
    },
    ExperienceRecord {
        id: RecordId("fluxatic-internship"),
        title: "Fluxatic Global",
        subtitle: "UI/UX Designer Intern",
        period: "June - August 2024",
        location: "Remote",
        description: "Professional internship focusing on user interface design and user \
                      experience optimization for enterprise applications.",
        achievements: &[
            "Enterprise UI design",
            "User research",
            "Design systems",
            "Client collaboration",
        ],
        color: Rgb::from_hex(0x96CEB4),
        environment: Environment::Corporate,
        position: Vec3::new(0.0, -6.0, 0.0),
        y_rotation: 3.0 * std::f32::consts::FRAC_PI_2,
    },
];

/// "Journey Stats" counters shown beside the timeline: label and target.
pub static JOURNEY_STATS: [(&str, u32); 4] = [
    ("Years Learning", 17),
    ("Institutions", 4),
    ("Skills Mastered", 12),
    ("Projects Built", 8),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate_unique_ids;

    #[test]
    fn ids_are_distinct() {
        validate_unique_ids("experience", EXPERIENCES.iter().map(|e| e.id)).unwrap();
    }

    #[test]
    fn timeline_spacing_is_uniform() {
        for pair in EXPERIENCES.windows(2) {
            let dy = pair[1].position.y - pair[0].position.y;
            let da = pair[1].y_rotation - pair[0].y_rotation;
            assert!((dy - TIMELINE_STEP_Y).abs() < 1e-6);
            assert!((da - TIMELINE_STEP_ANGLE).abs() < 1e-6);
        }
    }

    #[test]
    fn hover_panel_omits_achievements_selected_includes_them() {
        let record = &EXPERIENCES[0];
        assert!(record.panel(DetailLevel::Hover).list.is_empty());
        assert_eq!(
            record.panel(DetailLevel::Selected).list.len(),
            record.achievements.len()
        );
    }

    #[test]
    fn every_environment_carries_props_and_sparkle() {
        for record in &EXPERIENCES {
            assert!(!record.environment.props().is_empty());
            assert!(record.environment.sparkle().count > 0);
        }
    }
}
