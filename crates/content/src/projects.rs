//! Projects showcase registry: one hologram per project.

use glam::Vec3;

use crate::{
    DecorProp, DetailLevel, PanelContent, PanelSource, PropShape, RecordId, Rgb,
};

/// How many feature bullet points a selected hologram panel shows.
pub const FEATURES_SHOWN: usize = 4;
/// Seconds between screenshot advances while a hologram is hovered/selected.
pub const SCREENSHOT_CYCLE_SECS: f32 = 2.0;

/// Domain a project was built for. Selects the props flanking the hologram
/// and the legend swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSetting {
    Government,
    Healthcare,
    Design,
}

static GOVERNMENT_PROPS: [DecorProp; 2] = [
    DecorProp {
        shape: PropShape::Box { w: 0.3, h: 0.6, d: 0.2 },
        offset: Vec3::new(-2.0, 1.5, 0.0),
        color: Rgb::from_hex(0x8B4513),
    },
    DecorProp {
        shape: PropShape::Cylinder { radius: 0.1, height: 0.8 },
        offset: Vec3::new(2.0, 1.5, 0.0),
        color: Rgb::from_hex(0xCD853F),
    },
];

static HEALTHCARE_PROPS: [DecorProp; 2] = [
    DecorProp {
        shape: PropShape::Cylinder { radius: 0.15, height: 0.4 },
        offset: Vec3::new(-2.0, 1.5, 0.0),
        color: Rgb::from_hex(0xFFFFFF),
    },
    DecorProp {
        shape: PropShape::Box { w: 0.2, h: 0.1, d: 0.4 },
        offset: Vec3::new(2.0, 1.5, 0.0),
        color: Rgb::from_hex(0xFF6B6B),
    },
];

static DESIGN_PROPS: [DecorProp; 2] = [
    DecorProp {
        shape: PropShape::Cone { radius: 0.3, height: 0.6 },
        offset: Vec3::new(-2.0, 1.5, 0.0),
        color: Rgb::from_hex(0xFFD700),
    },
    DecorProp {
        shape: PropShape::Torus { radius: 0.2, tube: 0.05 },
        offset: Vec3::new(2.0, 1.5, 0.0),
        color: Rgb::from_hex(0xFF69B4),
    },
];

impl ProjectSetting {
    pub fn props(&self) -> &'static [DecorProp] {
        match self {
            ProjectSetting::Government => &GOVERNMENT_PROPS,
            ProjectSetting::Healthcare => &HEALTHCARE_PROPS,
            ProjectSetting::Design => &DESIGN_PROPS,
        }
    }

    /// Legend label for the section overlay.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectSetting::Government => "Full-Stack Web",
            ProjectSetting::Healthcare => "Healthcare System",
            ProjectSetting::Design => "UI/UX Design",
        }
    }
}

/// One showcased project.
#[derive(Debug, Clone, Copy)]
pub struct ProjectRecord {
    pub id: RecordId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub category: &'static str,
    pub tech: &'static [&'static str],
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub impact: &'static str,
    /// Number of screenshots the auto-cycle steps through.
    pub screenshots: u32,
    pub color: Rgb,
    pub position: Vec3,
    pub setting: ProjectSetting,
}

impl PanelSource for ProjectRecord {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn panel(&self, detail: DetailLevel) -> PanelContent {
        PanelContent {
            title: self.title.to_string(),
            subtitle: self.subtitle.to_string(),
            meta: self.category.to_string(),
            body: self.description.to_string(),
            list_heading: "Key Features:",
            list: if detail == DetailLevel::Selected {
                self.features.iter().take(FEATURES_SHOWN).copied().collect()
            } else {
                Vec::new()
            },
            tags: self.tech.to_vec(),
            footer: self.impact.to_string(),
            accent: self.color,
            ..Default::default()
        }
    }
}

pub static PROJECTS: [ProjectRecord; 3] = [
    ProjectRecord {
        id: RecordId("dams"),
        title: "DAMS - Departmental Asset Management System",
        subtitle: "College Digitization Project",
        category: "Full-Stack Web Application",
        tech: &["PHP", "MySQL", "JavaScript", "Bootstrap", "jQuery"],
        description: "Comprehensive digital transformation solution for government \
                      departments, featuring OTP-based authentication, role-specific \
                      dashboards, approval workflows, and e-signature integration.",
        features: &[
            "OTP-based secure login system",
            "Role-based dashboard access (Admin, Staff, Approver)",
            "Multi-level approval workflows",
            "E-signature integration for documents",
            "Real-time email notifications",
            "Inventory management system",
            "Procurement tracking",
            "PDF report generation",
        ],
        impact: "100% paperless workflow * 70% cost reduction * 50% faster approvals",
        screenshots: 8,
        color: Rgb::from_hex(0x4169E1),
        position: Vec3::new(-8.0, 2.0, 0.0),
        setting: ProjectSetting::Government,
    },
    ProjectRecord {
        id: RecordId("puregleam"),
        title: "PureGleam - Dental Clinic Management",
        subtitle: "Healthcare Web Application",
        category: "Medical Management System",
        tech: &["PHP", "MySQL", "HTML/CSS", "JavaScript", "Bootstrap"],
        description: "Modern dental clinic management system with online appointment \
                      booking, patient reviews, automated notifications, and comprehensive \
                      admin dashboard for efficient healthcare delivery.",
        features: &[
            "Online appointment booking system",
            "Patient review and rating system",
            "Automated email notifications",
            "Service catalog management",
            "Responsive mobile-first design",
            "Admin dashboard for clinic management",
            "Patient history tracking",
            "SMS notification integration",
        ],
        impact: "300+ appointments booked * 95% patient satisfaction * 40% admin time saved",
        screenshots: 8,
        color: Rgb::from_hex(0x00CED1),
        position: Vec3::new(0.0, 0.0, 0.0),
        setting: ProjectSetting::Healthcare,
    },
    ProjectRecord {
        id: RecordId("cricket-gear"),
        title: "Cricket Gear Hub - E-commerce UI/UX",
        subtitle: "Mobile App Design System",
        category: "UI/UX Design Project",
        tech: &["Figma", "Wireframing", "Prototyping", "Design Systems", "User Research"],
        description: "Comprehensive e-commerce mobile app design for cricket equipment \
                      with 200+ wireframes, interactive prototypes, and complete design \
                      system focusing on user experience and conversion optimization.",
        features: &[
            "200+ detailed wireframes",
            "Interactive high-fidelity prototypes",
            "Complete design system with components",
            "User journey mapping",
            "Color psychology implementation",
            "Typography hierarchy design",
            "Accessibility-compliant design",
            "Cross-platform consistency",
        ],
        impact: "200+ wireframes * 15+ user flows * Complete design system",
        screenshots: 8,
        color: Rgb::from_hex(0xFF6B35),
        position: Vec3::new(8.0, -2.0, 0.0),
        setting: ProjectSetting::Design,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate_unique_ids;

    #[test]
    fn ids_are_distinct() {
        validate_unique_ids("projects", PROJECTS.iter().map(|p| p.id)).unwrap();
    }

    #[test]
    fn selected_panel_caps_features() {
        for project in &PROJECTS {
            let panel = project.panel(DetailLevel::Selected);
            assert!(panel.list.len() <= FEATURES_SHOWN);
            assert!(!panel.tags.is_empty());
        }
    }

    #[test]
    fn every_project_has_screenshots_to_cycle() {
        for project in &PROJECTS {
            assert!(project.screenshots > 0);
        }
    }
}
