//! Certificates gallery registry: one framed certificate per record.

use glam::Vec3;

use crate::{DetailLevel, PanelContent, PanelSource, RecordId, Rgb};

/// Subject area of a certificate. Drives the legend and accent swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateCategory {
    UiUxDesign,
    DataAnalysis,
    Leadership,
    Cybersecurity,
    Finance,
}

impl CertificateCategory {
    pub fn label(&self) -> &'static str {
        match self {
            CertificateCategory::UiUxDesign => "UI/UX & Design",
            CertificateCategory::DataAnalysis => "Data Analysis",
            CertificateCategory::Leadership => "Management & Leadership",
            CertificateCategory::Cybersecurity => "Cybersecurity",
            CertificateCategory::Finance => "Finance & Analytics",
        }
    }

    /// Swatch color used in the section legend.
    pub fn swatch(&self) -> Rgb {
        match self {
            CertificateCategory::UiUxDesign => Rgb::from_hex(0xF87171),
            CertificateCategory::DataAnalysis => Rgb::from_hex(0x2DD4BF),
            CertificateCategory::Leadership => Rgb::from_hex(0x60A5FA),
            CertificateCategory::Cybersecurity => Rgb::from_hex(0x4ADE80),
            CertificateCategory::Finance => Rgb::from_hex(0xFACC15),
        }
    }
}

/// One certificate on display.
#[derive(Debug, Clone, Copy)]
pub struct CertificateRecord {
    pub id: RecordId,
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub category: CertificateCategory,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub grade: &'static str,
    pub credential_id: &'static str,
    pub color: Rgb,
    pub position: Vec3,
    /// Mounting angle of the frame around Y.
    pub y_rotation: f32,
}

impl PanelSource for CertificateRecord {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn panel(&self, detail: DetailLevel) -> PanelContent {
        match detail {
            // Quick info card: title plus issuer and grade.
            DetailLevel::Hover => PanelContent {
                title: self.title.to_string(),
                meta: format!("{} * {}", self.issuer, self.grade),
                accent: self.color,
                ..Default::default()
            },
            DetailLevel::Selected => PanelContent {
                title: self.title.to_string(),
                subtitle: self.issuer.to_string(),
                meta: format!("{} * {}", self.date, self.category.label()),
                body: self.description.to_string(),
                list_heading: "Skills Gained:",
                list: self.skills.to_vec(),
                footer: format!("Credential ID: {}", self.credential_id),
                accent: self.color,
                ..Default::default()
            },
        }
    }
}

pub static CERTIFICATES: [CertificateRecord; 5] = [
    CertificateRecord {
        id: RecordId("nptel-hci"),
        title: "Human-Computer Interaction",
        issuer: "NPTEL - IIT Madras",
        date: "2024",
        category: CertificateCategory::UiUxDesign,
        description: "Comprehensive study of human-computer interaction principles, \
                      usability testing, and user interface design methodologies.",
        skills: &[
            "User Experience Design",
            "Usability Testing",
            "Interface Design",
            "User Research",
        ],
        grade: "Elite",
        credential_id: "NPTEL24CS01",
        color: Rgb::from_hex(0xFF6B6B),
        position: Vec3::new(-6.0, 2.0, 0.0),
        y_rotation: std::f32::consts::PI / 6.0,
    },
    CertificateRecord {
        id: RecordId("nptel-sna"),
        title: "Social Network Analysis",
        issuer: "NPTEL - IIT Kharagpur",
        date: "2024",
        category: CertificateCategory::DataAnalysis,
        description: "Advanced concepts in social network analysis, graph theory, and \
                      network visualization techniques for complex data structures.",
        skills: &[
            "Network Analysis",
            "Graph Theory",
            "Data Visualization",
            "Statistical Analysis",
        ],
        grade: "Elite",
        credential_id: "NPTEL24MA02",
        color: Rgb::from_hex(0x4ECDC4),
        position: Vec3::new(-2.0, 3.0, -2.0),
        y_rotation: -std::f32::consts::PI / 8.0,
    },
    CertificateRecord {
        id: RecordId("nptel-leadership"),
        title: "Leadership and Team Effectiveness",
        issuer: "NPTEL - IIT Roorkee",
        date: "2024",
        category: CertificateCategory::Leadership,
        description: "Strategic leadership principles, team dynamics, organizational \
                      behavior, and effective communication in professional environments.",
        skills: &[
            "Team Leadership",
            "Project Management",
            "Communication",
            "Strategic Planning",
        ],
        grade: "Elite",
        credential_id: "NPTEL24HS03",
        color: Rgb::from_hex(0x45B7D1),
        position: Vec3::new(2.0, 2.5, -1.0),
        y_rotation: std::f32::consts::FRAC_PI_4,
    },
    CertificateRecord {
        id: RecordId("nptel-privacy"),
        title: "Privacy and Security in Online Social Media",
        issuer: "NPTEL - IIT Madras",
        date: "2024",
        category: CertificateCategory::Cybersecurity,
        description: "Security frameworks, privacy protection mechanisms, and risk \
                      assessment strategies for social media platforms.",
        skills: &[
            "Cybersecurity",
            "Privacy Protection",
            "Risk Assessment",
            "Security Frameworks",
        ],
        grade: "Elite",
        credential_id: "NPTEL24CS04",
        color: Rgb::from_hex(0x96CEB4),
        position: Vec3::new(6.0, 1.5, 0.0),
        y_rotation: -std::f32::consts::PI / 3.0,
    },
    CertificateRecord {
        id: RecordId("trading-cert"),
        title: "Financial Trading & Risk Management",
        issuer: "Trading Academy",
        date: "2023",
        category: CertificateCategory::Finance,
        description: "Advanced financial trading strategies, risk management techniques, \
                      and market analysis for strategic decision making.",
        skills: &[
            "Risk Management",
            "Financial Analysis",
            "Strategic Thinking",
            "Market Research",
        ],
        grade: "Certified Professional",
        credential_id: "TA2023FIN",
        color: Rgb::from_hex(0xFFD700),
        position: Vec3::new(0.0, 0.5, 2.0),
        y_rotation: 0.0,
    },
];

/// "Certification Gallery" counters: label and target.
pub static GALLERY_STATS: [(&str, u32); 4] = [
    ("Certificates", 5),
    ("Elite Grades", 4),
    ("Institutions", 3),
    ("Skills Learned", 16),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate_unique_ids;

    #[test]
    fn ids_are_distinct() {
        validate_unique_ids("certificates", CERTIFICATES.iter().map(|c| c.id)).unwrap();
    }

    #[test]
    fn hover_panel_is_abbreviated() {
        let cert = &CERTIFICATES[0];
        let hover = cert.panel(DetailLevel::Hover);
        assert!(hover.list.is_empty());
        assert!(hover.body.is_empty());
        let full = cert.panel(DetailLevel::Selected);
        assert_eq!(full.list.len(), cert.skills.len());
        assert!(full.footer.contains(cert.credential_id));
    }

    #[test]
    fn stats_match_registry() {
        let certificates = CERTIFICATES.len() as u32;
        let elite = CERTIFICATES.iter().filter(|c| c.grade == "Elite").count() as u32;
        assert_eq!(GALLERY_STATS[0].1, certificates);
        assert_eq!(GALLERY_STATS[1].1, elite);
    }
}
