//! Contact section registry: identity card and social link planets.

use glam::Vec3;

use crate::{DetailLevel, PanelContent, PanelSource, RecordId, Rgb};

/// Where a social link points. The viewer hands these to the OS handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Web(&'static str),
    Mail(&'static str),
    Tel(&'static str),
}

impl LinkTarget {
    /// URI form accepted by OS open handlers.
    pub fn uri(&self) -> String {
        match self {
            LinkTarget::Web(url) => (*url).to_string(),
            LinkTarget::Mail(addr) => format!("mailto:{addr}"),
            LinkTarget::Tel(number) => format!("tel:{number}"),
        }
    }
}

/// One clickable social planet.
#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub id: RecordId,
    pub name: &'static str,
    pub target: LinkTarget,
    pub color: Rgb,
    pub position: Vec3,
}

impl PanelSource for SocialLink {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn panel(&self, _detail: DetailLevel) -> PanelContent {
        PanelContent {
            title: self.name.to_string(),
            meta: self.target.uri(),
            accent: self.color,
            ..Default::default()
        }
    }
}

/// Static identity card shown in the contact shell.
#[derive(Debug, Clone, Copy)]
pub struct ContactInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub availability: &'static str,
    pub timezone: &'static str,
}

pub static CONTACT_INFO: ContactInfo = ContactInfo {
    name: "Shreyash Desai",
    title: "Computer Engineer & Designer",
    email: "shreyashdesai60@gmail.com",
    phone: "+91 7666987026",
    location: "Shantinagar, Ponda, Goa, India",
    availability: "Available for full-time opportunities",
    timezone: "IST (UTC+5:30)",
};

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        id: RecordId("github"),
        name: "GitHub",
        target: LinkTarget::Web("https://github.com/shreyashdesai"),
        color: Rgb::from_hex(0x333333),
        position: Vec3::new(-3.0, 2.0, 0.0),
    },
    SocialLink {
        id: RecordId("linkedin"),
        name: "LinkedIn",
        target: LinkTarget::Web("https://linkedin.com/in/shreyashdesai"),
        color: Rgb::from_hex(0x0077B5),
        position: Vec3::new(-1.0, 2.5, 0.0),
    },
    SocialLink {
        id: RecordId("email"),
        name: "Email",
        target: LinkTarget::Mail("shreyashdesai60@gmail.com"),
        color: Rgb::from_hex(0xEA4335),
        position: Vec3::new(1.0, 2.5, 0.0),
    },
    SocialLink {
        id: RecordId("phone"),
        name: "Phone",
        target: LinkTarget::Tel("+917666987026"),
        color: Rgb::from_hex(0x34A853),
        position: Vec3::new(3.0, 2.0, 0.0),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate_unique_ids;

    #[test]
    fn ids_are_distinct() {
        validate_unique_ids("social", SOCIAL_LINKS.iter().map(|s| s.id)).unwrap();
    }

    #[test]
    fn targets_render_as_uris() {
        assert_eq!(
            LinkTarget::Mail("a@b.c").uri(),
            "mailto:a@b.c".to_string()
        );
        assert_eq!(LinkTarget::Tel("+1").uri(), "tel:+1".to_string());
        assert!(SOCIAL_LINKS[0].target.uri().starts_with("https://"));
    }
}
