// src/page.rs — Section order and headings shared by the TUI and the Markdown export.

use chrono::Datelike;

use crate::profile::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Skills,
    Certifications,
    Experience,
    Projects,
    Contact,
}

pub const CONTACT_HEADLINE: &str = "Interested in working together?";
pub const CONTACT_BLURB: &str = "I'm always open to discussing new projects, creative ideas or \
    opportunities to be part of your visions. Whether you have a question or just want to say \
    hi, I'll try my best to get back to you!";

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Certifications,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    /// Short label for tabs.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Certifications => "Certs",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Section heading and subtitle. The hero has none.
    pub fn heading(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Section::Hero => None,
            Section::About => Some(("About Me", "Bio & Interests")),
            Section::Skills => Some(("Technical Expertise", "My Stack")),
            Section::Certifications => Some(("Certifications", "Continuous Learning")),
            Section::Experience => Some(("Experience", "My Journey")),
            Section::Projects => Some(("Featured Projects", "What I've Built")),
            Section::Contact => Some(("Get In Touch", "Let's Connect")),
        }
    }

    /// Certifications are optional in the profile; the section hides when empty.
    pub fn visible_for(profile: &Profile) -> Vec<Section> {
        Section::ALL
            .iter()
            .copied()
            .filter(|s| *s != Section::Certifications || !profile.certifications.is_empty())
            .collect()
    }
}

pub fn footer_line(profile: &Profile) -> String {
    format!(
        "\u{a9} {} {}. All rights reserved.",
        chrono::Local::now().year(),
        profile.name
    )
}
