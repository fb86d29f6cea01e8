// src/cli/export.rs — Portfolio export command
//
// Writes the whole page as Markdown, or the raw profile as JSON.

use std::fmt::Write as _;

use super::ExportFormat;
use crate::page::{self, Section, CONTACT_BLURB, CONTACT_HEADLINE};
use crate::profile::Profile;

/// Export the portfolio to `output`, or stdout when no path is given.
pub fn run_export(profile: &Profile, format: ExportFormat, output: Option<&str>) -> anyhow::Result<()> {
    let output_str = match format {
        ExportFormat::Markdown => render_markdown(profile),
        ExportFormat::Json => profile.to_pretty_json()?,
    };

    if let Some(path) = output {
        std::fs::write(path, &output_str)?;
        println!("Exported portfolio to {}", path);
    } else {
        println!("{}", output_str);
    }

    Ok(())
}

/// Render every visible section in page order.
pub fn render_markdown(profile: &Profile) -> String {
    let mut md = String::with_capacity(8192);

    for section in Section::visible_for(profile) {
        if let Some((title, subtitle)) = section.heading() {
            let _ = writeln!(md, "## {title}\n\n_{subtitle}_\n");
        }
        match section {
            Section::Hero => write_hero(&mut md, profile),
            Section::About => write_about(&mut md, profile),
            Section::Skills => write_skills(&mut md, profile),
            Section::Certifications => write_certifications(&mut md, profile),
            Section::Experience => write_experience(&mut md, profile),
            Section::Projects => write_projects(&mut md, profile),
            Section::Contact => write_contact(&mut md, profile),
        }
    }

    let _ = writeln!(md, "---\n\n{}", page::footer_line(profile));
    md
}

fn write_hero(md: &mut String, p: &Profile) {
    let _ = writeln!(md, "# Hello, I am {}\n", p.name);
    let _ = writeln!(md, "![{}]({})\n", p.name, p.avatar);
    let _ = writeln!(md, "**{}**\n", p.title);
    let _ = writeln!(md, "{}\n", p.tagline);
    let _ = writeln!(md, "\u{1f4cd} {}\n", p.location);
}

fn write_about(md: &mut String, p: &Profile) {
    let _ = writeln!(md, "> {}\n", p.about);
    if !p.hobbies.is_empty() {
        let _ = writeln!(md, "**Hobbies**\n");
        for hobby in &p.hobbies {
            let _ = writeln!(md, "- {hobby}");
        }
        md.push('\n');
    }
}

fn write_skills(md: &mut String, p: &Profile) {
    for cat in &p.skills {
        let _ = writeln!(md, "### {}\n", cat.category);
        let _ = writeln!(md, "{}\n", cat.skills.join(" \u{b7} "));
    }
}

fn write_certifications(md: &mut String, p: &Profile) {
    for cert in &p.certifications {
        let name = match &cert.link {
            Some(link) => format!("[{}]({})", cert.name, link),
            None => cert.name.clone(),
        };
        let _ = writeln!(md, "- **{}**, {} ({})", name, cert.issuer, cert.date);
    }
    md.push('\n');
}

fn write_experience(md: &mut String, p: &Profile) {
    for job in &p.experience {
        let _ = writeln!(md, "### {} @ {}\n", job.role, job.company);
        match &job.location {
            Some(loc) => {
                let _ = writeln!(md, "_{} \u{b7} {}_\n", job.period, loc);
            }
            None => {
                let _ = writeln!(md, "_{}_\n", job.period);
            }
        }
        let _ = writeln!(md, "{}\n", job.description);
        if !job.technologies.is_empty() {
            let tags: Vec<String> = job.technologies.iter().map(|t| format!("`{t}`")).collect();
            let _ = writeln!(md, "{}\n", tags.join(" "));
        }
    }
}

fn write_projects(md: &mut String, p: &Profile) {
    for project in &p.projects {
        match &project.link {
            Some(link) => {
                let _ = writeln!(md, "### [{}]({})\n", project.title, link);
            }
            None => {
                let _ = writeln!(md, "### {}\n", project.title);
            }
        }
        let _ = writeln!(md, "{}\n", project.description);
        if !project.tags.is_empty() {
            let tags: Vec<String> = project.tags.iter().map(|t| format!("`{t}`")).collect();
            let _ = writeln!(md, "{}\n", tags.join(" "));
        }
    }
}

fn write_contact(md: &mut String, p: &Profile) {
    let _ = writeln!(md, "### {CONTACT_HEADLINE}\n");
    let _ = writeln!(md, "{CONTACT_BLURB}\n");
    let _ = writeln!(md, "[Say Hello](mailto:{})\n", p.email);
    for social in &p.socials {
        let _ = writeln!(md, "- [{}]({})", social.platform, social.url);
    }
    md.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_markdown_sections_in_page_order() {
        let md = render_markdown(&Profile::default());
        let order = [
            "# Hello, I am Jesse Van Den Berghe",
            "## About Me",
            "## Technical Expertise",
            "## Certifications",
            "## Experience",
            "## Featured Projects",
            "## Get In Touch",
        ];
        let positions: Vec<usize> = order.iter().map(|h| md.find(h).unwrap()).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_markdown_contains_contact_links() {
        let md = render_markdown(&Profile::default());
        assert!(md.contains("[Say Hello](mailto:jesse.vandenberghe95@gmail.com)"));
        assert!(md.contains("- [GitHub](https://github.com/Jesse-VanDenBerghe)"));
    }

    #[test]
    fn test_markdown_experience_entry() {
        let md = render_markdown(&Profile::default());
        assert!(md.contains("### Tech Lead @ Wisemen"));
        assert!(md.contains("_Dec 2023 - Aug 2024 \u{b7} Diepenbeek, Belgium_"));
        assert!(md.contains("`Code Reviews`"));
    }

    #[test]
    fn test_markdown_skips_empty_certifications() {
        let mut p = Profile::default();
        p.certifications.clear();
        let md = render_markdown(&p);
        assert!(!md.contains("## Certifications"));
    }

    #[test]
    fn test_export_json_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let path_str = path.to_str().unwrap();
        run_export(&Profile::default(), ExportFormat::Json, Some(path_str)).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let back: Profile = serde_json::from_str(&written).unwrap();
        assert_eq!(back.experience, Profile::default().experience);
    }
}
