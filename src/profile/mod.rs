// src/profile/mod.rs — Resume data the whole portfolio is rendered from.
//
// The profile is read-only once loaded: the sections render it and the chat
// persona embeds it, nothing mutates it.

mod builtin;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::infra::errors::FolioError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub location: String,
    pub avatar: String,
    pub about: String,
    pub email: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub experience: Vec<ExperienceItem>,
    #[serde(default)]
    pub projects: Vec<ProjectItem>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub certifications: Vec<CertificationItem>,
    #[serde(default)]
    pub hobbies: Vec<String>,
    /// Opening line of the chat transcript. Widget copy, not resume data,
    /// so it never reaches the persona prompt.
    #[serde(default, skip_serializing)]
    pub chat_greeting: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub id: String,
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationItem {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        builtin::profile()
    }
}

impl Profile {
    /// Load a profile from a `.json` file, or TOML for any other extension.
    pub fn load_from(path: &Path) -> Result<Self, FolioError> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let profile: Profile = if is_json {
            serde_json::from_str(&content)
                .map_err(|e| FolioError::Profile(format!("{}: {}", path.display(), e)))?
        } else {
            toml::from_str(&content)
                .map_err(|e| FolioError::Profile(format!("{}: {}", path.display(), e)))?
        };

        if profile.name.trim().is_empty() {
            return Err(FolioError::Profile(format!(
                "{}: name must not be empty",
                path.display()
            )));
        }
        Ok(profile)
    }

    /// Load from `path` when given, otherwise the built-in profile.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, FolioError> {
        match path {
            Some(p) => Self::load_from(p),
            None => Ok(Self::default()),
        }
    }

    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Opening message of the chat transcript.
    pub fn greeting(&self) -> String {
        match &self.chat_greeting {
            Some(g) if !g.trim().is_empty() => g.clone(),
            _ => format!(
                "Hi! I'm {}'s AI Agent. Ask me anything about my experience or projects.",
                self.first_name()
            ),
        }
    }

    /// Pretty JSON rendering of the resume, as embedded in the persona prompt.
    pub fn to_pretty_json(&self) -> Result<String, FolioError> {
        serde_json::to_string_pretty(self).map_err(|e| FolioError::Profile(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profile_is_populated() {
        let p = Profile::default();
        assert_eq!(p.name, "Jesse Van Den Berghe");
        assert_eq!(p.first_name(), "Jesse");
        assert_eq!(p.socials.len(), 2);
        assert_eq!(p.experience.len(), 6);
        assert_eq!(p.projects.len(), 3);
        assert_eq!(p.skills.len(), 4);
        assert_eq!(p.certifications.len(), 1);
    }

    #[test]
    fn test_builtin_greeting() {
        let p = Profile::default();
        assert!(p.greeting().starts_with("Hi! I'm Jesse's AI Agent."));
    }

    #[test]
    fn test_generated_greeting_without_override() {
        let mut p = Profile::default();
        p.name = "Ada Lovelace".into();
        p.chat_greeting = None;
        assert_eq!(
            p.greeting(),
            "Hi! I'm Ada's AI Agent. Ask me anything about my experience or projects."
        );
    }

    #[test]
    fn test_json_is_camel_case_and_skips_greeting() {
        let json = Profile::default().to_pretty_json().unwrap();
        assert!(json.contains("\"name\": \"Jesse Van Den Berghe\""));
        assert!(json.contains("\"technologies\""));
        assert!(!json.contains("chatGreeting"));
        assert!(!json.contains("chat_greeting"));
    }

    #[test]
    fn test_load_toml_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.toml");
        std::fs::write(
            &path,
            r#"
name = "Ada Lovelace"
title = "Analyst"
tagline = "Notes on engines"
location = "London"
avatar = "ada.png"
about = "First programmer."
email = "ada@example.com"
hobbies = ["Poetry"]

[[skills]]
category = "Math"
skills = ["Bernoulli numbers"]

[[experience]]
id = "e1"
role = "Translator"
company = "Menabrea"
period = "1842 - 1843"
description = "Annotated the Sketch of the Analytical Engine."
"#,
        )
        .unwrap();

        let p = Profile::load_from(&path).unwrap();
        assert_eq!(p.name, "Ada Lovelace");
        assert_eq!(p.skills[0].skills, vec!["Bernoulli numbers".to_string()]);
        assert!(p.experience[0].technologies.is_empty());
        assert!(p.experience[0].location.is_none());
        assert!(p.projects.is_empty());
    }

    #[test]
    fn test_load_json_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.json");
        let json = Profile::default().to_pretty_json().unwrap();
        std::fs::write(&path, json).unwrap();

        let p = Profile::load_from(&path).unwrap();
        assert_eq!(p.name, Profile::default().name);
        assert_eq!(p.experience, Profile::default().experience);
        assert!(p.chat_greeting.is_none());
    }

    #[test]
    fn test_load_rejects_empty_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.json");
        std::fs::write(
            &path,
            r#"{"name":" ","title":"","tagline":"","location":"","avatar":"","about":"","email":""}"#,
        )
        .unwrap();
        assert!(matches!(
            Profile::load_from(&path),
            Err(FolioError::Profile(_))
        ));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let p = Profile::load_or_default(None).unwrap();
        assert_eq!(p, Profile::default());
    }
}
