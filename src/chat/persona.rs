// src/chat/persona.rs — System instruction for the digital twin.

use minijinja::{context, Environment};

use crate::infra::errors::FolioError;
use crate::profile::Profile;

const PERSONA_TEMPLATE: &str = r#"
You are an AI Assistant representing {{ name }}.
Your persona is professional, enthusiastic, and deeply knowledgeable about {{ areas }}.
You also share {{ name }}'s trait of occasionally making bad jokes.

Here is the resume/context you represent:
{{ resume }}

Rules:
1. Answer questions as if you are {{ name }}'s digital twin. Use "I" or "My" when referring to experience.
2. Keep answers concise but informative.
3. If asked about contact info, refer to the email ({{ email }}){% if socials %} or the social links ({{ socials }}){% endif %} provided in the context.
4. If asked about skills not listed, be honest but mention your ability to learn quickly.
5. Emphasize your passion for the work described in your title: "{{ title }}".
6. Feel free to drop a light-hearted "bad joke" if the context allows, as per {{ name }}'s bio.
"#;

/// Render the persona prompt for `profile`.
///
/// Embeds the whole resume as pretty JSON, so every field the profile carries
/// (bio, skills, experience, projects, contact) is available to the model.
pub fn build_system_instruction(profile: &Profile) -> Result<String, FolioError> {
    let areas = if profile.skills.is_empty() {
        profile.title.clone()
    } else {
        profile
            .skills
            .iter()
            .map(|c| c.category.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let socials = profile
        .socials
        .iter()
        .map(|s| s.platform.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let env = Environment::new();
    env.render_str(
        PERSONA_TEMPLATE,
        context! {
            name => &profile.name,
            title => &profile.title,
            email => &profile.email,
            areas => areas,
            socials => socials,
            resume => profile.to_pretty_json()?,
        },
    )
    .map_err(|e| FolioError::Other(anyhow::anyhow!("persona template: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_names_owner_and_rules() {
        let prompt = build_system_instruction(&Profile::default()).unwrap();
        assert!(prompt.contains("You are an AI Assistant representing Jesse Van Den Berghe."));
        assert!(prompt.contains("Jesse Van Den Berghe's digital twin"));
        assert!(prompt.contains("Keep answers concise"));
        assert!(prompt.contains("bad joke"));
    }

    #[test]
    fn test_instruction_embeds_resume_json() {
        let profile = Profile::default();
        let prompt = build_system_instruction(&profile).unwrap();
        assert!(prompt.contains(&profile.to_pretty_json().unwrap()));
        assert!(prompt.contains("Temptation SDK"));
        assert!(prompt.contains("Agentic Travel Planner"));
    }

    #[test]
    fn test_instruction_lists_contact_channels() {
        let prompt = build_system_instruction(&Profile::default()).unwrap();
        assert!(prompt.contains("jesse.vandenberghe95@gmail.com"));
        assert!(prompt.contains("LinkedIn, GitHub"));
    }

    #[test]
    fn test_areas_fall_back_to_title_without_skills() {
        let mut profile = Profile::default();
        profile.skills.clear();
        profile.socials.clear();
        let prompt = build_system_instruction(&profile).unwrap();
        assert!(prompt.contains(
            "deeply knowledgeable about Mobile Developer & Agentic AI Enthusiast."
        ));
        assert!(!prompt.contains("social links"));
    }

    #[test]
    fn test_json_braces_are_not_template_syntax() {
        let mut profile = Profile::default();
        profile.about = "I write {{ mustaches }} and {% tags %} for fun.".into();
        let prompt = build_system_instruction(&profile).unwrap();
        assert!(prompt.contains("{{ mustaches }}"));
    }
}
