// src/profile/builtin.rs — The portfolio owner's resume, compiled in.

use super::{
    CertificationItem, ExperienceItem, Profile, ProjectItem, SkillCategory, SocialLink,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn job(
    id: &str,
    role: &str,
    company: &str,
    location: &str,
    period: &str,
    description: &str,
    technologies: &[&str],
) -> ExperienceItem {
    ExperienceItem {
        id: id.into(),
        role: role.into(),
        company: company.into(),
        period: period.into(),
        location: Some(location.into()),
        description: description.into(),
        technologies: strings(technologies),
    }
}

fn project(id: &str, title: &str, description: &str, image: &str, tags: &[&str]) -> ProjectItem {
    ProjectItem {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        image: image.into(),
        tags: strings(tags),
        link: None,
    }
}

pub(super) fn profile() -> Profile {
    Profile {
        name: "Jesse Van Den Berghe".into(),
        title: "Mobile Developer & Agentic AI Enthusiast".into(),
        tagline: "Passionately bridging mobile experiences with intelligent agents.".into(),
        location: "3540 Berbroek, Belgium".into(),
        avatar: "https://github.com/Jesse-VanDenBerghe.png".into(),
        about: "I'm a passionate Mobile Developer who thrives on learning, teaching, and \
                collaborating. With a positive attitude, I like to motivate myself and others \
                to create an environment of continuous improvement. Whenever possible, I'm \
                always ready for some sparring about a technical topic or a chat about \
                anything and nothing. Be aware, my conversations are sprinkled with \
                occasional (bad) jokes."
            .into(),
        email: "jesse.vandenberghe95@gmail.com".into(),
        socials: vec![
            SocialLink {
                platform: "LinkedIn".into(),
                url: "https://www.linkedin.com/in/jessevandenberghe/".into(),
                icon: "linkedin".into(),
            },
            SocialLink {
                platform: "GitHub".into(),
                url: "https://github.com/Jesse-VanDenBerghe".into(),
                icon: "github".into(),
            },
        ],
        hobbies: strings(&["Dungeons & Dragons", "Running", "Hiking"]),
        skills: vec![
            SkillCategory {
                category: "Mobile Development".into(),
                skills: strings(&[
                    "Android (Kotlin)",
                    "Jetpack Compose",
                    "iOS (Swift)",
                    "SwiftUI",
                    "SDK Development",
                ]),
            },
            SkillCategory {
                category: "Programming & Cloud".into(),
                skills: strings(&["Git", "CI/CD", "AWS", "Python", "Clean Architecture"]),
            },
            SkillCategory {
                category: "AI & Emerging Tech".into(),
                skills: strings(&["Agentic AI", "Gemini API", "LLM Integration", "RAG"]),
            },
            SkillCategory {
                category: "Languages".into(),
                skills: strings(&["Dutch (Native)", "English (Professional)", "French (Basic)"]),
            },
        ],
        certifications: vec![CertificationItem {
            name: "AWS Certified Cloud Practitioner".into(),
            issuer: "Amazon Web Services (AWS)".into(),
            date: "2024".into(),
            link: None,
        }],
        experience: vec![
            job(
                "exp0",
                "Mobile Engineer",
                "DPG Media",
                "Belgium",
                "Aug 2025 - Present",
                "Transitioned to a full-time role within DPG Media. In addition to continuing \
                 my work with the Seduction Team on the Temptation SDK, I joined the Tracking \
                 Team. I am now responsible for managing and developing the Tracking SDK, which \
                 handles critical data analytics across the entire DPG Media application \
                 ecosystem.",
                &["Android", "iOS", "SDK Development", "Tracking", "AWS", "DevOps"],
            ),
            job(
                "exp1",
                "Mobile Developer Consultant",
                "StaffYourTribe (DPG Media)",
                "Belgium",
                "Aug 2024 - Aug 2025",
                "As a member of the Seduction Team, I was responsible for the maintenance and \
                 development of the Temptation SDK. This SDK is used in multiple apps within the \
                 DPG Media ecosystem. I also committed myself to the mobile guild, where I \
                 helped organize several guild days.",
                &["Android", "iOS", "SDK Development", "Mobile Architecture"],
            ),
            job(
                "exp2",
                "Tech Lead",
                "Wisemen",
                "Diepenbeek, Belgium",
                "Dec 2023 - Aug 2024",
                "This role involved guiding a team of developers into a uniform and efficient \
                 way of working. I was responsible for the technical decisions, code reviews, \
                 and the overall quality of the codebase.",
                &["Technical Leadership", "Code Reviews", "Quality Assurance", "Mentoring"],
            ),
            job(
                "exp3",
                "Squad Lead",
                "Wisemen",
                "Diepenbeek, Belgium",
                "Aug 2022 - Dec 2023",
                "As a squad lead, I successfully led a team in the development and management \
                 of multiple projects concurrently. My responsibilities encompassed client \
                 communication, team planning, budget estimations, and scope management.",
                &["Team Leadership", "Project Management", "Client Communication", "Scrum"],
            ),
            job(
                "exp4",
                "Android Lead",
                "Wisemen",
                "Diepenbeek, Belgium",
                "June 2020 - Aug 2024",
                "I was entrusted with the responsibility of keeping our Android knowledge up to \
                 date throughout the entire company. This involved leading bi-weekly meetings \
                 to share information, conduct research, coach interns, and deliver workshops.",
                &["Android", "Research", "Coaching", "Workshops"],
            ),
            job(
                "exp5",
                "Android Developer",
                "Wisemen",
                "Diepenbeek, Belgium",
                "Aug 2017 - Aug 2024",
                "Worked on or completely developed over 20 Android apps for multiple clients, \
                 with some of them reaching over 50k downloads in the store. These apps were \
                 complete projects, from design to publishing on the Play Store. Throughout \
                 their lifecycle in the store, I also provided maintenance support and \
                 implemented feature updates for these apps.",
                &["Android", "Java", "Kotlin", "Google Play Console"],
            ),
        ],
        projects: vec![
            project(
                "proj1",
                "Temptation SDK",
                "A critical mobile SDK for DPG Media's ecosystem, handling complex user \
                 engagement flows across multiple high-traffic applications.",
                "https://picsum.photos/600/400?random=10",
                &["Android", "SDK", "Kotlin", "Architecture"],
            ),
            project(
                "proj2",
                "Agentic Travel Planner",
                "An experimental AI-powered mobile agent that autonomously plans trips and \
                 itineraries using Gemini, showcasing the future of agentic workflows on mobile.",
                "https://picsum.photos/600/400?random=11",
                &["Gemini API", "Android", "Agentic AI", "AWS"],
            ),
            project(
                "proj3",
                "Client Portfolio",
                "A collection of over 20+ Android applications developed for various clients at \
                 Wisemen, serving thousands of users with robust performance.",
                "https://picsum.photos/600/400?random=12",
                &["Android", "Production", "Mobile"],
            ),
        ],
        chat_greeting: Some(
            "Hi! I'm Jesse's AI Agent. Ask me anything about his mobile development \
             experience or his work in Agentic AI."
                .into(),
        ),
    }
}
