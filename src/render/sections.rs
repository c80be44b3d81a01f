//! Portfolio section views.
//!
//! One pure function per homepage section, each mapping a slice of
//! [`SiteData`] to an HTML fragment. No function here touches the page;
//! the caller injects the fragment into its container.

use crate::content::site::{Contact, Education, Experience, Project, SiteData, SkillGroup};
use crate::utils::html::escape_html;
use std::fmt::Write;

/// Hero/landing section.
pub fn hero(data: &SiteData) -> String {
    format!(
        r##"<section class="hero">
  <div class="container">
    <div class="hero-content">
      <div class="hero-label">{title}</div>
      <h1 class="hero-title">{name}</h1>
      <p class="hero-subtitle">{subtitle}</p>
      <p class="hero-description">{summary}</p>
      <div class="cta-buttons">
        <a href="#contact" class="btn btn-primary"><span>Get In Touch</span></a>
        <a href="/blog/" class="btn btn-secondary">Read Blog</a>
      </div>
    </div>
  </div>
</section>"##,
        title = escape_html(&data.personal.title),
        name = format_name(&data.personal.name),
        subtitle = escape_html(&data.personal.subtitle),
        summary = escape_html(&data.about.summary),
    )
}

/// Split a full name onto two lines: first two words, then the rest.
fn format_name(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    if parts.len() <= 2 {
        return escape_html(name).into_owned();
    }
    format!(
        "{}<br>{}",
        escape_html(&parts[..2].join(" ")),
        escape_html(&parts[2..].join(" "))
    )
}

/// About section: highlight cards plus the achievements list.
pub fn about(data: &SiteData) -> String {
    let highlights = data
        .about
        .highlights
        .iter()
        .map(|item| {
            format!(
                r#"<div class="highlight-card fade-in">
  <div class="highlight-icon">{icon}</div>
  <h3 class="highlight-title">{title}</h3>
  <p class="highlight-description">{description}</p>
</div>"#,
                icon = escape_html(&item.icon),
                title = escape_html(&item.title),
                description = escape_html(&item.description),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let achievements = data
        .about
        .achievements
        .iter()
        .map(|a| format!("<li>{}</li>", escape_html(a)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section class="section" id="about">
  <div class="container">
    <h2 class="section-title fade-in">ABOUT ME</h2>
    <div class="about-content">
      <div class="highlights-grid">
{highlights}
      </div>
      <div class="achievements-section fade-in">
        <h3 class="achievements-title">Key Achievements</h3>
        <ul class="achievements-list">
{achievements}
        </ul>
      </div>
    </div>
  </div>
</section>"#
    )
}

/// Professional experience section.
pub fn experience(data: &SiteData) -> String {
    let cards = data
        .experience
        .iter()
        .map(experience_card)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section class="section" id="experience">
  <div class="container">
    <h2 class="section-title fade-in">EXPERIENCE</h2>
    <div class="experience-grid">
{cards}
    </div>
  </div>
</section>"#
    )
}

fn experience_card(exp: &Experience) -> String {
    let bullets = exp
        .description
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<div class="experience-card fade-in">
  <div class="experience-header">
    <div>
      <h3 class="experience-title">{title}</h3>
      <p class="experience-company">{company}</p>
    </div>
    <div class="experience-date">{period}</div>
  </div>
  <div class="experience-description"><ul>
{bullets}
  </ul></div>
</div>"#,
        title = escape_html(&exp.title),
        company = escape_html(&exp.company),
        period = escape_html(&exp.period),
    )
}

/// Key projects section.
pub fn projects(data: &SiteData) -> String {
    let cards = data
        .projects
        .iter()
        .map(project_card)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section class="section" id="projects">
  <div class="container">
    <h2 class="section-title fade-in">KEY PROJECTS</h2>
    <div class="projects-grid">
{cards}
    </div>
  </div>
</section>"#
    )
}

fn project_card(project: &Project) -> String {
    let mut metrics = String::new();
    for metric in &project.metrics {
        write!(
            metrics,
            r#"<div class="metric"><span class="metric-value">{}</span><span class="metric-label">{}</span></div>"#,
            escape_html(&metric.value),
            escape_html(&metric.label),
        )
        .unwrap();
    }

    format!(
        r#"<div class="project-card fade-in">
  <div class="project-number">{number}</div>
  <h3 class="project-title">{title}</h3>
  <p class="project-company">{company}</p>
  <p class="project-description">{description}</p>
  <div class="project-metrics">{metrics}</div>
</div>"#,
        number = escape_html(&project.number),
        title = escape_html(&project.title),
        company = escape_html(&project.company),
        description = escape_html(&project.description),
    )
}

/// Technical skills section.
pub fn skills(data: &SiteData) -> String {
    let categories = data
        .skills
        .iter()
        .map(skill_category)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section class="section" id="skills">
  <div class="container">
    <h2 class="section-title fade-in">TECHNICAL SKILLS</h2>
    <div class="skills-container">
{categories}
    </div>
  </div>
</section>"#
    )
}

fn skill_category(group: &SkillGroup) -> String {
    let tags = group
        .tags
        .iter()
        .map(|tag| format!(r#"<span class="skill-tag">{}</span>"#, escape_html(tag)))
        .collect::<Vec<_>>()
        .join("");

    format!(
        r#"<div class="skill-category fade-in">
  <h3>{category}</h3>
  <div class="skill-tags">{tags}</div>
</div>"#,
        category = escape_html(&group.category),
    )
}

/// Education timeline section.
pub fn education(data: &SiteData) -> String {
    let items = data
        .education
        .iter()
        .map(education_item)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section class="section" id="education">
  <div class="container">
    <h2 class="section-title fade-in">EDUCATION</h2>
    <div class="education-timeline">
{items}
    </div>
  </div>
</section>"#
    )
}

fn education_item(edu: &Education) -> String {
    format!(
        r#"<div class="education-item fade-in">
  <h3 class="education-degree">{degree}</h3>
  <p class="education-school">{school}</p>
  <p class="education-date">{period}</p>
  <p class="education-details">{details}</p>
</div>"#,
        degree = escape_html(&edu.degree),
        school = escape_html(&edu.school),
        period = escape_html(&edu.period),
        details = escape_html(&edu.details),
    )
}

/// Contact section.
pub fn contact(data: &SiteData) -> String {
    let cards = data
        .contact
        .iter()
        .map(contact_card)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section class="section" id="contact">
  <div class="container">
    <h2 class="section-title fade-in">GET IN TOUCH</h2>
    <div class="contact-grid">
{cards}
    </div>
  </div>
</section>"#
    )
}

fn contact_card(item: &Contact) -> String {
    // External links open in a new tab
    let target = if item.link.starts_with("http") {
        r#" target="_blank""#
    } else {
        ""
    };

    format!(
        r#"<a href="{link}" class="contact-card fade-in"{target}>
  <div class="contact-icon">{icon}</div>
  <div class="contact-label">{label}</div>
  <div class="contact-value">{value}</div>
</a>"#,
        link = escape_html(&item.link),
        icon = escape_html(&item.icon),
        label = escape_html(&item.label),
        value = escape_html(&item.value),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::site::SiteData;

    fn sample_data() -> SiteData {
        SiteData::from_str(include_str!("../embed/site.toml")).unwrap()
    }

    #[test]
    fn test_hero_contains_name_and_subtitle() {
        let data = sample_data();
        let html = hero(&data);

        assert!(html.contains("Igor Caetano"));
        assert!(html.contains(&*escape_html(&data.personal.subtitle)));
        assert!(html.contains(r#"class="hero""#));
    }

    #[test]
    fn test_format_name_splits_after_two_words() {
        assert_eq!(
            format_name("Igor Caetano Diniz"),
            "Igor Caetano<br>Diniz"
        );
        assert_eq!(format_name("Alice Smith"), "Alice Smith");
        assert_eq!(format_name("Plato"), "Plato");
    }

    #[test]
    fn test_about_renders_all_highlights() {
        let data = sample_data();
        let html = about(&data);

        for highlight in &data.about.highlights {
            assert!(html.contains(&*escape_html(&highlight.title)));
        }
        for achievement in &data.about.achievements {
            assert!(html.contains(&*escape_html(achievement)));
        }
    }

    #[test]
    fn test_experience_renders_bullets() {
        let data = sample_data();
        let html = experience(&data);

        assert!(html.contains("HVAR"));
        assert!(html.contains("<li>"));
        assert_eq!(
            html.matches(r#"class="experience-card fade-in""#).count(),
            data.experience.len()
        );
    }

    #[test]
    fn test_projects_renders_metrics() {
        let data = sample_data();
        let html = projects(&data);

        assert!(html.contains("Anomaly Detection System"));
        assert!(html.contains("80%+"));
        assert!(html.contains(r#"class="metric-label""#));
    }

    #[test]
    fn test_skills_renders_tags() {
        let data = sample_data();
        let html = skills(&data);

        assert!(html.contains("Machine Learning &amp; AI"));
        assert!(html.contains(r#"<span class="skill-tag">Python</span>"#));
    }

    #[test]
    fn test_education_renders_items() {
        let data = sample_data();
        let html = education(&data);

        assert!(html.contains("Ph.D. in Data Science"));
        assert_eq!(
            html.matches(r#"class="education-item fade-in""#).count(),
            data.education.len()
        );
    }

    #[test]
    fn test_contact_external_links_open_new_tab() {
        let data = sample_data();
        let html = contact(&data);

        assert!(html.contains(r#"href="mailto:icaetanodiniz@gmail.com" class="contact-card fade-in">"#));
        assert!(html.contains(r#"target="_blank""#));
    }

    #[test]
    fn test_sections_escape_user_data() {
        let mut data = SiteData::default();
        data.personal.name = "Evil <script>".into();
        let html = hero(&data);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
