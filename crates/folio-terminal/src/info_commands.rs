//! Informational commands: about, skills, projects, experience, contact,
//! resume, stats, hire.

use folio_content::Skill;
use folio_types::error::Result;
use folio_types::theme::Theme;

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};
use crate::rich::{RichText, Span, Style};

/// Register the informational commands.
pub fn register_info_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(AboutCmd));
    reg.register(Box::new(SkillsCmd));
    reg.register(Box::new(ProjectsCmd));
    reg.register(Box::new(ExperienceCmd));
    reg.register(Box::new(ContactCmd));
    reg.register(Box::new(ResumeCmd));
    reg.register(Box::new(StatsCmd));
    reg.register(Box::new(HireCmd));
}

// ---------------------------------------------------------------------------
// about
// ---------------------------------------------------------------------------

struct AboutCmd;
impl Command for AboutCmd {
    fn name(&self) -> &str {
        "about"
    }
    fn description(&self) -> &str {
        "Who I am"
    }
    fn usage(&self) -> &str {
        "about"
    }
    fn category(&self) -> &str {
        "info"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let profile = &env.content.profile;
        let mut out = RichText::new();
        out.line(Style::Heading, &profile.name).push([
            Span::accent(&profile.title),
            Span::muted(format!(" . {}", profile.location)),
        ]);
        out.blank();
        for paragraph in &profile.bio {
            out.line(Style::Plain, paragraph);
        }
        if !profile.interests.is_empty() {
            out.blank().push([
                Span::muted("Interests: "),
                Span::plain(profile.interests.join(", ")),
            ]);
        }
        Ok(CommandOutput::Rich(out))
    }
}

// ---------------------------------------------------------------------------
// skills
// ---------------------------------------------------------------------------

const BAR_WIDTH: usize = 20;

/// Proficiency bar. The glyphs depend on the theme because the light
/// palette washes out the shaded block characters.
fn skill_bar(skill: &Skill, theme: Theme) -> (String, String) {
    let filled = usize::from(skill.level.min(100)) * BAR_WIDTH / 100;
    let (on, off) = if theme.is_dark() {
        ('█', '░')
    } else {
        ('■', '·')
    };
    (
        std::iter::repeat_n(on, filled).collect(),
        std::iter::repeat_n(off, BAR_WIDTH - filled).collect(),
    )
}

struct SkillsCmd;
impl Command for SkillsCmd {
    fn name(&self) -> &str {
        "skills"
    }
    fn description(&self) -> &str {
        "Technical skills by category"
    }
    fn usage(&self) -> &str {
        "skills"
    }
    fn category(&self) -> &str {
        "info"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let content = env.content;
        let mut out = RichText::new();
        if content.skills.is_empty() {
            out.line(Style::Muted, "No skills listed.");
            return Ok(CommandOutput::Rich(out));
        }
        for (i, category) in content.skill_categories().into_iter().enumerate() {
            if i > 0 {
                out.blank();
            }
            out.line(Style::Heading, category);
            for skill in content.skills_in(category) {
                let (on, off) = skill_bar(skill, env.theme);
                out.push([
                    Span::plain(format!("  {:<16}", skill.name)),
                    Span::success(on),
                    Span::muted(off),
                    Span::muted(format!(" {:>3}%", skill.level)),
                ]);
            }
        }
        Ok(CommandOutput::Rich(out))
    }
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

struct ProjectsCmd;
impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        "projects"
    }
    fn description(&self) -> &str {
        "Selected projects"
    }
    fn usage(&self) -> &str {
        "projects"
    }
    fn category(&self) -> &str {
        "info"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut out = RichText::new();
        if env.content.projects.is_empty() {
            out.line(Style::Muted, "No projects yet.");
            return Ok(CommandOutput::Rich(out));
        }
        // Featured projects first, content order otherwise.
        let mut projects: Vec<_> = env.content.projects.iter().collect();
        projects.sort_by_key(|p| !p.featured);

        for (i, project) in projects.into_iter().enumerate() {
            if i > 0 {
                out.blank();
            }
            let mut title = vec![Span::heading(&project.title)];
            if let Some(year) = project.year {
                title.push(Span::muted(format!(" ({year})")));
            }
            if project.featured {
                title.push(Span::warning(" *"));
            }
            out.push(title);
            out.push([Span::plain(format!("  {}", project.description))]);
            if !project.technologies.is_empty() {
                out.push([
                    Span::muted("  stack: "),
                    Span::accent(project.technologies.join(", ")),
                ]);
            }
            if let Some(url) = &project.url {
                out.push([Span::muted("  live:  "), Span::link(url)]);
            }
            if let Some(repo) = &project.repo {
                out.push([Span::muted("  code:  "), Span::link(repo)]);
            }
        }
        Ok(CommandOutput::Rich(out))
    }
}

// ---------------------------------------------------------------------------
// experience
// ---------------------------------------------------------------------------

struct ExperienceCmd;
impl Command for ExperienceCmd {
    fn name(&self) -> &str {
        "experience"
    }
    fn description(&self) -> &str {
        "Work history"
    }
    fn usage(&self) -> &str {
        "experience"
    }
    fn category(&self) -> &str {
        "info"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut out = RichText::new();
        if env.content.experience.is_empty() {
            out.line(Style::Muted, "No work history listed.");
            return Ok(CommandOutput::Rich(out));
        }
        for (i, job) in env.content.experience.iter().enumerate() {
            if i > 0 {
                out.blank();
            }
            out.push([
                Span::heading(&job.role),
                Span::plain(" @ "),
                Span::accent(&job.company),
            ]);
            let place = match &job.location {
                Some(location) => format!("  {} . {location}", job.period),
                None => format!("  {}", job.period),
            };
            out.line(Style::Muted, place);
            if !job.summary.is_empty() {
                out.line(Style::Plain, format!("  {}", job.summary));
            }
            for highlight in &job.highlights {
                out.push([Span::success("  + "), Span::plain(highlight)]);
            }
        }
        Ok(CommandOutput::Rich(out))
    }
}

// ---------------------------------------------------------------------------
// contact
// ---------------------------------------------------------------------------

struct ContactCmd;
impl Command for ContactCmd {
    fn name(&self) -> &str {
        "contact"
    }
    fn description(&self) -> &str {
        "How to reach me"
    }
    fn usage(&self) -> &str {
        "contact"
    }
    fn category(&self) -> &str {
        "info"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let profile = &env.content.profile;
        let mut out = RichText::new();
        out.line(Style::Heading, "Contact");
        out.push([
            Span::muted("  email     "),
            Span::link(format!("mailto:{}", profile.email)),
        ]);
        let links = [
            ("github", &profile.github),
            ("linkedin", &profile.linkedin),
            ("website", &profile.website),
        ];
        for (label, link) in links {
            if let Some(url) = link {
                out.push([Span::muted(format!("  {label:<10}")), Span::link(url)]);
            }
        }
        Ok(CommandOutput::Rich(out))
    }
}

// ---------------------------------------------------------------------------
// resume
// ---------------------------------------------------------------------------

struct ResumeCmd;
impl Command for ResumeCmd {
    fn name(&self) -> &str {
        "resume"
    }
    fn description(&self) -> &str {
        "Link to my resume"
    }
    fn usage(&self) -> &str {
        "resume"
    }
    fn category(&self) -> &str {
        "info"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut out = RichText::new();
        match &env.content.profile.resume_url {
            Some(url) => {
                out.push([Span::plain("Resume: "), Span::link(url)]);
            },
            None => {
                out.push([
                    Span::muted("No resume published. Try "),
                    Span::command("contact"),
                    Span::muted(" instead."),
                ]);
            },
        }
        Ok(CommandOutput::Rich(out))
    }
}

// ---------------------------------------------------------------------------
// stats
// ---------------------------------------------------------------------------

struct StatsCmd;
impl Command for StatsCmd {
    fn name(&self) -> &str {
        "stats"
    }
    fn description(&self) -> &str {
        "Portfolio at a glance"
    }
    fn usage(&self) -> &str {
        "stats"
    }
    fn category(&self) -> &str {
        "info"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let content = env.content;
        let rows = [
            ("years of experience", content.profile.years_experience.to_string()),
            ("projects", content.projects.len().to_string()),
            (
                "featured projects",
                content.projects.iter().filter(|p| p.featured).count().to_string(),
            ),
            ("skills", content.skills.len().to_string()),
            ("technologies used", content.technologies().len().to_string()),
            ("companies", content.experience.len().to_string()),
        ];
        let mut out = RichText::new();
        out.line(Style::Heading, "Stats");
        for (label, value) in rows {
            out.push([Span::muted(format!("  {label:<22}")), Span::accent(value)]);
        }
        Ok(CommandOutput::Rich(out))
    }
}

// ---------------------------------------------------------------------------
// hire
// ---------------------------------------------------------------------------

struct HireCmd;
impl Command for HireCmd {
    fn name(&self) -> &str {
        "hire"
    }
    fn description(&self) -> &str {
        "Availability for new work"
    }
    fn usage(&self) -> &str {
        "hire"
    }
    fn category(&self) -> &str {
        "info"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let profile = &env.content.profile;
        let mut out = RichText::new();
        if profile.available {
            out.line(Style::Success, "Available for new opportunities.");
        } else {
            out.line(Style::Warning, "Not actively looking, but happy to chat.");
        }
        out.push([
            Span::plain("Write to "),
            Span::link(&profile.email),
            Span::plain(" or run "),
            Span::command("nav contact"),
            Span::plain("."),
        ]);
        Ok(CommandOutput::Rich(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{exec_with, text};

    #[test]
    fn about_shows_profile() {
        let out = text("about");
        assert!(out.starts_with("Jordan Avery"));
        assert!(out.contains("Full-Stack Software Engineer"));
        assert!(out.contains("Interests:"));
    }

    #[test]
    fn skills_grouped_in_content_order() {
        let out = text("skills");
        let languages = out.find("Languages").unwrap();
        let devops = out.find("DevOps").unwrap();
        assert!(languages < devops);
        assert!(out.contains("TypeScript"));
        assert!(out.contains(" 95%"));
    }

    #[test]
    fn skill_bar_width_is_constant() {
        let skill = Skill {
            name: "Rust".into(),
            category: "Languages".into(),
            level: 80,
        };
        for theme in [Theme::Dark, Theme::Light] {
            let (on, off) = skill_bar(&skill, theme);
            assert_eq!(on.chars().count(), 16);
            assert_eq!(on.chars().count() + off.chars().count(), BAR_WIDTH);
        }
    }

    #[test]
    fn skills_glyphs_follow_theme() {
        let render = |theme| match exec_with("skills", theme, 1, 0).unwrap() {
            CommandOutput::Rich(r) => r.plain_text(),
            other => panic!("expected rich output, got {other:?}"),
        };
        assert!(render(Theme::Dark).contains('█'));
        assert!(render(Theme::Light).contains('■'));
    }

    #[test]
    fn projects_featured_first() {
        let out = text("projects");
        assert!(out.find("Orbit Portfolio").unwrap() < out.find("Ledgerline").unwrap());
        assert!(out.contains("stack: React, TypeScript"));
        assert!(out.contains("https://github.com/jordanavery/shipyard"));
    }

    #[test]
    fn experience_lists_highlights() {
        let out = text("experience");
        assert!(out.contains("Senior Software Engineer @ Northwind Labs"));
        assert!(out.contains("+ Designed the presence"));
        assert!(out.find("Northwind").unwrap() < out.find("Studio Quarto").unwrap());
    }

    #[test]
    fn contact_has_links() {
        let out = text("contact");
        assert!(out.contains("mailto:hello@jordanavery.dev"));
        assert!(out.contains("github"));
    }

    #[test]
    fn resume_link() {
        assert!(text("resume").contains("resume.pdf"));
    }

    #[test]
    fn stats_counts_content() {
        let out = text("stats");
        assert!(out.contains("projects"));
        assert!(out.lines().any(|l| l.contains("skills") && l.trim_end().ends_with("16")));
        assert!(out.lines().any(|l| l.contains("years") && l.trim_end().ends_with('7')));
    }

    #[test]
    fn hire_reports_availability() {
        let out = text("hire");
        assert!(out.contains("Available"));
        assert!(out.contains("nav contact"));
    }
}
