use crate::models::cv::StructuredCv;

/// Flattens a structured CV into the human-readable block that is embedded
/// in generation prompts and returned by `/cv-status`.
pub fn render_cv_summary(cv: &StructuredCv) -> String {
    let mut lines: Vec<String> = Vec::new();

    for (label, value) in [
        ("Name", &cv.name),
        ("Email", &cv.email),
        ("Phone", &cv.phone),
        ("Location", &cv.location),
    ] {
        if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            lines.push(format!("{label}: {value}"));
        }
    }

    if !cv.education.is_empty() {
        lines.push("Education:".to_string());
        for edu in &cv.education {
            let mut line = format!("- {}", at(&edu.degree, &edu.institution));
            if let Some(period) = non_empty(&edu.period) {
                line.push_str(&format!(" ({period})"));
            }
            lines.push(line);
            if let Some(details) = non_empty(&edu.details) {
                lines.push(format!("  {details}"));
            }
        }
    }

    if !cv.work_experience.is_empty() {
        lines.push("Work Experience:".to_string());
        for job in &cv.work_experience {
            let mut line = format!("- {}", at(&job.title, &job.company));
            if let Some(period) = non_empty(&job.period) {
                line.push_str(&format!(" ({period})"));
            }
            lines.push(line);
            for responsibility in &job.responsibilities {
                lines.push(format!("  * {responsibility}"));
            }
        }
    }

    push_list(&mut lines, "Technical Skills", &cv.technical_skills);

    if !cv.projects.is_empty() {
        lines.push("Projects:".to_string());
        for project in &cv.projects {
            let mut line = format!("- {}", project.name.trim());
            if !project.description.trim().is_empty() {
                line.push_str(&format!(": {}", project.description.trim()));
            }
            if !project.technologies.is_empty() {
                line.push_str(&format!(" ({})", project.technologies.join(", ")));
            }
            lines.push(line);
        }
    }

    push_list(&mut lines, "Languages", &cv.languages);
    push_list(&mut lines, "Achievements", &cv.achievements);
    push_list(&mut lines, "Certifications", &cv.certifications);
    push_list(&mut lines, "Soft Skills", &cv.soft_skills);

    lines.join("\n")
}

fn at(role: &str, place: &str) -> String {
    match (role.trim(), place.trim()) {
        ("", place) => place.to_string(),
        (role, "") => role.to_string(),
        (role, place) => format!("{role} at {place}"),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn push_list(lines: &mut Vec<String>, label: &str, items: &[String]) {
    if !items.is_empty() {
        lines.push(format!("{label}: {}", items.join(", ")));
    }
}
