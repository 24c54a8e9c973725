use crate::models::company::CompanyProfile;

/// Renders the fixed-template, multi-line company summary.
pub fn render_summary(profile: &CompanyProfile) -> String {
    let about = profile.about_url.as_deref().unwrap_or("Not found");
    let clients = join_or(&profile.clients, "None identified");
    let technologies = join_or(
        &profile.technologies.iter().cloned().collect::<Vec<_>>(),
        "None identified",
    );

    let mut summary = format!(
        "Company: {}\n\
         Website: {}\n\
         Description: {}\n\
         About page: {}\n\
         Clients: {}\n\
         Technologies: {}\n\
         Projects:",
        profile.name, profile.source_url, profile.description, about, clients, technologies
    );

    if profile.projects.is_empty() {
        summary.push_str(" None identified");
    } else {
        for project in &profile.projects {
            summary.push_str("\n- ");
            summary.push_str(project);
        }
    }
    summary.push('\n');
    summary
}

fn join_or(items: &[String], empty: &str) -> String {
    if items.is_empty() {
        empty.to_string()
    } else {
        items.join(", ")
    }
}
