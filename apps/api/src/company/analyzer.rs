//! HTML Company Analyzer: fetches a company page and derives a profile.
//!
//! Flow: fetch (bounded timeout) → classify HTTP failures → parse DOM →
//! title / description / about link → keyword-window heuristics →
//! meaningful-name check → fixed-template summary.

use reqwest::{Client, StatusCode, Url};
use scraper::{Html, Selector};
use tracing::{info, warn};

use crate::company::heuristics::{
    collapse_whitespace, company_name_from_title, extract_clients, extract_projects,
    extract_technologies, is_meaningful_name, title_error_token, GENERIC_COMPANY_NAME,
    GENERIC_DESCRIPTION, NO_DESCRIPTION,
};
use crate::company::summary::render_summary;
use crate::company::AnalysisError;
use crate::models::company::CompanyProfile;

/// Path fragments that point at an "about us" style page. `over` covers
/// Dutch `over-ons` links.
const ABOUT_LINK_TOKENS: &[&str] = &["about", "over", "company"];

/// Prefixes `https://` when the URL carries no scheme.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Fetches `url` and analyzes the returned markup.
pub async fn analyze(client: &Client, url: &str) -> Result<CompanyProfile, AnalysisError> {
    info!("Analyzing company website: {url}");
    let html = fetch(client, url).await?;
    let profile = analyze_markup(url, &html)?;
    info!(
        "Company analysis done: name={:?}, clients={}, technologies={}, projects={}",
        profile.name,
        profile.clients.len(),
        profile.technologies.len(),
        profile.projects.len()
    );
    Ok(profile)
}

async fn fetch(client: &Client, url: &str) -> Result<String, AnalysisError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_request_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        warn!("Company page {url} returned {status}");
        return Err(classify_status(url, status));
    }

    response
        .text()
        .await
        .map_err(|e| classify_request_error(url, e))
}

fn classify_status(url: &str, status: StatusCode) -> AnalysisError {
    match status {
        StatusCode::FORBIDDEN | StatusCode::UNAUTHORIZED => AnalysisError::AccessDenied {
            url: url.to_string(),
            reason: format!("the server answered {status}"),
        },
        StatusCode::NOT_FOUND | StatusCode::GONE => AnalysisError::NotFound {
            url: url.to_string(),
        },
        _ => AnalysisError::Fetch {
            url: url.to_string(),
            reason: format!("the server answered {status}"),
        },
    }
}

fn classify_request_error(url: &str, error: reqwest::Error) -> AnalysisError {
    if let Some(status) = error.status() {
        return classify_status(url, status);
    }
    let reason = if error.is_timeout() {
        "the request timed out".to_string()
    } else if error.is_connect() {
        format!("could not connect ({error})")
    } else {
        error.to_string()
    };
    AnalysisError::Fetch {
        url: url.to_string(),
        reason,
    }
}

/// Derives a profile from already fetched markup. Pure; never panics.
///
/// A title carrying an error token fails the analysis even though the HTTP
/// status was 2xx: such pages render a client-side error.
pub fn analyze_markup(url: &str, html: &str) -> Result<CompanyProfile, AnalysisError> {
    let document = Html::parse_document(html);

    let title = select_text(&document, "title").unwrap_or_default();
    if let Some(token) = title_error_token(&title) {
        let reason = format!("the page title reads {:?}", title.trim());
        return Err(if token == "error" {
            AnalysisError::Fetch {
                url: url.to_string(),
                reason,
            }
        } else {
            AnalysisError::AccessDenied {
                url: url.to_string(),
                reason,
            }
        });
    }

    let candidate_name = company_name_from_title(&title);
    let description = meta_description(&document).unwrap_or_else(|| NO_DESCRIPTION.to_string());
    let about_url = about_link(&document, url);

    let page_text = select_text(&document, "body").unwrap_or_else(|| {
        collapse_whitespace(&document.root_element().text().collect::<Vec<_>>().join(" "))
    });

    let clients = extract_clients(&page_text);
    let technologies = extract_technologies(&page_text);
    let projects = extract_projects(&page_text);

    let (name, description) = if is_meaningful_name(&candidate_name) {
        (candidate_name, description)
    } else {
        warn!("No meaningful company name in {url} (title {title:?}); using generic placeholder");
        (
            GENERIC_COMPANY_NAME.to_string(),
            GENERIC_DESCRIPTION.to_string(),
        )
    };

    let mut profile = CompanyProfile {
        name,
        description,
        about_url,
        source_url: url.to_string(),
        summary_text: String::new(),
        clients,
        technologies,
        projects,
    };
    profile.summary_text = render_summary(&profile);
    Ok(profile)
}

/// Whitespace-collapsed text of the first element matching `selector`.
fn select_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .map(|element| collapse_whitespace(&element.text().collect::<Vec<_>>().join(" ")))
}

fn meta_description(document: &Html) -> Option<String> {
    let selector = Selector::parse("meta[name]").ok()?;
    document
        .select(&selector)
        .find(|meta| {
            meta.value()
                .attr("name")
                .is_some_and(|name| name.eq_ignore_ascii_case("description"))
        })
        .and_then(|meta| meta.value().attr("content"))
        .map(collapse_whitespace)
        .filter(|content| !content.is_empty())
}

/// First anchor whose href looks like an about page, resolved against the
/// page URL when relative.
fn about_link(document: &Html, page_url: &str) -> Option<String> {
    let selector = Selector::parse("a[href]").ok()?;
    let href = document
        .select(&selector)
        .filter_map(|a| a.value().attr("href"))
        .find(|href| {
            let lower = href.to_lowercase();
            ABOUT_LINK_TOKENS.iter().any(|token| lower.contains(token))
        })?;

    let resolved = Url::parse(page_url)
        .and_then(|base| base.join(href))
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string());
    Some(resolved)
}
