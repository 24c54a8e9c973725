//! Content Generator: builds prompts from the company profile, the current
//! CV and the user's inputs, and turns model answers into letters.
//!
//! One model call for all cover-letter variants, one for the outreach message.

use tracing::{info, warn};

use crate::generation::prompts::{
    COVER_LETTER_PROMPT_TEMPLATE, CV_SECTION_TEMPLATE, NO_CV_SECTION, OUTREACH_PROMPT_TEMPLATE,
    THREE_VERSIONS, TWO_VERSIONS,
};
use crate::generation::splitter::SectionSplitter;
use crate::generation::GenerationError;
use crate::llm_client::prompts::{
    COMPANY_NOISE_INSTRUCTION, JUNIOR_ROLE_PHRASE, NO_INVENTION_INSTRUCTION,
};
use crate::llm_client::LanguageModel;
use crate::models::company::CompanyProfile;
use crate::models::content::LetterVariants;
use crate::models::cv::CvProfile;

pub const DEFAULT_POSITION: &str = "junior developer";

/// Inputs for one cover-letter generation.
#[derive(Debug, Clone, Copy)]
pub struct CoverLetterRequest<'a> {
    pub company: &'a CompanyProfile,
    pub cv: Option<&'a CvProfile>,
    pub position: &'a str,
    pub notes: &'a str,
    pub applicant_name: &'a str,
    /// Ask for the half-page variant too.
    pub include_long: bool,
}

pub async fn generate_cover_letters(
    llm: &dyn LanguageModel,
    splitter: &dyn SectionSplitter,
    request: &CoverLetterRequest<'_>,
) -> Result<LetterVariants, GenerationError> {
    info!(
        "Generating cover letters for {:?} (position: {}, cv: {})",
        request.company.name,
        request.position,
        request.cv.is_some()
    );

    let prompt = build_cover_letter_prompt(request);
    let answer = llm
        .complete(&prompt)
        .await
        .map_err(GenerationError::CoverLetter)?;

    let letters = splitter.split(&answer);
    if letters.short.trim().is_empty() && letters.medium.trim().is_empty() {
        warn!("Cover letter answer split into empty sections");
        return Err(GenerationError::EmptySections);
    }
    Ok(letters)
}

pub async fn generate_outreach_message(
    llm: &dyn LanguageModel,
    company: &CompanyProfile,
    applicant_name: &str,
) -> Result<String, GenerationError> {
    info!("Generating outreach message for {:?}", company.name);
    let prompt = build_outreach_prompt(company, applicant_name);
    llm.complete(&prompt)
        .await
        .map(|message| message.trim().to_string())
        .map_err(GenerationError::Outreach)
}

fn build_cover_letter_prompt(request: &CoverLetterRequest<'_>) -> String {
    let cv_section = match request.cv {
        Some(cv) if !cv.rendered_summary.trim().is_empty() => {
            CV_SECTION_TEMPLATE.replace("{cv_summary}", cv.rendered_summary.trim())
        }
        _ => NO_CV_SECTION.to_string(),
    };
    let notes = if request.notes.trim().is_empty() {
        "None"
    } else {
        request.notes.trim()
    };
    let versions = if request.include_long {
        THREE_VERSIONS
    } else {
        TWO_VERSIONS
    };

    // Fixed fragments first, user-supplied text last.
    COVER_LETTER_PROMPT_TEMPLATE
        .replace("{company_noise_instruction}", COMPANY_NOISE_INSTRUCTION)
        .replace("{no_invention_instruction}", NO_INVENTION_INSTRUCTION)
        .replace("{junior_role_phrase}", JUNIOR_ROLE_PHRASE)
        .replace("{versions}", versions)
        .replace("{company_name}", &request.company.name)
        .replace("{company_description}", &request.company.description)
        .replace("{applicant_name}", request.applicant_name)
        .replace("{position}", request.position)
        .replace("{user_notes}", notes)
        .replace("{cv_section}", &cv_section)
}

fn build_outreach_prompt(company: &CompanyProfile, applicant_name: &str) -> String {
    OUTREACH_PROMPT_TEMPLATE
        .replace("{company_noise_instruction}", COMPANY_NOISE_INSTRUCTION)
        .replace("{no_invention_instruction}", NO_INVENTION_INSTRUCTION)
        .replace("{applicant_name}", applicant_name)
        .replace("{company_name}", &company.name)
        .replace("{company_description}", &company.description)
}
