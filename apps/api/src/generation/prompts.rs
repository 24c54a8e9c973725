// All LLM prompt templates for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Cover letter prompt template.
/// Replace: {company_name}, {company_description}, {company_noise_instruction},
///          {position}, {user_notes}, {cv_section}, {applicant_name},
///          {junior_role_phrase}, {no_invention_instruction}, {versions}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Generate a casual professional cover letter for the position below.

Company: {company_name}
Company Description: {company_description}
{company_noise_instruction}

Position: {position}
User Notes: {user_notes}

{cv_section}

Applicant name (sign the letter with it): {applicant_name}

Requirements:
- Casual professional tone (IT guy who passed math and physics)
- Direct and practical, no overly flowery language
- Show genuine interest in their technical work
- Include this sentence word for word: "{junior_role_phrase}"
- Reference concrete skills and experience from the CV when one is provided
- Present any missing skills as things the applicant is eager to learn, never as weaknesses
- {no_invention_instruction}

Generate the following versions, each introduced by its numbered header line:
{versions}"#;

/// Version list for the usual two-letter answer.
pub const TWO_VERSIONS: &str = "1. Short (1 paragraph)\n2. Medium (1/4 page)";

/// Version list when the long variant is enabled.
pub const THREE_VERSIONS: &str =
    "1. Short (1 paragraph)\n2. Medium (1/4 page)\n3. Long (1/2 page)";

/// CV block embedded in the cover letter prompt. Replace `{cv_summary}`.
pub const CV_SECTION_TEMPLATE: &str = "Applicant CV summary:\n{cv_summary}";

pub const NO_CV_SECTION: &str =
    "No CV was provided. Keep claims about the applicant general and honest.";

/// Outreach (LinkedIn) message prompt template.
/// Replace: {company_name}, {company_description}, {company_noise_instruction},
///          {applicant_name}, {no_invention_instruction}
pub const OUTREACH_PROMPT_TEMPLATE: &str = r#"Generate a casual LinkedIn message for a spontaneous application.

Company: {company_name}
Company Description: {company_description}
{company_noise_instruction}

Sender name: {applicant_name}

Requirements:
- Casual and friendly tone
- Under 150 words
- Mention that the CV is attached
- Ask to forward the profile to the IT team
- Show enthusiasm for their work
- Direct and practical (IT professional style)
- {no_invention_instruction}"#;
