// CV parsing prompt. The answer must follow the StructuredCv JSON shape.

/// CV parsing prompt template. Replace `{cv_text}` before sending.
pub const CV_PARSE_PROMPT_TEMPLATE: &str = r#"You are a precise CV/resume parser.
Read the CV below and return its content as a JSON object with this EXACT schema:
{
  "name": "Full name" | null,
  "email": "email address" | null,
  "phone": "phone number" | null,
  "location": "city, country" | null,
  "education": [
    {"degree": "string", "institution": "string", "period": "2019 - 2022" | null, "details": "string" | null}
  ],
  "work_experience": [
    {"title": "string", "company": "string", "period": "string" | null, "responsibilities": ["string"]}
  ],
  "technical_skills": ["string"],
  "projects": [
    {"name": "string", "description": "string", "technologies": ["string"]}
  ],
  "languages": ["English (fluent)"],
  "achievements": ["string"],
  "certifications": ["string"],
  "soft_skills": ["string"]
}

RULES:
1. Respond with the JSON object only. No markdown fences, no explanations.
2. Use ONLY information present in the CV. Use null or [] when something is missing.
3. Keep every list item short and factual.

CV TEXT:
{cv_text}"#;
