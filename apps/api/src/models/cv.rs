use serde::{Deserialize, Deserializer, Serialize};

/// Stand-in applicant name used whenever a real name cannot be extracted.
pub const PLACEHOLDER_NAME: &str = "[Your Name]";

/// Structured and textual summary of an uploaded CV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvProfile {
    pub raw_text: String,
    pub structured: Option<StructuredCv>,
    pub rendered_summary: String,
    /// Defaults to `PLACEHOLDER_NAME`.
    pub extracted_name: String,
}

/// The JSON shape the CV parsing prompt asks the model for.
/// Every field defaults so partially filled answers still parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredCv {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_as_default")]
    pub work_experience: Vec<WorkExperience>,
    #[serde(deserialize_with = "null_as_default")]
    pub technical_skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<CvProject>,
    #[serde(deserialize_with = "null_as_default")]
    pub languages: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub achievements: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub soft_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_default")]
    pub institution: String,
    pub period: Option<String>,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkExperience {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    pub period: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CvProject {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
}

/// Models often emit `null` for unknown values; treat it like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_cv_tolerates_nulls_and_missing_fields() {
        let json = r#"{
            "name": "Jane Doe",
            "education": [{"degree": null, "institution": "TU Delft"}],
            "technical_skills": null
        }"#;
        let cv: StructuredCv = serde_json::from_str(json).unwrap();
        assert_eq!(cv.name.as_deref(), Some("Jane Doe"));
        assert_eq!(cv.education[0].degree, "");
        assert_eq!(cv.education[0].institution, "TU Delft");
        assert!(cv.technical_skills.is_empty());
        assert!(cv.work_experience.is_empty());
    }
}
