use serde::{Deserialize, Serialize};

/// Named cover-letter variants produced by the section splitter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterVariants {
    pub short: String,
    pub medium: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
}

/// Everything one `/generate` call produces. Never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedContent {
    pub short: String,
    pub medium: String,
    pub long: Option<String>,
    pub outreach_message: String,
}

impl GeneratedContent {
    pub fn new(letters: LetterVariants, outreach_message: String) -> Self {
        Self {
            short: letters.short,
            medium: letters.medium,
            long: letters.long,
            outreach_message,
        }
    }

    pub fn letters(&self) -> LetterVariants {
        LetterVariants {
            short: self.short.clone(),
            medium: self.medium.clone(),
            long: self.long.clone(),
        }
    }
}
