//! Section splitter: divides one generated block into named letter variants.
//!
//! `KeywordSectionSplitter` scans line by line. A line containing "short"
//! or "1." selects the short section, "medium" or "2." the medium one (and,
//! when enabled, "long" or "3." the long one); every other line is appended
//! to the selected section. Marker lines are dropped.
//!
//! Known limitation: a body line that happens to contain one of the markers
//! ("a short while", "1.5 years") is treated as a marker and lost.

use crate::models::content::LetterVariants;

/// Seam for replacing the splitting heuristic without touching callers.
pub trait SectionSplitter: Send + Sync {
    fn split(&self, text: &str) -> LetterVariants;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Short,
    Medium,
    Long,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordSectionSplitter {
    include_long: bool,
}

impl KeywordSectionSplitter {
    pub fn new(include_long: bool) -> Self {
        Self { include_long }
    }

    fn marker(&self, line: &str) -> Option<Section> {
        let lower = line.to_lowercase();
        if lower.contains("short") || line.contains("1.") {
            Some(Section::Short)
        } else if lower.contains("medium") || line.contains("2.") {
            Some(Section::Medium)
        } else if self.include_long && (lower.contains("long") || line.contains("3.")) {
            Some(Section::Long)
        } else {
            None
        }
    }
}

impl SectionSplitter for KeywordSectionSplitter {
    fn split(&self, text: &str) -> LetterVariants {
        let mut short = String::new();
        let mut medium = String::new();
        let mut long = String::new();
        let mut current = Section::Short;

        for line in text.split('\n') {
            if let Some(section) = self.marker(line) {
                current = section;
                continue;
            }
            let buffer = match current {
                Section::Short => &mut short,
                Section::Medium => &mut medium,
                Section::Long => &mut long,
            };
            buffer.push_str(line);
            buffer.push('\n');
        }

        LetterVariants {
            short,
            medium,
            long: self.include_long.then_some(long),
        }
    }
}
