use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::cv::CvProfile;

/// The CV currently in use, together with the name it was uploaded under.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentCv {
    pub filename: String,
    pub profile: CvProfile,
}

/// Single-slot "current CV" cache shared by all requests.
///
/// Replace, clear and read are each one lock acquisition, so a reader sees
/// either the previous CV or the new one, never a mix.
#[derive(Clone, Default)]
pub struct CvSlot {
    inner: Arc<RwLock<Option<CurrentCv>>>,
}

impl CvSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `cv`, returning whatever it replaced.
    pub async fn replace(&self, cv: CurrentCv) -> Option<CurrentCv> {
        self.inner.write().await.replace(cv)
    }

    /// Empties the slot. Returns `true` when a CV was removed.
    pub async fn clear(&self) -> bool {
        self.inner.write().await.take().is_some()
    }

    /// A copy of the current CV, if any.
    pub async fn current(&self) -> Option<CurrentCv> {
        self.inner.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::PLACEHOLDER_NAME;

    fn cv(filename: &str) -> CurrentCv {
        CurrentCv {
            filename: filename.to_string(),
            profile: CvProfile {
                raw_text: "text".to_string(),
                structured: None,
                rendered_summary: "summary".to_string(),
                extracted_name: PLACEHOLDER_NAME.to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_slot_lifecycle() {
        let slot = CvSlot::new();
        assert!(slot.current().await.is_none());

        assert!(slot.replace(cv("a.pdf")).await.is_none());
        let previous = slot.replace(cv("b.pdf")).await;
        assert_eq!(previous.map(|c| c.filename).as_deref(), Some("a.pdf"));
        assert_eq!(slot.current().await.unwrap().filename, "b.pdf");

        assert!(slot.clear().await);
        assert!(!slot.clear().await);
        assert!(slot.current().await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_the_slot() {
        let slot = CvSlot::new();
        let handle = slot.clone();
        handle.replace(cv("shared.txt")).await;
        assert_eq!(slot.current().await.unwrap().filename, "shared.txt");
    }
}
