use tracing::warn;

/// Decodes every page and joins them with a newline. Empty on failure,
/// including a panic inside the decoder.
pub(super) fn extract_pdf(content: &[u8]) -> String {
    match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(content)) {
        Ok(Ok(pages)) => join_pages(&pages),
        Ok(Err(e)) => {
            warn!("PDF text extraction failed: {e}");
            String::new()
        }
        Err(_) => {
            warn!("PDF decoder panicked on malformed input");
            String::new()
        }
    }
}

fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .map(|page| page.trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
