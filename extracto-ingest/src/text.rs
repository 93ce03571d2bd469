//! PDF-to-text collaborators.
//!
//! The parser only ever sees page text. Anything that can turn a file into
//! an ordered list of pages implements [`TextExtractor`].

use anyhow::{Context, Result, anyhow};
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

/// Page separator written by `pdftotext`.
const FORM_FEED: char = '\x0c';

pub trait TextExtractor: Send + Sync {
    /// Text of each page in reading order.
    fn pages(&self, path: &Path) -> Result<Vec<String>>;
}

/// Extracts page text from PDF files with `pdf_extract`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn pages(&self, path: &Path) -> Result<Vec<String>> {
        let data = fs::read(path).with_context(|| format!("read {}", path.display()))?;

        // pdf_extract panics on some malformed inputs instead of returning errors.
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(&data)
        }));

        match result {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(e)) => Err(anyhow!("PDF extraction failed for {}: {e}", path.display())),
            Err(_) => Err(anyhow!(
                "PDF extraction panicked for {} (malformed document)",
                path.display()
            )),
        }
    }
}

/// Reads text dumps whose pages are separated by form feeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn split_pages(text: &str) -> Vec<String> {
        let mut pages: Vec<String> = text.split(FORM_FEED).map(str::to_string).collect();
        if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
            pages.pop();
        }
        pages
    }
}

impl TextExtractor for PlainTextExtractor {
    fn pages(&self, path: &Path) -> Result<Vec<String>> {
        let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Ok(Self::split_pages(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_split_pages_drops_trailing_form_feed() {
        let pages = PlainTextExtractor::split_pages("one\ntwo\n\x0cthree\n\x0c");
        assert_eq!(pages, vec!["one\ntwo\n".to_string(), "three\n".to_string()]);
    }

    #[test]
    fn test_split_pages_single_page() {
        assert_eq!(PlainTextExtractor::split_pages("only"), vec!["only".to_string()]);
        assert_eq!(PlainTextExtractor::split_pages(""), vec![String::new()]);
    }

    #[test]
    fn test_plain_text_reads_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "a\x0cb").unwrap();
        let pages = PlainTextExtractor.pages(f.path()).unwrap();
        assert_eq!(pages, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_pdf_extractor_rejects_garbage() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"this is not a pdf").unwrap();
        assert!(PdfTextExtractor.pages(f.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = PlainTextExtractor
            .pages(Path::new("/nonexistent/statement.txt"))
            .unwrap_err();
        assert!(err.to_string().contains("statement.txt"));
    }
}
