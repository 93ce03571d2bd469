//! Per-document extraction and multi-document batches.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::parsers::movimientos::extract;
use crate::text::TextExtractor;
use crate::types::TransactionRecord;

/// Transient files always look like PDFs, whatever the client named them.
const TEMP_SUFFIX: &str = ".pdf";

/// One uploaded statement.
#[derive(Debug, Clone)]
pub struct Upload {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Run the text collaborator on `path`, then scan its pages.
pub fn extract_from_path(
    extractor: &dyn TextExtractor,
    path: &Path,
) -> Result<Vec<TransactionRecord>> {
    let pages = extractor
        .pages(path)
        .with_context(|| format!("extracting text from {}", path.display()))?;
    Ok(extract(&pages))
}

/// Write `bytes` to a temp file and parse it. The file is removed on return, success or not.
pub fn extract_from_bytes(
    extractor: &dyn TextExtractor,
    bytes: &[u8],
) -> Result<Vec<TransactionRecord>> {
    let mut tmp = tempfile::Builder::new()
        .prefix("extracto-")
        .suffix(TEMP_SUFFIX)
        .tempfile()
        .context("creating temp file")?;
    tmp.write_all(bytes).context("writing temp file")?;
    tmp.flush().context("flushing temp file")?;

    extract_from_path(extractor, tmp.path())
}

/// Parse each upload once, in order, into one flat list.
///
/// Records carry no document attribution. Any failing document fails the batch.
pub fn extract_batch(
    extractor: &dyn TextExtractor,
    uploads: &[Upload],
) -> Result<Vec<TransactionRecord>> {
    let mut all = Vec::new();

    for upload in uploads {
        let txns = extract_from_bytes(extractor, &upload.bytes)
            .with_context(|| format!("parsing {}", upload.name))?;
        info!(
            document = %upload.name,
            size = upload.bytes.len(),
            records = txns.len(),
            "statement parsed"
        );
        all.extend(txns);
    }

    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// Records which paths it was handed, then defers to plain text.
    #[derive(Default)]
    struct RecordingExtractor {
        seen: Mutex<Vec<PathBuf>>,
    }

    impl TextExtractor for RecordingExtractor {
        fn pages(&self, path: &Path) -> Result<Vec<String>> {
            self.seen.lock().unwrap().push(path.to_path_buf());
            crate::text::PlainTextExtractor.pages(path)
        }
    }

    struct FailingExtractor;

    impl TextExtractor for FailingExtractor {
        fn pages(&self, path: &Path) -> Result<Vec<String>> {
            anyhow::bail!("cannot decode {}", path.display())
        }
    }

    const PAGE: &str = "Detalle de Movimientos Realizados\n\
                        15/JAN 16/JAN 001 PAGO SERVICIO 1,234.56\n\
                        Total de Movimientos\n";

    #[test]
    fn test_temp_file_is_pdf_whatever_the_upload_name() {
        let extractor = RecordingExtractor::default();
        let uploads = vec![Upload::new("dump.txt", PAGE), Upload::new("sin-extension", PAGE)];
        let txns = extract_batch(&extractor, &uploads).unwrap();
        assert_eq!(txns.len(), 2);

        let seen = extractor.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen.iter().all(|p| p.to_string_lossy().ends_with(".pdf")));
    }

    #[test]
    fn test_temp_file_removed_after_success() {
        let extractor = RecordingExtractor::default();
        let txns = extract_from_bytes(&extractor, PAGE.as_bytes()).unwrap();
        assert_eq!(txns.len(), 1);

        let seen = extractor.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].to_string_lossy().ends_with(".pdf"));
        assert!(!seen[0].exists(), "temp file should be gone");
    }

    #[test]
    fn test_temp_file_removed_after_failure() {
        struct FailAndRemember(Mutex<Option<PathBuf>>);
        impl TextExtractor for FailAndRemember {
            fn pages(&self, path: &Path) -> Result<Vec<String>> {
                *self.0.lock().unwrap() = Some(path.to_path_buf());
                anyhow::bail!("broken")
            }
        }

        let extractor = FailAndRemember(Mutex::new(None));
        assert!(extract_from_bytes(&extractor, b"%PDF-garbage").is_err());
        let path = extractor.0.lock().unwrap().clone().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_batch_failure_names_document() {
        let uploads = vec![Upload::new("enero.pdf", PAGE)];
        let err = extract_batch(&FailingExtractor, &uploads).unwrap_err();
        assert!(format!("{err:#}").contains("enero.pdf"));
    }

    #[test]
    fn test_empty_batch() {
        assert!(extract_batch(&FailingExtractor, &[]).unwrap().is_empty());
    }
}
