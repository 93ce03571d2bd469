//! extracto-ingest: statement text collaborators and the "Detalle de Movimientos" parser.

pub mod document;
pub mod parsers;
pub mod patterns;
pub mod text;
pub mod types;

pub use document::{Upload, extract_batch, extract_from_bytes, extract_from_path};
pub use parsers::movimientos::{ScanState, extract};
pub use text::{PdfTextExtractor, PlainTextExtractor, TextExtractor};
pub use types::TransactionRecord;
