//! Bank statement parsers working on extracted text.

pub mod movimientos;
