use anyhow::{Context, Result};
use clap::ValueEnum;
use extracto_ingest::TransactionRecord;
use std::io::Write;

/// Column order of [`TransactionRecord`]'s serde fields.
const CSV_HEADER: [&str; 10] = [
    "operation_date",
    "settlement_date",
    "description_code",
    "reference",
    "clabe",
    "tracking_key",
    "charge_amount",
    "credit_amount",
    "operation_balance",
    "settlement_balance",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

pub fn write_records<W: Write>(
    out: W,
    records: &[TransactionRecord],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, records),
        OutputFormat::Csv => write_csv(out, records),
    }
}

fn write_json<W: Write>(mut out: W, records: &[TransactionRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, records).context("serialize records")?;
    writeln!(out)?;
    Ok(())
}

/// Header row, then one row per record. Absent fields are empty cells.
fn write_csv<W: Write>(out: W, records: &[TransactionRecord]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    wtr.write_record(CSV_HEADER).context("write csv header")?;
    for rec in records {
        wtr.serialize(rec).context("write csv row")?;
    }
    wtr.flush()?;
    Ok(())
}
