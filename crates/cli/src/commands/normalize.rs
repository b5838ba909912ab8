//! Quantity normalization command

use anyhow::Result;
use kubedash_core::{normalize, ResourceKind};
use serde::Serialize;

use crate::output::{print_json, OutputFormat};

#[derive(Serialize)]
struct Normalized<'a> {
    kind: ResourceKind,
    quantity: &'a str,
    value: u64,
    unit: &'static str,
}

/// Print a quantity in canonical units
pub fn show_normalized(kind: &str, quantity: &str, format: OutputFormat) -> Result<()> {
    let kind: ResourceKind = kind.parse()?;
    let value = normalize(kind, quantity)?;

    match format {
        OutputFormat::Json => print_json(&Normalized {
            kind,
            quantity,
            value,
            unit: kind.unit(),
        })?,
        OutputFormat::Table => println!("{}{}", value, kind.unit()),
    }

    Ok(())
}
