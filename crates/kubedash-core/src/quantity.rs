//! Resource quantity normalization
//!
//! Converts Kubernetes resource-quantity strings into the canonical
//! integer units used throughout the dashboard:
//! - CPU in millicores (`500m` -> 500, `2` -> 2000)
//! - Memory in mebibytes (`128Mi` -> 128, `1Gi` -> 1024, bare bytes / 1024²)
//!
//! The conversion is display-oriented: the final value is truncated
//! toward zero and no exact arithmetic is attempted.

use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Bytes in one mebibyte
pub const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Millicores in one core
pub const MILLICORES_PER_CORE: f64 = 1000.0;

/// Memory suffixes and their multipliers in bytes.
/// Two-letter binary suffixes come first so `Mi` is never read as `M`.
const MEMORY_SUFFIXES: [(&str, f64); 13] = [
    ("Ki", 1024.0),
    ("Mi", 1024.0 * 1024.0),
    ("Gi", 1024.0 * 1024.0 * 1024.0),
    ("Ti", 1024.0 * 1024.0 * 1024.0 * 1024.0),
    ("Pi", 1024.0 * 1024.0 * 1024.0 * 1024.0 * 1024.0),
    ("Ei", 1024.0 * 1024.0 * 1024.0 * 1024.0 * 1024.0 * 1024.0),
    ("k", 1e3),
    ("K", 1e3),
    ("M", 1e6),
    ("G", 1e9),
    ("T", 1e12),
    ("P", 1e15),
    ("E", 1e18),
];

/// The resource kinds the dashboard understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Cpu,
    Memory,
}

impl ResourceKind {
    /// All kinds, in display order
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Cpu, ResourceKind::Memory];

    /// Key used in Kubernetes resource maps
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Cpu => "cpu",
            ResourceKind::Memory => "memory",
        }
    }

    /// Suffix of the canonical unit
    pub fn unit(&self) -> &'static str {
        match self {
            ResourceKind::Cpu => "m",
            ResourceKind::Memory => "Mi",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpu" => Ok(ResourceKind::Cpu),
            "memory" => Ok(ResourceKind::Memory),
            other => Err(QuantityError::UnknownResource(other.to_string())),
        }
    }
}

/// Errors raised while normalizing a quantity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    #[error("empty {kind} quantity")]
    Empty { kind: ResourceKind },

    #[error("malformed {kind} quantity '{value}'")]
    Malformed { kind: ResourceKind, value: String },

    #[error("negative {kind} quantity '{value}'")]
    Negative { kind: ResourceKind, value: String },

    #[error("unknown resource '{0}', expected cpu or memory")]
    UnknownResource(String),
}

/// Normalize a quantity string into millicores (CPU) or mebibytes (memory)
pub fn normalize(kind: ResourceKind, quantity: &str) -> Result<u64, QuantityError> {
    let raw = quantity.trim();
    if raw.is_empty() {
        return Err(QuantityError::Empty { kind });
    }

    let value = match kind {
        ResourceKind::Cpu => match raw.strip_suffix('m') {
            Some(number) => parse_number(kind, raw, number)?,
            None => parse_number(kind, raw, raw)? * MILLICORES_PER_CORE,
        },
        ResourceKind::Memory => {
            let (number, multiplier) = MEMORY_SUFFIXES
                .iter()
                .find_map(|(suffix, multiplier)| {
                    raw.strip_suffix(suffix).map(|number| (number, *multiplier))
                })
                .unwrap_or((raw, 1.0));
            parse_number(kind, raw, number)? * multiplier / BYTES_PER_MIB
        }
    };

    // f64 -> u64 casts saturate, which is fine for display values
    Ok(value.trunc() as u64)
}

/// Normalize an upstream `Quantity`
pub fn normalize_quantity(kind: ResourceKind, quantity: &Quantity) -> Result<u64, QuantityError> {
    normalize(kind, &quantity.0)
}

fn parse_number(kind: ResourceKind, raw: &str, number: &str) -> Result<f64, QuantityError> {
    let value: f64 = number.parse().map_err(|_| QuantityError::Malformed {
        kind,
        value: raw.to_string(),
    })?;

    if !value.is_finite() {
        return Err(QuantityError::Malformed {
            kind,
            value: raw.to_string(),
        });
    }
    if value < 0.0 {
        return Err(QuantityError::Negative {
            kind,
            value: raw.to_string(),
        });
    }

    Ok(value)
}
