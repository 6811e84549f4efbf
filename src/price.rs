use serde::Deserialize;

use crate::error::GenError;

// ============================================================================
// Price Policy
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricePolicy {
    Cheap,
    Normal,
    Expensive,
}

impl PricePolicy {
    /// Fixed order used when resolving a random policy request.
    pub const ALL: [PricePolicy; 3] = [
        PricePolicy::Cheap,
        PricePolicy::Normal,
        PricePolicy::Expensive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PricePolicy::Cheap => "C",
            PricePolicy::Normal => "N",
            PricePolicy::Expensive => "E",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "C" => Some(PricePolicy::Cheap),
            "N" => Some(PricePolicy::Normal),
            "E" => Some(PricePolicy::Expensive),
            _ => None,
        }
    }
}

/// Markup/markdown rates applied by the cheap and expensive policies.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceRates {
    /// Negative fraction, e.g. -0.3 knocks 30% off.
    pub pct_cheap: f64,
    /// Positive fraction, e.g. 0.3 adds 30%.
    pub pct_expensive: f64,
}

impl Default for PriceRates {
    fn default() -> Self {
        Self {
            pct_cheap: -0.3,
            pct_expensive: 0.3,
        }
    }
}

// ============================================================================
// Cost parsing and formatting (100cp = 10sp = 1gp)
// ============================================================================

/// Parse a catalog cost string into gold. An optional `cp`/`sp`/`gp` suffix
/// selects the denomination; a bare number is gold.
pub fn parse_cost(raw: &str) -> Result<f64, GenError> {
    let value = raw.trim();
    let (digits, divisor) = if let Some(v) = value.strip_suffix("cp") {
        (v, 100.0)
    } else if let Some(v) = value.strip_suffix("sp") {
        (v, 10.0)
    } else if let Some(v) = value.strip_suffix("gp") {
        (v, 1.0)
    } else {
        (value, 1.0)
    };
    let amount: f64 = digits
        .trim()
        .parse()
        .map_err(|_| GenError::InvalidConfig(format!("unparseable cost '{}'", raw)))?;
    Ok(amount / divisor)
}

/// Apply the policy adjustment once: `cost + rate * cost`. Normal is identity.
pub fn adjust(cost: f64, policy: PricePolicy, rates: &PriceRates) -> f64 {
    match policy {
        PricePolicy::Cheap => cost + rates.pct_cheap * cost,
        PricePolicy::Normal => cost,
        PricePolicy::Expensive => cost + rates.pct_expensive * cost,
    }
}

/// Render a gold amount back into denominations, truncating at each step.
/// Zero components are omitted; an all-zero amount renders as "0gp".
/// Chained fractional extraction is best-effort under float drift.
pub fn format_coins(cost: f64) -> String {
    let gp = cost.trunc() as i64;
    let rem = cost.fract() * 10.0;
    let sp = rem.trunc() as i64;
    let rem = rem.fract() * 10.0;
    let cp = rem.trunc() as i64;

    let mut parts = Vec::new();
    if gp != 0 {
        parts.push(format!("{}gp", gp));
    }
    if sp != 0 {
        parts.push(format!("{}sp", sp));
    }
    if cp != 0 {
        parts.push(format!("{}cp", cp));
    }
    if parts.is_empty() {
        "0gp".to_string()
    } else {
        parts.join(" ")
    }
}
