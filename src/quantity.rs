//! Craft output quantity normalization

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{OutputLine, OutputQty};

static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)-(\d+)$").expect("valid range pattern"));

static COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("valid count pattern"));

/// Quantity used when an output string cannot be read
pub const FALLBACK_QTY: u64 = 1;

/// Collapse an output quantity to the integer planning works with.
///
/// Ranges such as `"8-20"` use their minimum so a plan never under-gathers.
/// Anything unreadable becomes [`FALLBACK_QTY`] and is logged as a catalog problem.
pub fn normalize_output_qty(output: &OutputLine) -> u64 {
    match &output.qty {
        OutputQty::Fixed(qty) => *qty,
        OutputQty::Text(text) => normalize_text(text).unwrap_or_else(|| {
            log::warn!(
                "malformed output quantity {:?} for {}, assuming {}",
                text,
                output.item,
                FALLBACK_QTY
            );
            FALLBACK_QTY
        }),
    }
}

fn normalize_text(text: &str) -> Option<u64> {
    let text = text.trim();
    if let Some(cap) = RANGE_RE.captures(text) {
        return cap[1].parse().ok();
    }
    if COUNT_RE.is_match(text) {
        return text.parse().ok();
    }
    None
}
