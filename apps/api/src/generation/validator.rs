//! Response validation — decodes raw model output into a brand kit value.
//!
//! The model is trusted up to syntactic JSON well-formedness. Decode failure
//! is never repaired here: prose around the JSON, truncated output, and
//! markdown fences all classify as invalid output.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

/// Last-resort display defaults, applied only in [`Strictness::Coerce`].
/// These mirror the form UI's own fallbacks and must stay in sync with it.
pub const DEFAULT_HEADING_FONT: &str = "Poppins";
pub const DEFAULT_BODY_FONT: &str = "Inter";
pub const DEFAULT_PERSONALITY: &str =
    "A distinctive brand with a clear personality and tone of voice.";

/// Expected number of palette colors.
pub const PALETTE_SIZE: usize = 5;

/// How strictly decoded output is checked against the brand kit shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Trust the model's JSON as-is: the decoded value is returned
    /// unchanged. This is what clients observe today — the rendering layer
    /// applies its own display defaults.
    #[default]
    PassThrough,
    /// Force the value through [`BrandKit`], filling missing or mistyped
    /// fields with the display defaults.
    Coerce,
    /// Require a complete kit with exactly [`PALETTE_SIZE`] hex colors.
    Reject,
}

impl std::str::FromStr for Strictness {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pass-through" => Ok(Self::PassThrough),
            "coerce" => Ok(Self::Coerce),
            "reject" => Ok(Self::Reject),
            other => anyhow::bail!(
                "unknown strictness '{other}' (expected pass-through, coerce, or reject)"
            ),
        }
    }
}

/// A fully-shaped brand kit. Only `Coerce` and `Reject` modes force decoded
/// output through this type; `PassThrough` never does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandKit {
    pub colors: Vec<String>,
    pub heading_font: String,
    pub body_font: String,
    pub personality: String,
}

/// Decodes raw model output as JSON and applies the configured strictness.
pub fn validate_kit(raw: &str, strictness: Strictness) -> Result<Value, AppError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|_| AppError::InvalidOutput(raw.to_string()))?;

    match strictness {
        Strictness::PassThrough => Ok(value),
        Strictness::Coerce => to_value(coerce_kit(&value)),
        Strictness::Reject => to_value(check_kit(value, raw)?),
    }
}

fn to_value(kit: BrandKit) -> Result<Value, AppError> {
    serde_json::to_value(kit)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize BrandKit: {e}")))
}

/// Best-effort extraction: string colors are kept, everything else falls
/// back to the display defaults.
fn coerce_kit(value: &Value) -> BrandKit {
    BrandKit {
        colors: value
            .get("colors")
            .and_then(Value::as_array)
            .map(|colors| {
                colors
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
        heading_font: str_field(value, "headingFont", DEFAULT_HEADING_FONT),
        body_font: str_field(value, "bodyFont", DEFAULT_BODY_FONT),
        personality: str_field(value, "personality", DEFAULT_PERSONALITY),
    }
}

fn str_field(value: &Value, key: &str, fallback: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

fn check_kit(value: Value, raw: &str) -> Result<BrandKit, AppError> {
    let kit: BrandKit =
        serde_json::from_value(value).map_err(|_| AppError::InvalidOutput(raw.to_string()))?;

    if kit.colors.len() != PALETTE_SIZE || !kit.colors.iter().all(|c| is_hex_color(c)) {
        return Err(AppError::InvalidOutput(raw.to_string()));
    }

    Ok(kit)
}

/// `#RGB` or `#RRGGBB`.
fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
