// All LLM prompt constants for brand kit generation, plus the prompt
// builder. The builder is pure and deterministic — the same brief always
// produces the same prompt.

use crate::generation::brief::BrandBrief;

/// System prompt — enforces JSON-only output from the model.
pub const BRAND_KIT_SYSTEM: &str =
    "You are an expert brand designer. Always respond with valid JSON, no extra text.";

/// Substituted when the brief omits a brand name.
pub const UNKNOWN_BRAND: &str = "Unknown Brand";
/// Substituted when the brief omits industry, adjectives, or audience.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Brand kit prompt template. Replace `{brand_name}`, `{industry}`,
/// `{adjectives}`, and `{audience}` before sending.
pub const BRAND_KIT_PROMPT_TEMPLATE: &str = r##"You are a brand designer. Generate a simple brand kit for the following brand.

Brand name: {brand_name}
Industry / niche: {industry}
Adjectives: {adjectives}
Target audience: {audience}

Return a JSON object with this exact shape:

{
  "colors": ["#HEX1", "#HEX2", "#HEX3", "#HEX4", "#HEX5"],
  "headingFont": "Name of heading font (Google Fonts compatible)",
  "bodyFont": "Name of body font (Google Fonts compatible)",
  "personality": "2-3 sentences describing the brand personality and tone of voice"
}

Important:
- Use real hex colors.
- Colors should match the adjectives and industry.
- Fonts should be widely available on Google Fonts.
- Personality should be concrete and helpful.
"##;

/// Builds the user prompt for a brief, substituting placeholders for absent
/// or empty fields.
pub fn build_brand_kit_prompt(brief: &BrandBrief) -> String {
    BRAND_KIT_PROMPT_TEMPLATE
        .replace("{brand_name}", field_or(&brief.brand_name, UNKNOWN_BRAND))
        .replace("{industry}", field_or(&brief.industry, NOT_SPECIFIED))
        .replace("{adjectives}", field_or(&brief.adjectives, NOT_SPECIFIED))
        .replace("{audience}", field_or(&brief.audience, NOT_SPECIFIED))
}

/// An empty string counts as absent, matching the form UI which submits
/// empty inputs rather than omitting them.
fn field_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value.as_deref().filter(|v| !v.is_empty()).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_brief() -> BrandBrief {
        BrandBrief {
            brand_name: Some("Lumen Coffee".to_string()),
            industry: Some("Specialty coffee".to_string()),
            adjectives: Some("warm, artisanal, honest".to_string()),
            audience: Some("urban commuters".to_string()),
        }
    }

    #[test]
    fn test_prompt_contains_all_fields_verbatim() {
        let prompt = build_brand_kit_prompt(&full_brief());
        assert!(prompt.contains("Brand name: Lumen Coffee"));
        assert!(prompt.contains("Industry / niche: Specialty coffee"));
        assert!(prompt.contains("Adjectives: warm, artisanal, honest"));
        assert!(prompt.contains("Target audience: urban commuters"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let brief = full_brief();
        assert_eq!(build_brand_kit_prompt(&brief), build_brand_kit_prompt(&brief));
    }

    #[test]
    fn test_absent_fields_use_placeholders() {
        let prompt = build_brand_kit_prompt(&BrandBrief::default());
        assert!(prompt.contains("Brand name: Unknown Brand"));
        assert!(prompt.contains("Industry / niche: Not specified"));
        assert!(prompt.contains("Adjectives: Not specified"));
        assert!(prompt.contains("Target audience: Not specified"));
    }

    #[test]
    fn test_empty_string_fields_use_placeholders() {
        let brief = BrandBrief {
            brand_name: Some(String::new()),
            industry: Some(String::new()),
            adjectives: None,
            audience: None,
        };
        let prompt = build_brand_kit_prompt(&brief);
        assert!(prompt.contains("Brand name: Unknown Brand"));
        assert!(prompt.contains("Industry / niche: Not specified"));
    }

    #[test]
    fn test_prompt_keeps_output_schema_block() {
        let prompt = build_brand_kit_prompt(&full_brief());
        assert!(prompt.contains(r##""colors": ["#HEX1", "#HEX2", "#HEX3", "#HEX4", "#HEX5"]"##));
        assert!(prompt.contains("headingFont"));
        assert!(prompt.contains("bodyFont"));
        assert!(prompt.contains("Use real hex colors."));
    }
}
