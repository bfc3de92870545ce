use crate::creators::settings::{ArtifactBrief, DetailLine};
use crate::creators::vocabulary::Vocabulary;

pub const UNSPECIFIED: &str = "unspecified";

fn detail_value(detail: &DetailLine) -> &str {
    detail
        .value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(UNSPECIFIED)
}

pub fn render_elements_request(vocabulary: &Vocabulary, brief: &ArtifactBrief) -> String {
    let mut lines = vec![vocabulary.elements_lead.to_string()];
    lines.push(format!("- Concept: {}", brief.concept));
    lines.push(format!("- Form: {}", brief.form));
    for detail in &brief.details {
        lines.push(format!("- {}: {}", detail.label, detail_value(detail)));
    }

    lines.push(String::new());
    lines.push(vocabulary.elements_charge.to_string());
    for guide in vocabulary.element_guides {
        lines.push(format!("- {}: {}", guide.key, guide.hint));
    }

    lines.join("\n")
}

pub fn render_reflection_request(
    vocabulary: &Vocabulary,
    concept: &str,
    elements: &str,
) -> String {
    let charge = vocabulary.reflection_charge;
    let hints = &vocabulary.reflection_hints;
    let (subject, meaning, interaction, style, medium) = (
        hints.subject,
        hints.meaning,
        hints.interaction,
        hints.style,
        hints.medium,
    );
    format!(
        r#"Concept: {concept}
Current description:
{elements}

{charge}
{{
    "concept": "the concept, verbatim",
    "elements": {{
        "subject": "{subject}",
        "meaning": "{meaning}",
        "interaction": "{interaction}",
        "style": "{style}",
        "medium": "{medium}"
    }}
}}"#
    )
}

pub fn render_finalize_request(vocabulary: &Vocabulary, description: &str) -> String {
    let charge = vocabulary.finalize_charge;
    format!(
        r#"{charge}

Description:
{description}

Respond in the format:
{{
    "en_prompt": "prompt in English",
    "zh_prompt": "prompt in Chinese"
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creators::settings::PortraitSettings;
    use crate::creators::vocabulary::{PORTRAIT, SCULPTURE};

    fn bare_portrait_brief(concept: &str) -> ArtifactBrief {
        let settings: PortraitSettings =
            serde_json::from_str(&format!(r#"{{"concept": "{concept}"}}"#)).unwrap();
        ArtifactBrief::from(settings)
    }

    #[test]
    fn renders_unspecified_for_every_omitted_field() {
        let brief = bare_portrait_brief("a lone sailor at dawn");
        let request = render_elements_request(&PORTRAIT, &brief);
        assert!(request.contains("- Concept: a lone sailor at dawn"));
        assert!(request.contains("- Form: portrait"));
        assert_eq!(request.matches(UNSPECIFIED).count(), brief.details.len());
    }

    #[test]
    fn renders_supplied_details_verbatim() {
        let settings: PortraitSettings = serde_json::from_str(
            r#"{"concept": "the cartographer", "lighting": "candlelight", "clothing": "  "}"#,
        )
        .unwrap();
        let request = render_elements_request(&PORTRAIT, &ArtifactBrief::from(settings));
        assert!(request.contains("- Lighting: candlelight"));
        assert!(request.contains("- Clothing: unspecified"));
    }

    #[test]
    fn elements_request_lists_the_five_element_guides() {
        let brief = bare_portrait_brief("tide");
        let request = render_elements_request(&PORTRAIT, &brief);
        for key in ["subject", "meaning", "interaction", "style", "medium"] {
            assert!(request.contains(&format!("- {key}: ")));
        }
    }

    #[test]
    fn reflection_request_embeds_concept_and_description() {
        let request =
            render_reflection_request(&SCULPTURE, "wind caught in bronze", "a draped figure");
        assert!(request.starts_with("Concept: wind caught in bronze"));
        assert!(request.contains("a draped figure"));
        assert!(request.contains("\"concept\": \"the concept, verbatim\""));
        assert!(request.contains("\"medium\": \""));
    }

    #[test]
    fn finalize_request_shows_the_marker_key_skeleton() {
        let request = render_finalize_request(&PORTRAIT, "a weathered face against sailcloth");
        assert!(request.contains("a weathered face against sailcloth"));
        assert!(request.contains("\"en_prompt\""));
        assert!(request.contains("\"zh_prompt\""));
    }
}
