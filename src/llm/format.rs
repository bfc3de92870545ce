use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};

static FENCE_OPEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```json\s*").expect("valid fence regex"));
static FENCE_CLOSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*```").expect("valid fence regex"));
static BARE_KEY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+):").expect("valid key regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedShape {
    Passthrough,
    PromptPair,
}

// Ordered fallback chain over model output: each pass is attempted only if
// the previous one recovered nothing. The final fallback carries the input
// untouched under "raw", so callers always receive a value, never an error.
pub fn normalize_response(raw: &str, shape: ExpectedShape) -> Value {
    const PASSES: [fn(&str) -> Option<Value>; 3] =
        [parse_whole, parse_embedded_object, parse_repaired];

    let stripped = strip_code_fences(raw);
    for pass in PASSES {
        if let Some(value) = pass(&stripped) {
            return apply_expected_shape(value, shape);
        }
    }

    json!({ "raw": raw })
}

fn strip_code_fences(text: &str) -> String {
    let without_open = FENCE_OPEN_RE.replace_all(text, "");
    FENCE_CLOSE_RE.replace_all(&without_open, "").into_owned()
}

fn parse_whole(text: &str) -> Option<Value> {
    serde_json::from_str(text).ok()
}

fn parse_embedded_object(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

// Repairs the loose pseudo-JSON models fall back to: unquoted keys and
// single-quoted strings. One layer of outer braces is shed before the
// rewrite so already-braced text does not end up double-wrapped.
fn parse_repaired(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .unwrap_or(trimmed);
    let quoted = BARE_KEY_RE.replace_all(inner, "\"${1}\":");
    let candidate = format!("{{{}}}", quoted.replace('\'', "\""));
    serde_json::from_str(&candidate).ok()
}

fn apply_expected_shape(value: Value, shape: ExpectedShape) -> Value {
    match shape {
        ExpectedShape::Passthrough => value,
        ExpectedShape::PromptPair => remap_marker_keys(value),
    }
}

fn remap_marker_keys(value: Value) -> Value {
    let Value::Object(map) = &value else {
        return value;
    };
    if !map.contains_key("en_prompt") && !map.contains_key("zh_prompt") {
        return value;
    }

    let text = |key: &str| {
        map.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    json!({ "en": text("en_prompt"), "zh": text("zh_prompt") })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_well_formed_object_unchanged() {
        let raw = r#"{"concept": "a lone sailor", "mood": "calm"}"#;
        let value = normalize_response(raw, ExpectedShape::Passthrough);
        assert_eq!(value, json!({ "concept": "a lone sailor", "mood": "calm" }));
    }

    #[test]
    fn strips_json_code_fences_before_parsing() {
        let fenced = "```json\n{\"concept\": \"tidal garden\"}\n```";
        let bare = "{\"concept\": \"tidal garden\"}";
        assert_eq!(
            normalize_response(fenced, ExpectedShape::Passthrough),
            normalize_response(bare, ExpectedShape::Passthrough)
        );
    }

    #[test]
    fn strips_anonymous_code_fences() {
        let fenced = "```\n{\"en_prompt\": \"a\", \"zh_prompt\": \"b\"}\n```";
        let value = normalize_response(fenced, ExpectedShape::PromptPair);
        assert_eq!(value, json!({ "en": "a", "zh": "b" }));
    }

    #[test]
    fn remaps_marker_keys_for_prompt_pair_shape() {
        let raw = r#"{"en_prompt": "bronze figure, dusk light", "zh_prompt": "青铜雕像"}"#;
        let value = normalize_response(raw, ExpectedShape::PromptPair);
        assert_eq!(
            value,
            json!({ "en": "bronze figure, dusk light", "zh": "青铜雕像" })
        );
    }

    #[test]
    fn marker_remap_fills_missing_side_with_empty_string() {
        let raw = r#"{"en_prompt": "marble bust"}"#;
        let value = normalize_response(raw, ExpectedShape::PromptPair);
        assert_eq!(value, json!({ "en": "marble bust", "zh": "" }));
    }

    #[test]
    fn marker_remap_drops_extra_keys() {
        let raw = r#"{"en_prompt": "a", "zh_prompt": "b", "notes": "ignore me"}"#;
        let value = normalize_response(raw, ExpectedShape::PromptPair);
        assert_eq!(value, json!({ "en": "a", "zh": "b" }));
    }

    #[test]
    fn passthrough_shape_never_remaps_marker_keys() {
        let raw = r#"{"en_prompt": "a", "zh_prompt": "b"}"#;
        let value = normalize_response(raw, ExpectedShape::Passthrough);
        assert_eq!(value, json!({ "en_prompt": "a", "zh_prompt": "b" }));
    }

    #[test]
    fn prompt_pair_shape_passes_unmarked_objects_verbatim() {
        let raw = r#"{"headline": "untitled", "body": "free association"}"#;
        let value = normalize_response(raw, ExpectedShape::PromptPair);
        assert_eq!(
            value,
            json!({ "headline": "untitled", "body": "free association" })
        );
    }

    #[test]
    fn extracts_object_span_from_surrounding_prose() {
        let raw = "Here is the refined record:\n{\"concept\": \"sailor\"}\nHope this helps!";
        let value = normalize_response(raw, ExpectedShape::Passthrough);
        assert_eq!(value, json!({ "concept": "sailor" }));
    }

    #[test]
    fn remaps_markers_found_inside_prose_span() {
        let raw = "Sure! ```json\n{\"en_prompt\": \"dawn\", \"zh_prompt\": \"黎明\"}\n``` enjoy";
        let value = normalize_response(raw, ExpectedShape::PromptPair);
        assert_eq!(value, json!({ "en": "dawn", "zh": "黎明" }));
    }

    #[test]
    fn repairs_single_quoted_unquoted_key_text() {
        let raw = "{concept: 'abc', subject: 'def'}";
        let value = normalize_response(raw, ExpectedShape::Passthrough);
        assert_eq!(value, json!({ "concept": "abc", "subject": "def" }));
    }

    #[test]
    fn repairs_unbraced_key_value_text() {
        let raw = "en_prompt: 'a sailor at dawn', zh_prompt: '黎明的水手'";
        let value = normalize_response(raw, ExpectedShape::PromptPair);
        assert_eq!(value, json!({ "en": "a sailor at dawn", "zh": "黎明的水手" }));
    }

    #[test]
    fn falls_back_to_raw_for_unparseable_text() {
        let raw = "The sculpture should feel weightless, almost drifting.";
        let value = normalize_response(raw, ExpectedShape::Passthrough);
        assert_eq!(value, json!({ "raw": raw }));
    }

    #[test]
    fn raw_fallback_keeps_the_input_untouched() {
        let raw = "```json\nnot json at all, just: commentary without quotes ' {\n```";
        let value = normalize_response(raw, ExpectedShape::PromptPair);
        assert_eq!(value, json!({ "raw": raw }));
    }

    #[test]
    fn whole_parse_accepts_non_object_values() {
        let value = normalize_response("[1, 2, 3]", ExpectedShape::PromptPair);
        assert_eq!(value, json!([1, 2, 3]));
    }
}
