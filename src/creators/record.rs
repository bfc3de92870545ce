use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReflectionElements {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub interaction: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub medium: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReflectionRecord {
    #[serde(default)]
    pub concept: String,
    #[serde(default)]
    pub elements: ReflectionElements,
}

/// Final result of the chained pipeline: a bilingual prompt pair, or the
/// uncooked text whenever structure could not be recovered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PromptPair {
    Bilingual { en: String, zh: String },
    Raw { raw: String },
}

impl PromptPair {
    pub fn from_value(value: &Value) -> PromptPair {
        if let Value::Object(map) = value {
            if let (Some(Value::String(en)), Some(Value::String(zh))) =
                (map.get("en"), map.get("zh"))
            {
                return PromptPair::Bilingual {
                    en: en.clone(),
                    zh: zh.clone(),
                };
            }
            if map.len() == 1 {
                if let Some(Value::String(raw)) = map.get("raw") {
                    return PromptPair::Raw { raw: raw.clone() };
                }
            }
        }
        PromptPair::Raw {
            raw: value.to_string(),
        }
    }
}

/// Pins recognizable reflection payloads to the fixed six-leaf record:
/// every leaf a string, missing leaves empty, nothing nested deeper.
/// Fallback `{"raw"}` objects and shapes with no reflection keys pass
/// through untouched so the caller still sees what the model actually said.
pub fn coerce_reflection(value: Value, request_concept: &str) -> Value {
    let Value::Object(map) = &value else {
        return value;
    };
    if !map.contains_key("concept") && !map.contains_key("elements") {
        return value;
    }

    let elements = map.get("elements");
    let record = ReflectionRecord {
        concept: match map.get("concept") {
            Some(Value::String(text)) if !text.trim().is_empty() => text.clone(),
            _ => request_concept.to_string(),
        },
        elements: ReflectionElements {
            subject: leaf_string(elements, "subject"),
            meaning: leaf_string(elements, "meaning"),
            interaction: leaf_string(elements, "interaction"),
            style: leaf_string(elements, "style"),
            medium: leaf_string(elements, "medium"),
        },
    };

    serde_json::to_value(&record).unwrap_or(value)
}

fn leaf_string(elements: Option<&Value>, key: &str) -> String {
    match elements.and_then(|value| value.get(key)) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerce_fills_missing_leaves_with_empty_strings() {
        let value = json!({
            "concept": "tide",
            "elements": { "subject": "a wave mid-collapse" }
        });
        let coerced = coerce_reflection(value, "tide");
        assert_eq!(
            coerced,
            json!({
                "concept": "tide",
                "elements": {
                    "subject": "a wave mid-collapse",
                    "meaning": "",
                    "interaction": "",
                    "style": "",
                    "medium": ""
                }
            })
        );
    }

    #[test]
    fn coerce_recovers_concept_from_the_request() {
        let value = json!({ "elements": { "style": "baroque" } });
        let coerced = coerce_reflection(value, "a lone sailor at dawn");
        assert_eq!(coerced["concept"], "a lone sailor at dawn");
        assert_eq!(coerced["elements"]["style"], "baroque");
    }

    #[test]
    fn coerce_stringifies_non_string_leaves() {
        let value = json!({
            "concept": "tide",
            "elements": { "subject": 7, "meaning": { "inner": "x" } }
        });
        let coerced = coerce_reflection(value, "tide");
        assert_eq!(coerced["elements"]["subject"], "7");
        assert_eq!(coerced["elements"]["meaning"], r#"{"inner":"x"}"#);
    }

    #[test]
    fn coerce_leaves_raw_fallback_untouched() {
        let value = json!({ "raw": "no structure here" });
        let coerced = coerce_reflection(value.clone(), "tide");
        assert_eq!(coerced, value);
    }

    #[test]
    fn coerce_passes_unrecognizable_shapes_through() {
        let value = json!({ "commentary": "the model went off-script" });
        let coerced = coerce_reflection(value.clone(), "tide");
        assert_eq!(coerced, value);
    }

    #[test]
    fn prompt_pair_extracts_bilingual_objects() {
        let value = json!({ "en": "bronze wave", "zh": "青铜浪" });
        assert_eq!(
            PromptPair::from_value(&value),
            PromptPair::Bilingual {
                en: "bronze wave".to_string(),
                zh: "青铜浪".to_string()
            }
        );
    }

    #[test]
    fn prompt_pair_extracts_raw_fallbacks() {
        let value = json!({ "raw": "just words" });
        assert_eq!(
            PromptPair::from_value(&value),
            PromptPair::Raw {
                raw: "just words".to_string()
            }
        );
    }

    #[test]
    fn prompt_pair_carries_custom_shapes_as_raw_json() {
        let value = json!({ "prompt": "single language only" });
        assert_eq!(
            PromptPair::from_value(&value),
            PromptPair::Raw {
                raw: r#"{"prompt":"single language only"}"#.to_string()
            }
        );
    }

    #[test]
    fn prompt_pair_serializes_without_a_tag() {
        let pair = PromptPair::Bilingual {
            en: "a".to_string(),
            zh: "b".to_string(),
        };
        assert_eq!(serde_json::to_value(&pair).unwrap(), json!({ "en": "a", "zh": "b" }));
    }
}
