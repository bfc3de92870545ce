use serde::Deserialize;

use crate::creators::vocabulary::{PORTRAIT, SCULPTURE};

fn default_portrait_seed() -> i64 {
    0
}

fn default_sculpture_seed() -> i64 {
    -1
}

fn default_steps() -> u32 {
    40
}

fn default_samples() -> u32 {
    2
}

fn default_cfg_scale() -> f32 {
    7.0
}

fn default_model_type() -> u32 {
    2
}

fn default_image_size() -> String {
    "1024x1024".to_string()
}

/// Portrait form data as the frontend posts it. Field names mirror the
/// original wire contract: camelCase for the descriptive fields,
/// snake_case for the diffusion parameters.
#[allow(dead_code)]
#[derive(Debug, Clone, Deserialize)]
pub struct PortraitSettings {
    pub concept: String,
    #[serde(default, rename = "mainSubject")]
    pub main_subject: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub ethnicity: Option<String>,
    #[serde(default, rename = "hairStyle")]
    pub hair_style: Option<String>,
    #[serde(default)]
    pub expression: Option<String>,
    #[serde(default)]
    pub clothing: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub composition: Option<String>,
    #[serde(default)]
    pub lighting: Option<String>,
    #[serde(default, rename = "additionalDetails")]
    pub additional_details: Option<String>,
    #[serde(default, rename = "artStyle")]
    pub art_style: Option<String>,
    #[serde(default, rename = "negativePrompt")]
    pub negative_prompt: Option<String>,
    #[serde(default = "default_portrait_seed")]
    pub seed: i64,
    #[serde(default = "default_image_size")]
    pub size: String,
    #[serde(default = "default_steps")]
    pub steps: u32,
    #[serde(default = "default_samples")]
    pub samples: u32,
    #[serde(default = "default_cfg_scale")]
    pub cfg_scale: f32,
    #[serde(default = "default_model_type")]
    pub model_type: u32,
    #[serde(default)]
    pub style_preset: Option<String>,
    #[serde(default, rename = "useWeights")]
    pub use_weights: bool,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Deserialize)]
pub struct SculptureSettings {
    pub concept: String,
    #[serde(default, rename = "mainSubject")]
    pub main_subject: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub texture: Option<String>,
    #[serde(default, rename = "baseOrPedestal")]
    pub base_or_pedestal: Option<String>,
    #[serde(default, rename = "installationEnvironment")]
    pub installation_environment: Option<String>,
    #[serde(default, rename = "additionalDetails")]
    pub additional_details: Option<String>,
    #[serde(default, rename = "negativePrompt")]
    pub negative_prompt: Option<String>,
    #[serde(default = "default_sculpture_seed")]
    pub seed: i64,
    #[serde(default = "default_steps")]
    pub steps: u32,
    #[serde(default = "default_samples")]
    pub samples: u32,
    #[serde(default = "default_cfg_scale")]
    pub cfg_scale: f32,
    #[serde(default = "default_model_type")]
    pub model_type: u32,
}

#[derive(Debug, Clone)]
pub struct DetailLine {
    pub label: &'static str,
    pub value: Option<String>,
}

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct GenerationParams {
    pub seed: i64,
    pub image_size: Option<String>,
    pub steps: u32,
    pub samples: u32,
    pub cfg_scale: f32,
    pub model_type: u32,
    pub style_preset: Option<String>,
}

/// Domain-neutral form both settings types collapse into; this is the only
/// shape the pipeline engine ever sees.
#[derive(Debug, Clone)]
pub struct ArtifactBrief {
    pub concept: String,
    pub form: String,
    pub details: Vec<DetailLine>,
    pub params: GenerationParams,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

impl From<PortraitSettings> for ArtifactBrief {
    fn from(settings: PortraitSettings) -> Self {
        ArtifactBrief {
            concept: settings.concept,
            form: non_blank(settings.main_subject)
                .unwrap_or_else(|| PORTRAIT.default_form.to_string()),
            details: vec![
                DetailLine {
                    label: "Gender",
                    value: settings.gender,
                },
                DetailLine {
                    label: "Age",
                    value: settings.age,
                },
                DetailLine {
                    label: "Ethnicity",
                    value: settings.ethnicity,
                },
                DetailLine {
                    label: "Hair style",
                    value: settings.hair_style,
                },
                DetailLine {
                    label: "Expression",
                    value: settings.expression,
                },
                DetailLine {
                    label: "Clothing",
                    value: settings.clothing,
                },
                DetailLine {
                    label: "Background",
                    value: settings.background,
                },
                DetailLine {
                    label: "Composition",
                    value: settings.composition,
                },
                DetailLine {
                    label: "Lighting",
                    value: settings.lighting,
                },
                DetailLine {
                    label: "Additional details",
                    value: settings.additional_details,
                },
                DetailLine {
                    label: "Art style",
                    value: settings.art_style,
                },
            ],
            params: GenerationParams {
                seed: settings.seed,
                image_size: Some(settings.size),
                steps: settings.steps,
                samples: settings.samples,
                cfg_scale: settings.cfg_scale,
                model_type: settings.model_type,
                style_preset: settings.style_preset,
            },
        }
    }
}

impl From<SculptureSettings> for ArtifactBrief {
    fn from(settings: SculptureSettings) -> Self {
        ArtifactBrief {
            concept: settings.concept,
            form: non_blank(settings.main_subject)
                .unwrap_or_else(|| SCULPTURE.default_form.to_string()),
            details: vec![
                DetailLine {
                    label: "Material",
                    value: settings.material,
                },
                DetailLine {
                    label: "Size",
                    value: settings.size,
                },
                DetailLine {
                    label: "Style",
                    value: settings.style,
                },
                DetailLine {
                    label: "Texture",
                    value: settings.texture,
                },
                DetailLine {
                    label: "Base or pedestal",
                    value: settings.base_or_pedestal,
                },
                DetailLine {
                    label: "Installation environment",
                    value: settings.installation_environment,
                },
                DetailLine {
                    label: "Additional details",
                    value: settings.additional_details,
                },
            ],
            params: GenerationParams {
                seed: settings.seed,
                image_size: None,
                steps: settings.steps,
                samples: settings.samples,
                cfg_scale: settings.cfg_scale,
                model_type: settings.model_type,
                style_preset: None,
            },
        }
    }
}
