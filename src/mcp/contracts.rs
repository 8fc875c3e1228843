use serde_json::json;

pub const TOOL_ENHANCE_PROMPT: &str = "ribbon_enhance_prompt";
pub const TOOL_MOVEMENT_VOCABULARY: &str = "ribbon_movement_vocabulary";
pub const TOOL_SPATIAL_VOCABULARY: &str = "ribbon_spatial_vocabulary";
pub const TOOL_TEMPORAL_VOCABULARY: &str = "ribbon_temporal_vocabulary";
pub const TOOL_PHYSICAL_PROPERTIES: &str = "ribbon_physical_properties";
pub const TOOL_COMPOSITION_GUIDE: &str = "ribbon_composition_guide";
pub const TOOL_STYLE_VARIATIONS: &str = "ribbon_style_variations";
pub const TOOL_FULL_TAXONOMY: &str = "ribbon_full_taxonomy";

pub const PROTOCOL_VERSION: &str = "2025-11-25";

pub const ARG_ROUTINE_DESCRIPTION: &str = "routine_description";
pub const ARG_STYLE_PREFERENCE: &str = "style_preference";
pub const ARG_TECHNICAL_FOCUS: &str = "technical_focus";

pub const DEFAULT_TECHNICAL_FOCUS: &str = "balanced";
pub const TECHNICAL_FOCUSES: &[&str] = &[
    "balanced",
    "movement_rich",
    "spatial_exploration",
    "temporal_dynamics",
    "expressive_emphasis",
];

pub fn no_arguments_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {},
        "additionalProperties": false
    })
}

pub fn enhance_prompt_schema(style_names: &[&str]) -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            ARG_ROUTINE_DESCRIPTION: {
                "type": "string",
                "description": "Natural language description of the routine or concept"
            },
            ARG_STYLE_PREFERENCE: {
                "type": "string",
                "description": format!(
                    "Desired style ({}); unknown styles fall back to classical",
                    style_names.join(", ")
                ),
                "default": "classical"
            },
            ARG_TECHNICAL_FOCUS: {
                "type": "string",
                "description": format!("Focus area ({})", TECHNICAL_FOCUSES.join(", ")),
                "default": DEFAULT_TECHNICAL_FOCUS
            }
        },
        "required": [ARG_ROUTINE_DESCRIPTION],
        "additionalProperties": false
    })
}
