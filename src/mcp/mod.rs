use crate::taxonomy::styles;
use serde_json::json;

pub mod contracts;
pub mod errors;

pub fn tool_definitions() -> Vec<serde_json::Value> {
    let no_arguments = [
        (
            contracts::TOOL_MOVEMENT_VOCABULARY,
            "Get the complete taxonomy of ribbon movement patterns.",
        ),
        (
            contracts::TOOL_SPATIAL_VOCABULARY,
            "Get the complete taxonomy of spatial relationships and patterns.",
        ),
        (
            contracts::TOOL_TEMPORAL_VOCABULARY,
            "Get the complete taxonomy of temporal dynamics and rhythm patterns.",
        ),
        (
            contracts::TOOL_PHYSICAL_PROPERTIES,
            "Get the complete taxonomy of physical properties and material behavior.",
        ),
        (
            contracts::TOOL_COMPOSITION_GUIDE,
            "Get compositional structure guidance and rules.",
        ),
        (
            contracts::TOOL_STYLE_VARIATIONS,
            "Get available style variations and their characteristics.",
        ),
        (
            contracts::TOOL_FULL_TAXONOMY,
            "Get the complete visual vocabulary taxonomy across all layers.",
        ),
    ];

    let mut definitions = vec![json!({
        "name": contracts::TOOL_ENHANCE_PROMPT,
        "description": "Enhance a ribbon routine description with technical and aesthetic vocabulary.",
        "inputSchema": contracts::enhance_prompt_schema(&styles::names())
    })];
    definitions.extend(no_arguments.into_iter().map(|(name, description)| {
        json!({
            "name": name,
            "description": description,
            "inputSchema": contracts::no_arguments_schema()
        })
    }));
    definitions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_definition_has_an_object_schema() {
        let definitions = tool_definitions();
        assert_eq!(definitions.len(), 8);
        for definition in &definitions {
            assert_eq!(
                definition
                    .get("inputSchema")
                    .and_then(|schema| schema.get("type"))
                    .and_then(|value| value.as_str()),
                Some("object")
            );
        }
    }

    #[test]
    fn enhance_prompt_requires_description() {
        let schema = contracts::enhance_prompt_schema(&styles::names());
        assert_eq!(schema["required"], json!(["routine_description"]));
        let description = schema["properties"]["style_preference"]["description"]
            .as_str()
            .expect("description");
        assert!(description.contains("technical_virtuosic"));
    }
}
