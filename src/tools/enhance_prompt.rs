use crate::args::ToolArgs;
use crate::mcp::contracts::{
    ARG_ROUTINE_DESCRIPTION, ARG_STYLE_PREFERENCE, ARG_TECHNICAL_FOCUS, DEFAULT_TECHNICAL_FOCUS,
    TOOL_ENHANCE_PROMPT,
};
use crate::taxonomy::node::{spaced, title_case};
use crate::taxonomy::rules::rule_category;
use crate::taxonomy::styles::{self, Style};
use crate::taxonomy::{Node, Section};
use crate::tools::{arg_error_result, text_result};
use serde_json::{Value, json};

const ALLOWED_ARGS: &[&str] = &[
    ARG_ROUTINE_DESCRIPTION,
    ARG_STYLE_PREFERENCE,
    ARG_TECHNICAL_FOCUS,
];

const DEVELOPMENT_PATH: &[&str] = &[
    "Begin with foundational patterns (circles, spirals, snakes)",
    "Layer in spatial variations (height, distance, planes)",
    "Add temporal dynamics (speed changes, rhythmic variations)",
    "Integrate body-ribbon coordination",
    "Align with musical structure",
    "Polish with style-specific qualities",
];

const COST_NOTE: &[&str] = &[
    "\n## Cost Optimization Note",
    "This enhancement used:",
    "- Layer 1: Deterministic taxonomy mapping (0 LLM cost)",
    "- Layer 2: Structured rule application (0 LLM cost)",
    "- Layer 3: Single synthesis pass (minimal LLM cost)",
    "- Total savings vs pure LLM: ~60-80%",
];

pub fn call(args: &Value) -> Value {
    let parsed = match ToolArgs::parse(args, ALLOWED_ARGS) {
        Ok(parsed) => parsed,
        Err(err) => return arg_error_result(err, TOOL_ENHANCE_PROMPT),
    };
    let fields = parsed.required_string(ARG_ROUTINE_DESCRIPTION).and_then(|description| {
        let style = parsed.string_or(ARG_STYLE_PREFERENCE, styles::DEFAULT_STYLE)?;
        let focus = parsed.string_or(ARG_TECHNICAL_FOCUS, DEFAULT_TECHNICAL_FOCUS)?;
        Ok((description, style, focus))
    });
    let (description, requested_style, focus) = match fields {
        Ok(fields) => fields,
        Err(err) => return arg_error_result(err, TOOL_ENHANCE_PROMPT),
    };

    let style = styles::resolve(requested_style);
    if style.name != requested_style {
        tracing::debug!(
            requested = requested_style,
            resolved = style.name,
            "unknown style, using default"
        );
    }

    text_result(
        render(description, style, focus),
        json!({
            "requested_style": requested_style,
            "style": style.name,
            "technical_focus": focus
        }),
    )
}

pub fn render(description: &str, style: &Style, focus: &str) -> String {
    let spatial = Section::SpatialRelationships;
    let temporal = Section::TemporalDynamics;

    let mut lines = vec![
        "# Enhanced Ribbon Routine Description\n".to_string(),
        format!("## Original Concept\n{description}\n"),
        format!("## Style Framework: {}", title_case(style.name)),
        format!("- Character: {}", style.characteristics_line()),
        format!("- Movement Quality: {}", style.movement_quality),
        format!("- Musical Context: {}\n", style.typical_music),
        "## Technical Vocabulary Enhancement\n".to_string(),
        "### Movement Patterns (Layer 1 Deterministic)".to_string(),
    ];

    for (pattern, details) in Section::MovementPatterns.entries() {
        lines.push(format!("\n**{}**", title_case(pattern)));
        let fields = [
            ("Types", "types"),
            ("Properties", "properties"),
            ("Technical Note", "technical_notes"),
        ];
        for (label, key) in fields {
            if let Some(value) = details.get(key) {
                lines.push(format!("- {label}: {}", value.inline()));
            }
        }
    }

    lines.extend([
        "\n### Spatial Considerations".to_string(),
        format!("- Height Zones: {}", category_keys(spatial, "height_zones", ", ")),
        format!(
            "- Distance Variations: {}",
            category_keys(spatial, "distance_from_body", ", ")
        ),
        format!("- Plane Orientations: {}", category_keys(spatial, "planes", ", ")),
        "\n### Temporal Dynamics".to_string(),
        format!(
            "- Speed Range: {}",
            category_keys(temporal, "speed_variations", " → ")
        ),
        format!(
            "- Rhythmic Possibilities: {}",
            category_keys(temporal, "rhythmic_patterns", ", ")
        ),
        format!(
            "- Transition Timing: {}",
            category_keys(temporal, "transition_timing", ", ")
        ),
        "\n## Compositional Structure (Layer 2 Rules)".to_string(),
        "\n### Technical Requirements".to_string(),
    ]);

    if let Some(Node::Map(requirements)) = rule_category("technical_requirements") {
        for (name, details) in requirements.iter() {
            lines.push(format!("- {name}: {}", details.inline()));
        }
    }
    lines.push("\n### Aesthetic Principles".to_string());
    if let Some(Node::Map(principles)) = rule_category("aesthetic_principles") {
        for (name, elements) in principles.iter() {
            lines.push(format!("- {}: {}", title_case(name), elements.inline()));
        }
    }

    lines.extend([
        "\n## Expressive Integration (Layer 3 Synthesis)".to_string(),
        format!("\nFor a {} interpretation:", style.name),
        format!("1. Movement Quality: Emphasize {}", style.movement_quality),
        format!("2. Spatial Focus: Use {}", spaced(focus)),
        format!("3. Musical Integration: Match {}", style.typical_music),
        "\n## Suggested Development Path".to_string(),
    ]);
    for (index, step) in DEVELOPMENT_PATH.iter().enumerate() {
        lines.push(format!("{}. {step}", index + 1));
    }
    lines.extend(COST_NOTE.iter().map(|line| line.to_string()));

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

fn category_keys(section: Section, category: &str, separator: &str) -> String {
    section
        .category(category)
        .map(|node| node.keys().join(separator))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(result: &Value) -> &str {
        result["content"][0]["text"].as_str().expect("text")
    }

    #[test]
    fn report_sections_in_order() {
        let result = call(&json!({"routine_description": "A slow opening spiral"}));
        assert_eq!(result["isError"], json!(false));
        let text = text_of(&result);
        let headers = [
            "# Enhanced Ribbon Routine Description",
            "## Original Concept\nA slow opening spiral\n",
            "## Style Framework: Classical",
            "## Technical Vocabulary Enhancement",
            "### Spatial Considerations",
            "### Temporal Dynamics",
            "## Compositional Structure (Layer 2 Rules)",
            "## Expressive Integration (Layer 3 Synthesis)",
            "## Suggested Development Path",
            "## Cost Optimization Note",
        ];
        let positions: Vec<usize> = headers
            .iter()
            .map(|header| text.find(header).unwrap_or_else(|| panic!("missing {header}")))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn derived_summary_lines() {
        let text = render("x", styles::resolve("lyrical"), "spatial_exploration");
        assert!(text.contains("- Height Zones: floor, low, mid, high, ceiling\n"));
        assert!(text.contains("- Distance Variations: contact, near, mid, far, extreme\n"));
        assert!(text.contains("- Plane Orientations: horizontal, vertical, diagonal, rotating\n"));
        assert!(text.contains("- Speed Range: very_slow → slow → moderate → fast → very_fast\n"));
        assert!(text.contains("- Transition Timing: immediate, quick, moderate, gradual, extended\n"));
        assert!(text.contains(
            "- Rhythmic Possibilities: regular, syncopated, polyrhythmic, rubato, metric_modulation\n"
        ));
        assert!(text.contains("2. Spatial Focus: Use spatial exploration\n"));
        assert!(text.contains("- Character: flowing_movements, soft_quality, poetic_expression\n"));
    }

    #[test]
    fn movement_patterns_skip_missing_properties() {
        let text = render("x", styles::resolve("classical"), "balanced");
        assert!(text.contains(
            "\n**Spirals**\n- Types: vertical, horizontal, diagonal, conical\n- Properties: tight, loose, uniform, progressive\n"
        ));
        assert!(text.contains(
            "\n**Circles**\n- Types: full_circles, half_circles, figure_8, infinity\n- Technical Note: "
        ));
    }

    #[test]
    fn unknown_style_matches_default() {
        let unknown = call(&json!({
            "routine_description": "floor work",
            "style_preference": "hip_hop"
        }));
        let default = call(&json!({"routine_description": "floor work"}));
        assert_eq!(text_of(&unknown), text_of(&default));
        assert_eq!(unknown["structuredContent"]["requested_style"], json!("hip_hop"));
        assert_eq!(unknown["structuredContent"]["style"], json!("classical"));
    }

    #[test]
    fn known_style_is_used() {
        let result = call(&json!({
            "routine_description": "finale",
            "style_preference": "technical_virtuosic",
            "technical_focus": "temporal_dynamics"
        }));
        let text = text_of(&result);
        assert!(text.contains("## Style Framework: Technical Virtuosic\n"));
        assert!(text.contains("For a technical_virtuosic interpretation:"));
        assert!(text.contains("3. Musical Integration: Match fast_complex_rhythmic"));
    }

    #[test]
    fn rules_render_inline() {
        let text = render("x", styles::resolve("classical"), "balanced");
        assert!(text.contains(
            "- element_combinations: valid_sequences: throw_rotation_catch, spiral_throw_spiral, snake_circle_snake, wrap_unwrap_throw; transition_requirements: smooth_flow, logical_progression, technical_feasibility\n"
        ));
        assert!(text.contains("- Dynamic Range: quiet_moments, explosive_peaks, gradual_buildups\n"));
    }

    #[test]
    fn empty_description_renders_report() {
        let result = call(&json!({"routine_description": ""}));
        assert_eq!(result["isError"], json!(false));
        let text = text_of(&result);
        assert!(text.contains("## Original Concept\n\n\n## Style Framework: Classical"));
        assert!(text.ends_with("- Total savings vs pure LLM: ~60-80%\n"));
    }

    #[test]
    fn missing_description_is_invalid_input() {
        let result = call(&json!({"style_preference": "lyrical"}));
        assert_eq!(result["isError"], json!(true));
        assert_eq!(
            result["structuredContent"]["error"]["kind"],
            json!("invalid_input")
        );
        assert_eq!(
            result["structuredContent"]["error"]["source"],
            json!("ribbon_enhance_prompt")
        );
    }
}
