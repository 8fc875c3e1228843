use super::node::{Node, title_case};

pub static COMPOSITIONAL_RULES: &[(&str, Node)] = &[
    (
        "technical_requirements",
        Node::Map(&[
            (
                "code_of_points_2025",
                Node::Map(&[
                    (
                        "difficulty_groups",
                        Node::List(&["Jumps/Leaps", "Balance", "Rotations", "Flexibility"]),
                    ),
                    ("apparatus_mastery", Node::List(&["Throws", "Catches", "Manipulation"])),
                    (
                        "risk_elements",
                        Node::List(&["High_throws", "Complex_catches", "Dynamic_work"]),
                    ),
                    (
                        "artistic_components",
                        Node::List(&["Musicality", "Expression", "Character"]),
                    ),
                ]),
            ),
            (
                "element_combinations",
                Node::Map(&[
                    (
                        "valid_sequences",
                        Node::List(&[
                            "throw_rotation_catch",
                            "spiral_throw_spiral",
                            "snake_circle_snake",
                            "wrap_unwrap_throw",
                        ]),
                    ),
                    (
                        "transition_requirements",
                        Node::List(&["smooth_flow", "logical_progression", "technical_feasibility"]),
                    ),
                ]),
            ),
        ]),
    ),
    (
        "aesthetic_principles",
        Node::Map(&[
            (
                "visual_balance",
                Node::List(&["symmetry_asymmetry", "height_variation", "spatial_distribution"]),
            ),
            (
                "flow_continuity",
                Node::List(&["seamless_transitions", "momentum_maintenance", "organic_development"]),
            ),
            (
                "dynamic_range",
                Node::List(&["quiet_moments", "explosive_peaks", "gradual_buildups"]),
            ),
            (
                "expressive_clarity",
                Node::List(&["intentional_movements", "clear_character", "emotional_connection"]),
            ),
        ]),
    ),
    (
        "musicality_rules",
        Node::Map(&[
            (
                "structural_alignment",
                Node::List(&["intro_matches_music", "climax_synchronized", "ending_resolution"]),
            ),
            (
                "rhythmic_precision",
                Node::List(&["beat_accuracy", "phrase_matching", "accent_emphasis"]),
            ),
            (
                "interpretive_freedom",
                Node::List(&["rubato_moments", "personal_expression", "artistic_choices"]),
            ),
        ]),
    ),
];

pub fn rule_category(name: &str) -> Option<&'static Node> {
    COMPOSITIONAL_RULES
        .iter()
        .find(|(category, _)| *category == name)
        .map(|(_, node)| node)
}

/// Renders every rule category as `### Category` with one bold block per rule.
pub fn render_rules() -> String {
    let mut output = String::new();
    for (category, details) in COMPOSITIONAL_RULES {
        output.push_str(&format!("\n### {}\n", title_case(category)));
        let Node::Map(rules) = details else {
            output.push_str(&format!("  - {}\n", details.inline()));
            continue;
        };
        for (key, value) in rules.iter() {
            output.push_str(&format!("\n**{}**:\n", title_case(key)));
            match value {
                Node::Map(children) => {
                    for (child, leaf) in children.iter() {
                        output.push_str(&format!("  - {child}: {}\n", leaf.inline()));
                    }
                }
                other => output.push_str(&format!("  - {}\n", other.inline())),
            }
        }
    }
    output
}
