/// A value in one of the reference tables.
///
/// Maps are slices of pairs so that source order survives rendering.
#[derive(Debug)]
pub enum Node {
    Text(&'static str),
    List(&'static [&'static str]),
    Map(&'static [(&'static str, Node)]),
}

impl Node {
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Map(entries) => entries
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    pub fn keys(&self) -> Vec<&'static str> {
        match self {
            Node::Map(entries) => entries.iter().map(|(name, _)| *name).collect(),
            _ => Vec::new(),
        }
    }

    /// Single-line rendering: lists are comma-joined, maps become `k: v; k: v`.
    pub fn inline(&self) -> String {
        match self {
            Node::Text(text) => (*text).to_string(),
            Node::List(items) => items.join(", "),
            Node::Map(entries) => entries
                .iter()
                .map(|(name, value)| format!("{name}: {}", value.inline()))
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// `spatial_relationships` -> `Spatial Relationships`
pub fn title_case(key: &str) -> String {
    let mut output = String::with_capacity(key.len());
    let mut at_word_start = true;
    for ch in key.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if at_word_start {
                output.extend(ch.to_uppercase());
            } else {
                output.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            output.push(ch);
            at_word_start = true;
        }
    }
    output
}

/// `spatial_relationships` -> `SPATIAL RELATIONSHIPS`
pub fn heading_case(key: &str) -> String {
    key.to_uppercase().replace('_', " ")
}

pub fn spaced(key: &str) -> String {
    key.replace('_', " ")
}

pub fn render_section(name: &str, entries: &[(&'static str, Node)]) -> String {
    let mut lines = vec![format!("\n## {}\n", heading_case(name))];

    for (category, details) in entries {
        lines.push(format!("\n### {}", title_case(category)));
        match details {
            Node::Map(fields) => {
                for (key, value) in fields.iter() {
                    match value {
                        Node::Map(children) => {
                            lines.push(format!("\n**{}**:", title_case(key)));
                            for (child, leaf) in children.iter() {
                                lines.push(format!("  - {child}: {}", leaf.inline()));
                            }
                        }
                        _ => lines.push(format!("  - {key}: {}", value.inline())),
                    }
                }
            }
            other => lines.push(format!("  - {}", other.inline())),
        }
    }

    lines.join("\n")
}
