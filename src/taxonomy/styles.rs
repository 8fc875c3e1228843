use super::node::title_case;

pub const DEFAULT_STYLE: &str = "classical";

#[derive(Debug, PartialEq, Eq)]
pub struct Style {
    pub name: &'static str,
    pub characteristics: &'static [&'static str],
    pub movement_quality: &'static str,
    pub typical_music: &'static str,
}

/// The first entry is the fallback for unknown style names.
pub static STYLES: &[Style] = &[
    Style {
        name: "classical",
        characteristics: &["elegant_lines", "refined_technique", "traditional_beauty"],
        movement_quality: "controlled_grace",
        typical_music: "ballet_classical_orchestral",
    },
    Style {
        name: "contemporary",
        characteristics: &["innovative_patterns", "unexpected_combinations", "modern_aesthetics"],
        movement_quality: "dynamic_freedom",
        typical_music: "electronic_fusion_experimental",
    },
    Style {
        name: "dramatic",
        characteristics: &["intense_expression", "theatrical_quality", "emotional_depth"],
        movement_quality: "passionate_power",
        typical_music: "cinematic_dramatic_intense",
    },
    Style {
        name: "lyrical",
        characteristics: &["flowing_movements", "soft_quality", "poetic_expression"],
        movement_quality: "gentle_fluidity",
        typical_music: "melodic_vocal_emotive",
    },
    Style {
        name: "technical_virtuosic",
        characteristics: &["high_difficulty", "precision_execution", "mastery_display"],
        movement_quality: "brilliant_control",
        typical_music: "fast_complex_rhythmic",
    },
];

pub fn find(name: &str) -> Option<&'static Style> {
    STYLES.iter().find(|style| style.name == name)
}

pub fn resolve(name: &str) -> &'static Style {
    find(name).unwrap_or(&STYLES[0])
}

pub fn names() -> Vec<&'static str> {
    STYLES.iter().map(|style| style.name).collect()
}

impl Style {
    pub fn characteristics_line(&self) -> String {
        self.characteristics.join(", ")
    }

    pub fn render(&self) -> String {
        format!(
            "\n### {}\n  - characteristics: {}\n  - movement_quality: {}\n  - typical_music: {}\n",
            title_case(self.name),
            self.characteristics_line(),
            self.movement_quality,
            self.typical_music
        )
    }
}

pub fn render_styles() -> String {
    STYLES.iter().map(Style::render).collect()
}
