use super::node::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    MovementPatterns,
    SpatialRelationships,
    TemporalDynamics,
    PhysicalProperties,
    CompositionalStructure,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::MovementPatterns,
        Section::SpatialRelationships,
        Section::TemporalDynamics,
        Section::PhysicalProperties,
        Section::CompositionalStructure,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Section::MovementPatterns => "movement_patterns",
            Section::SpatialRelationships => "spatial_relationships",
            Section::TemporalDynamics => "temporal_dynamics",
            Section::PhysicalProperties => "physical_properties",
            Section::CompositionalStructure => "compositional_structure",
        }
    }

    pub fn entries(self) -> &'static [(&'static str, Node)] {
        match self {
            Section::MovementPatterns => MOVEMENT_PATTERNS,
            Section::SpatialRelationships => SPATIAL_RELATIONSHIPS,
            Section::TemporalDynamics => TEMPORAL_DYNAMICS,
            Section::PhysicalProperties => PHYSICAL_PROPERTIES,
            Section::CompositionalStructure => COMPOSITIONAL_STRUCTURE,
        }
    }

    pub fn category(self, name: &str) -> Option<&'static Node> {
        self.entries()
            .iter()
            .find(|(category, _)| *category == name)
            .map(|(_, node)| node)
    }
}

static MOVEMENT_PATTERNS: &[(&str, Node)] = &[
    (
        "spirals",
        Node::Map(&[
            ("types", Node::List(&["vertical", "horizontal", "diagonal", "conical"])),
            ("properties", Node::List(&["tight", "loose", "uniform", "progressive"])),
            ("dynamics", Node::List(&["accelerating", "decelerating", "constant", "pulsing"])),
            (
                "technical_notes",
                Node::Text("Arm must maintain consistent radius; wrist rotation drives spiral formation"),
            ),
        ]),
    ),
    (
        "circles",
        Node::Map(&[
            ("types", Node::List(&["full_circles", "half_circles", "figure_8", "infinity"])),
            ("planes", Node::List(&["horizontal", "vertical", "diagonal", "tilted"])),
            ("sizes", Node::List(&["small", "medium", "large", "giant"])),
            (
                "technical_notes",
                Node::Text("Shoulder stability required; elbow extends for larger circles"),
            ),
        ]),
    ),
    (
        "snakes",
        Node::Map(&[
            ("types", Node::List(&["horizontal_snake", "vertical_snake", "diagonal_snake"])),
            ("wave_properties", Node::List(&["amplitude", "frequency", "symmetry", "decay"])),
            ("transitions", Node::List(&["into_spiral", "into_throw", "into_circle"])),
            (
                "technical_notes",
                Node::Text("Rapid wrist oscillation; arm moves in opposite direction to ribbon"),
            ),
        ]),
    ),
    (
        "throws",
        Node::Map(&[
            ("types", Node::List(&["vertical", "boomerang", "stick_throw", "escape"])),
            ("heights", Node::List(&["low", "medium", "high", "ceiling"])),
            ("rotations", Node::List(&["none", "half_turn", "full_turn", "multiple"])),
            (
                "technical_notes",
                Node::Text("Release point determines trajectory; catch requires visual tracking"),
            ),
        ]),
    ),
    (
        "wraps",
        Node::Map(&[
            ("types", Node::List(&["body_wrap", "limb_wrap", "neck_wrap", "waist_wrap"])),
            ("entry_methods", Node::List(&["spiral_into", "throw_into", "pass_through"])),
            ("exit_methods", Node::List(&["unwrap", "pull_through", "throw_out"])),
            (
                "technical_notes",
                Node::Text("Tension control critical; body position affects wrap geometry"),
            ),
        ]),
    ),
    (
        "swings",
        Node::Map(&[
            ("types", Node::List(&["pendulum", "arc", "circular", "elliptical"])),
            ("amplitudes", Node::List(&["small", "medium", "large", "full_extension"])),
            ("rhythms", Node::List(&["regular", "syncopated", "accelerating", "decelerating"])),
            (
                "technical_notes",
                Node::Text("Momentum management; gravity assists natural motion"),
            ),
        ]),
    ),
];

static SPATIAL_RELATIONSHIPS: &[(&str, Node)] = &[
    (
        "height_zones",
        Node::Map(&[
            (
                "floor",
                Node::Map(&[
                    ("range", Node::Text("0-50cm")),
                    ("techniques", Node::List(&["floor_rolls", "low_snakes", "ground_spirals"])),
                ]),
            ),
            (
                "low",
                Node::Map(&[
                    ("range", Node::Text("50cm-1m")),
                    ("techniques", Node::List(&["low_circles", "leg_passes", "seated_elements"])),
                ]),
            ),
            (
                "mid",
                Node::Map(&[
                    ("range", Node::Text("1-1.5m")),
                    (
                        "techniques",
                        Node::List(&["standard_circles", "body_wraps", "horizontal_patterns"]),
                    ),
                ]),
            ),
            (
                "high",
                Node::Map(&[
                    ("range", Node::Text("1.5-2.5m")),
                    (
                        "techniques",
                        Node::List(&["overhead_circles", "vertical_spirals", "high_throws"]),
                    ),
                ]),
            ),
            (
                "ceiling",
                Node::Map(&[
                    ("range", Node::Text("2.5m+")),
                    (
                        "techniques",
                        Node::List(&["maximum_throws", "ceiling_touches", "full_extension"]),
                    ),
                ]),
            ),
        ]),
    ),
    (
        "distance_from_body",
        Node::Map(&[
            (
                "contact",
                Node::Map(&[
                    ("range", Node::Text("0-20cm")),
                    ("uses", Node::List(&["wraps", "body_passes", "close_spirals"])),
                ]),
            ),
            (
                "near",
                Node::Map(&[
                    ("range", Node::Text("20-100cm")),
                    (
                        "uses",
                        Node::List(&["standard_elements", "medium_circles", "controlled_patterns"]),
                    ),
                ]),
            ),
            (
                "mid",
                Node::Map(&[
                    ("range", Node::Text("1-2m")),
                    ("uses", Node::List(&["extended_circles", "large_spirals", "spatial_fills"])),
                ]),
            ),
            (
                "far",
                Node::Map(&[
                    ("range", Node::Text("2-4m")),
                    (
                        "uses",
                        Node::List(&["full_ribbon_extensions", "throws", "maximum_reach"]),
                    ),
                ]),
            ),
            (
                "extreme",
                Node::Map(&[
                    ("range", Node::Text("4m+")),
                    (
                        "uses",
                        Node::List(&["stick_end_releases", "maximum_throws", "aerial_work"]),
                    ),
                ]),
            ),
        ]),
    ),
    (
        "planes",
        Node::Map(&[
            (
                "horizontal",
                Node::Map(&[
                    ("orientation", Node::Text("parallel_to_floor")),
                    ("elements", Node::List(&["circles", "snakes", "spirals"])),
                ]),
            ),
            (
                "vertical",
                Node::Map(&[
                    ("orientation", Node::Text("perpendicular_to_floor")),
                    ("elements", Node::List(&["vertical_circles", "drops", "rises"])),
                ]),
            ),
            (
                "diagonal",
                Node::Map(&[
                    ("orientation", Node::Text("45_degrees")),
                    (
                        "elements",
                        Node::List(&["diagonal_snakes", "tilted_spirals", "angled_throws"]),
                    ),
                ]),
            ),
            (
                "rotating",
                Node::Map(&[
                    ("orientation", Node::Text("changing")),
                    (
                        "elements",
                        Node::List(&["plane_transitions", "3d_spirals", "complex_paths"]),
                    ),
                ]),
            ),
        ]),
    ),
    (
        "floor_patterns",
        Node::Map(&[
            ("linear", Node::List(&["straight_lines", "zigzags", "spiraling_lines"])),
            ("circular", Node::List(&["circles", "ellipses", "figure_8s"])),
            ("geometric", Node::List(&["triangles", "squares", "star_patterns"])),
            ("organic", Node::List(&["curves", "waves", "freeform"])),
        ]),
    ),
];

static TEMPORAL_DYNAMICS: &[(&str, Node)] = &[
    (
        "speed_variations",
        Node::Map(&[
            (
                "very_slow",
                Node::Map(&[
                    ("tempo", Node::Text("largo")),
                    (
                        "uses",
                        Node::List(&["dramatic_holds", "controlled_tension", "lyrical_moments"]),
                    ),
                ]),
            ),
            (
                "slow",
                Node::Map(&[
                    ("tempo", Node::Text("adagio")),
                    (
                        "uses",
                        Node::List(&["graceful_transitions", "flow_emphasis", "aesthetic_shapes"]),
                    ),
                ]),
            ),
            (
                "moderate",
                Node::Map(&[
                    ("tempo", Node::Text("andante")),
                    (
                        "uses",
                        Node::List(&["standard_elements", "balanced_pacing", "technical_precision"]),
                    ),
                ]),
            ),
            (
                "fast",
                Node::Map(&[
                    ("tempo", Node::Text("allegro")),
                    (
                        "uses",
                        Node::List(&["quick_transitions", "rapid_patterns", "energetic_sequences"]),
                    ),
                ]),
            ),
            (
                "very_fast",
                Node::Map(&[
                    ("tempo", Node::Text("presto")),
                    (
                        "uses",
                        Node::List(&["lightning_snakes", "rapid_circles", "virtuosic_displays"]),
                    ),
                ]),
            ),
        ]),
    ),
    (
        "rhythmic_patterns",
        Node::Map(&[
            (
                "regular",
                Node::Map(&[
                    ("structure", Node::Text("consistent_beats")),
                    ("feel", Node::Text("steady_pulse")),
                ]),
            ),
            (
                "syncopated",
                Node::Map(&[
                    ("structure", Node::Text("off_beat_accents")),
                    ("feel", Node::Text("unexpected_emphasis")),
                ]),
            ),
            (
                "polyrhythmic",
                Node::Map(&[
                    ("structure", Node::Text("multiple_rhythms")),
                    ("feel", Node::Text("complex_layering")),
                ]),
            ),
            (
                "rubato",
                Node::Map(&[
                    ("structure", Node::Text("flexible_timing")),
                    ("feel", Node::Text("expressive_freedom")),
                ]),
            ),
            (
                "metric_modulation",
                Node::Map(&[
                    ("structure", Node::Text("tempo_shifts")),
                    ("feel", Node::Text("dynamic_changes")),
                ]),
            ),
        ]),
    ),
    (
        "acceleration_curves",
        Node::Map(&[
            ("linear", Node::Text("steady_increase")),
            ("exponential", Node::Text("rapid_buildup")),
            ("logarithmic", Node::Text("quick_start_then_slow")),
            ("sigmoid", Node::Text("slow_fast_slow")),
            ("stepped", Node::Text("discrete_speed_changes")),
        ]),
    ),
    (
        "transition_timing",
        Node::Map(&[
            (
                "immediate",
                Node::Map(&[
                    ("duration", Node::Text("0-0.5s")),
                    ("character", Node::Text("sharp_contrast")),
                ]),
            ),
            (
                "quick",
                Node::Map(&[
                    ("duration", Node::Text("0.5-1s")),
                    ("character", Node::Text("clear_change")),
                ]),
            ),
            (
                "moderate",
                Node::Map(&[
                    ("duration", Node::Text("1-2s")),
                    ("character", Node::Text("smooth_flow")),
                ]),
            ),
            (
                "gradual",
                Node::Map(&[
                    ("duration", Node::Text("2-4s")),
                    ("character", Node::Text("seamless_blend")),
                ]),
            ),
            (
                "extended",
                Node::Map(&[
                    ("duration", Node::Text("4s+")),
                    ("character", Node::Text("dramatic_transformation")),
                ]),
            ),
        ]),
    ),
];

static PHYSICAL_PROPERTIES: &[(&str, Node)] = &[
    (
        "tension_states",
        Node::Map(&[
            (
                "slack",
                Node::Map(&[(
                    "characteristics",
                    Node::List(&["loose_fabric", "natural_drape", "minimal_control"]),
                )]),
            ),
            (
                "light",
                Node::Map(&[(
                    "characteristics",
                    Node::List(&["gentle_tension", "floating_quality", "subtle_control"]),
                )]),
            ),
            (
                "medium",
                Node::Map(&[(
                    "characteristics",
                    Node::List(&["balanced_tension", "clear_shapes", "standard_control"]),
                )]),
            ),
            (
                "high",
                Node::Map(&[(
                    "characteristics",
                    Node::List(&["taut_fabric", "crisp_lines", "maximum_control"]),
                )]),
            ),
            (
                "variable",
                Node::Map(&[(
                    "characteristics",
                    Node::List(&["changing_tension", "dynamic_shapes", "expressive_control"]),
                )]),
            ),
        ]),
    ),
    (
        "arc_geometries",
        Node::Map(&[
            (
                "parabolic",
                Node::Map(&[
                    ("physics", Node::Text("natural_throw_trajectory")),
                    ("aesthetics", Node::Text("graceful_curves")),
                ]),
            ),
            (
                "circular",
                Node::Map(&[
                    ("physics", Node::Text("constant_radius")),
                    ("aesthetics", Node::Text("perfect_shapes")),
                ]),
            ),
            (
                "elliptical",
                Node::Map(&[
                    ("physics", Node::Text("dual_focal_points")),
                    ("aesthetics", Node::Text("dynamic_ovals")),
                ]),
            ),
            (
                "hyperbolic",
                Node::Map(&[
                    ("physics", Node::Text("diverging_paths")),
                    ("aesthetics", Node::Text("dramatic_spreads")),
                ]),
            ),
            (
                "spiral",
                Node::Map(&[
                    ("physics", Node::Text("rotating_radius")),
                    ("aesthetics", Node::Text("flowing_helixes")),
                ]),
            ),
        ]),
    ),
    (
        "wave_properties",
        Node::Map(&[
            ("amplitude", Node::List(&["small", "medium", "large", "extreme"])),
            ("frequency", Node::List(&["slow", "moderate", "fast", "rapid"])),
            ("symmetry", Node::List(&["symmetric", "asymmetric", "progressive", "chaotic"])),
            ("decay", Node::List(&["sustained", "gradual", "rapid", "immediate"])),
        ]),
    ),
    (
        "material_behavior",
        Node::Map(&[
            (
                "flow",
                Node::Map(&[(
                    "characteristics",
                    Node::List(&["smooth_motion", "continuous_fabric", "fluid_paths"]),
                )]),
            ),
            (
                "snap",
                Node::Map(&[(
                    "characteristics",
                    Node::List(&["sharp_movements", "crisp_sounds", "defined_endpoints"]),
                )]),
            ),
            (
                "float",
                Node::Map(&[(
                    "characteristics",
                    Node::List(&["airborne_time", "weightless_feel", "suspended_moments"]),
                )]),
            ),
            (
                "whip",
                Node::Map(&[(
                    "characteristics",
                    Node::List(&["crack_potential", "high_speed", "precision_control"]),
                )]),
            ),
        ]),
    ),
];

static COMPOSITIONAL_STRUCTURE: &[(&str, Node)] = &[
    (
        "element_sequences",
        Node::Map(&[
            (
                "progressive_difficulty",
                Node::List(&["simple_to_complex", "technical_buildup", "climactic_peak"]),
            ),
            (
                "thematic_variation",
                Node::List(&["motif_introduction", "development", "recapitulation"]),
            ),
            (
                "contrasting_sections",
                Node::List(&["varied_dynamics", "spatial_contrast", "tempo_shifts"]),
            ),
            (
                "narrative_arc",
                Node::List(&["beginning", "development", "climax", "resolution"]),
            ),
        ]),
    ),
    (
        "body_ribbon_coordination",
        Node::Map(&[
            (
                "synchronous",
                Node::Map(&[
                    ("description", Node::Text("body_and_ribbon_move_together")),
                    ("effect", Node::Text("unified_motion")),
                ]),
            ),
            (
                "complementary",
                Node::Map(&[
                    ("description", Node::Text("body_and_ribbon_different_but_related")),
                    ("effect", Node::Text("visual_interest")),
                ]),
            ),
            (
                "contrasting",
                Node::Map(&[
                    ("description", Node::Text("body_and_ribbon_oppose")),
                    ("effect", Node::Text("dynamic_tension")),
                ]),
            ),
            (
                "independent",
                Node::Map(&[
                    ("description", Node::Text("body_and_ribbon_separate")),
                    ("effect", Node::Text("complex_layers")),
                ]),
            ),
        ]),
    ),
    (
        "music_synchronization",
        Node::Map(&[
            (
                "rhythmic_matching",
                Node::Map(&[
                    ("precision", Node::Text("hit_specific_beats")),
                    ("impact", Node::Text("musical_clarity")),
                ]),
            ),
            (
                "phrasing",
                Node::Map(&[
                    ("precision", Node::Text("match_musical_phrases")),
                    ("impact", Node::Text("artistic_interpretation")),
                ]),
            ),
            (
                "dynamic_parallel",
                Node::Map(&[
                    ("precision", Node::Text("match_volume_intensity")),
                    ("impact", Node::Text("emotional_resonance")),
                ]),
            ),
            (
                "structural_alignment",
                Node::Map(&[
                    ("precision", Node::Text("match_musical_form")),
                    ("impact", Node::Text("choreographic_coherence")),
                ]),
            ),
        ]),
    ),
    (
        "spatial_progression",
        Node::Map(&[
            (
                "expanding",
                Node::List(&["center_to_periphery", "small_to_large", "contained_to_open"]),
            ),
            (
                "contracting",
                Node::List(&["periphery_to_center", "large_to_small", "open_to_contained"]),
            ),
            (
                "traveling",
                Node::List(&["diagonal_crosses", "circular_paths", "linear_trajectories"]),
            ),
            (
                "stationary",
                Node::List(&["fixed_location", "vertical_exploration", "depth_variation"]),
            ),
        ]),
    ),
];
