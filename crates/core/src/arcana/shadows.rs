//! # Hall of Shadows
//!
//! Jungian shadow-work catalog: archetype profiles, therapeutic modalities,
//! and the assessment scoring that maps questionnaire responses onto a
//! personal shadow constellation.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{json, Value};

/// Shadow archetypes for psychological integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadowArchetype {
    Destroyer,
    Deceiver,
    Addict,
    Victim,
    Tyrant,
    Coward,
    Saboteur,
    Martyr,
    Critic,
    Perfectionist,
    Rebel,
    Seducer,
    Glutton,
    Miser,
    Wanderer,
}

impl ShadowArchetype {
    pub fn all() -> Vec<ShadowArchetype> {
        use ShadowArchetype::*;
        vec![
            Destroyer, Deceiver, Addict, Victim, Tyrant, Coward, Saboteur, Martyr, Critic,
            Perfectionist, Rebel, Seducer, Glutton, Miser, Wanderer,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ShadowArchetype::Destroyer => "The Destroyer",
            ShadowArchetype::Deceiver => "The Deceiver",
            ShadowArchetype::Addict => "The Addict",
            ShadowArchetype::Victim => "The Victim",
            ShadowArchetype::Tyrant => "The Tyrant",
            ShadowArchetype::Coward => "The Coward",
            ShadowArchetype::Saboteur => "The Saboteur",
            ShadowArchetype::Martyr => "The Martyr",
            ShadowArchetype::Critic => "The Critic",
            ShadowArchetype::Perfectionist => "The Perfectionist",
            ShadowArchetype::Rebel => "The Rebel",
            ShadowArchetype::Seducer => "The Seducer",
            ShadowArchetype::Glutton => "The Glutton",
            ShadowArchetype::Miser => "The Miser",
            ShadowArchetype::Wanderer => "The Wanderer",
        }
    }
}

/// Therapeutic modalities for shadow integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TherapeuticApproach {
    JungianAnalysis,
    GestaltTherapy,
    CognitiveBehavioral,
    SomaticExperiencing,
    Psychodrama,
    ArtTherapy,
    DreamWork,
    ActiveImagination,
    InnerChildWork,
    PartsWork,
}

/// Rich profile of one archetype.
#[derive(Debug, Clone, Serialize)]
pub struct ArchetypeProfile {
    pub description: &'static str,
    pub positive_aspect: &'static str,
    pub negative_aspect: &'static str,
    pub origin_wounds: &'static [&'static str],
    pub protective_function: &'static str,
    pub integration_gift: &'static str,
    pub body_location: &'static str,
    pub element: &'static str,
    pub tarot_correspondence: &'static str,
    pub therapeutic_focus: &'static str,
}

/// An individual's active shadow aspect.
#[derive(Debug, Clone, Serialize)]
pub struct ShadowAspect {
    pub archetype: ShadowArchetype,
    pub manifestation: String,
    pub origin_wound: String,
    pub protective_function: String,
    pub integration_gift: String,
    pub therapeutic_approaches: Vec<TherapeuticApproach>,
    pub activation_triggers: Vec<String>,
    pub integration_practices: Vec<String>,
    pub healing_affirmations: Vec<String>,
}

/// A personal shadow constellation built from assessment responses.
#[derive(Debug, Clone, Serialize)]
pub struct PersonalShadowMap {
    pub primary_shadows: Vec<ShadowAspect>,
    /// 0.0 to 1.0
    pub integration_level: f64,
    pub current_work_focus: Option<ShadowArchetype>,
    pub resistance_patterns: Vec<String>,
    pub support_resources: Vec<String>,
}

/// A generated shadow-work session plan.
#[derive(Debug, Clone, Serialize)]
pub struct TherapeuticSession {
    pub session_id: String,
    pub focus_archetype: ShadowArchetype,
    pub approach: TherapeuticApproach,
    pub opening_inquiry: String,
    pub techniques: Vec<String>,
    pub homework: Vec<String>,
    /// Integration level carried over from the shadow map
    pub integration_score: f64,
}

/// The hall itself: static registries plus the assessment logic.
pub struct HallOfShadows {
    pub archetypes: HashMap<ShadowArchetype, ArchetypeProfile>,
    pub modalities: HashMap<TherapeuticApproach, Value>,
    pub integration_practices: Value,
}

impl Default for HallOfShadows {
    fn default() -> Self {
        Self::new()
    }
}

impl HallOfShadows {
    pub fn new() -> Self {
        Self {
            archetypes: archetype_profiles(),
            modalities: therapeutic_modalities(),
            integration_practices: integration_practices(),
        }
    }

    /// Build a personal shadow map from questionnaire responses (each scored
    /// 0-10).
    pub fn create_personal_shadow_map(&self, responses: &HashMap<String, f64>) -> PersonalShadowMap {
        let primary_shadows = self.analyze_shadow_patterns(responses);
        let integration_level = integration_level(responses);
        let current_work_focus = work_focus(&primary_shadows, responses);
        let resistance_patterns = resistance_patterns(responses);
        let support_resources = support_resources(&primary_shadows);
        PersonalShadowMap {
            primary_shadows,
            integration_level,
            current_work_focus,
            resistance_patterns,
            support_resources,
        }
    }

    /// Plan a session for the map's current focus under a chosen modality.
    /// Returns `None` when the map has no active shadow to work with.
    pub fn generate_session(
        &self,
        shadow_map: &PersonalShadowMap,
        approach: TherapeuticApproach,
        session_number: u32,
    ) -> Option<TherapeuticSession> {
        let focus = shadow_map.current_work_focus?;
        let aspect = shadow_map
            .primary_shadows
            .iter()
            .find(|s| s.archetype == focus)?;
        let profile = self.archetypes.get(&focus);

        let techniques: Vec<String> = self.modalities.get(&approach).map_or_else(Vec::new, |m| {
            m["techniques"]
                .as_array()
                .map(|list| {
                    list.iter()
                        .filter_map(|t| t.as_str().map(String::from))
                        .collect()
                })
                .unwrap_or_default()
        });

        Some(TherapeuticSession {
            session_id: format!("{}_{:03}", focus.display_name().to_lowercase().replace(' ', "_"), session_number),
            focus_archetype: focus,
            approach,
            opening_inquiry: profile.map_or_else(
                || format!("What does {} want you to know today?", focus.display_name()),
                |p| format!("{} — where does this live in your body ({})?", p.description, p.body_location),
            ),
            techniques,
            homework: aspect.integration_practices.clone(),
            integration_score: shadow_map.integration_level,
        })
    }

    fn analyze_shadow_patterns(&self, responses: &HashMap<String, f64>) -> Vec<ShadowAspect> {
        let score = |key: &str| responses.get(key).copied().unwrap_or(0.0);
        let mut shadows = Vec::new();

        if score("anger_issues") > 7.0 {
            shadows.push(ShadowAspect {
                archetype: ShadowArchetype::Destroyer,
                manifestation: "Explosive anger, breaking relationships and objects".into(),
                origin_wound: "Childhood powerlessness and betrayal".into(),
                protective_function: "Prevents vulnerability and future hurt".into(),
                integration_gift: "Healthy boundaries and discernment".into(),
                therapeutic_approaches: vec![
                    TherapeuticApproach::GestaltTherapy,
                    TherapeuticApproach::SomaticExperiencing,
                ],
                activation_triggers: vec![
                    "feeling_controlled".into(),
                    "injustice".into(),
                    "criticism".into(),
                ],
                integration_practices: vec![
                    "anger_work".into(),
                    "martial_arts".into(),
                    "assertiveness_training".into(),
                ],
                healing_affirmations: vec![
                    "My anger contains important information about my boundaries".into(),
                    "I can be powerful without being destructive".into(),
                    "My fire energy serves life and growth".into(),
                ],
            });
        }

        if score("people_pleasing") > 7.0 {
            shadows.push(ShadowAspect {
                archetype: ShadowArchetype::Deceiver,
                manifestation: "Hiding true feelings, agreeing when disagreeing".into(),
                origin_wound: "Emotional unsafety in family of origin".into(),
                protective_function: "Maintains approval and avoids conflict".into(),
                integration_gift: "Authentic communication and diplomacy".into(),
                therapeutic_approaches: vec![
                    TherapeuticApproach::PartsWork,
                    TherapeuticApproach::GestaltTherapy,
                ],
                activation_triggers: vec![
                    "conflict".into(),
                    "disapproval".into(),
                    "confrontation".into(),
                ],
                integration_practices: vec![
                    "truth_telling_exercises".into(),
                    "boundary_practice".into(),
                    "assertiveness".into(),
                ],
                healing_affirmations: vec![
                    "My authentic self is worthy of love and acceptance".into(),
                    "I can disagree and still be loved".into(),
                    "Truth serves connection better than deception".into(),
                ],
            });
        }

        shadows
    }
}

/// Mean of the five self-report factors, each on a 0-10 scale.
fn integration_level(responses: &HashMap<String, f64>) -> f64 {
    let factor = |key: &str, default: f64| responses.get(key).copied().unwrap_or(default) / 10.0;
    let factors = [
        factor("self_awareness", 5.0),
        factor("emotional_regulation", 5.0),
        factor("projection_awareness", 5.0),
        factor("therapy_experience", 0.0),
        factor("spiritual_practice", 0.0),
    ];
    factors.iter().sum::<f64>() / factors.len() as f64
}

/// The shadow whose triggers are most active becomes the work focus.
fn work_focus(shadows: &[ShadowAspect], responses: &HashMap<String, f64>) -> Option<ShadowArchetype> {
    shadows
        .iter()
        .max_by_key(|shadow| {
            shadow
                .activation_triggers
                .iter()
                .filter(|t| responses.get(t.as_str()).copied().unwrap_or(0.0) > 7.0)
                .count()
        })
        .map(|shadow| shadow.archetype)
}

fn resistance_patterns(responses: &HashMap<String, f64>) -> Vec<String> {
    let score = |key: &str| responses.get(key).copied().unwrap_or(0.0);
    let mut patterns = Vec::new();
    if score("perfectionism") > 7.0 {
        patterns.push("Perfectionist resistance: wanting to do shadow work 'perfectly'".into());
    }
    if score("intellectualization") > 7.0 {
        patterns.push("Intellectual bypass: analyzing instead of feeling".into());
    }
    if score("people_pleasing") > 7.0 {
        patterns.push("People-pleasing: fear of disappointing therapist".into());
    }
    if score("control_issues") > 7.0 {
        patterns.push("Control resistance: needing to manage the process".into());
    }
    patterns
}

fn support_resources(shadows: &[ShadowAspect]) -> Vec<String> {
    let mut resources: Vec<String> = vec![
        "Regular therapy with qualified practitioner".into(),
        "Supportive community or group work".into(),
        "Daily meditation or mindfulness practice".into(),
        "Creative expression outlet".into(),
        "Physical exercise or somatic practice".into(),
    ];
    for shadow in shadows {
        let extra: &[&str] = match shadow.archetype {
            ShadowArchetype::Destroyer => &["Martial arts", "Anger management group"],
            ShadowArchetype::Deceiver => &["Authentic relating groups", "Truth-telling practice"],
            ShadowArchetype::Victim => &["Empowerment workshops", "Assertiveness training"],
            ShadowArchetype::Addict => &["12-step programs", "Addiction counseling"],
            _ => &[],
        };
        resources.extend(extra.iter().map(|s| s.to_string()));
    }
    resources.dedup();
    resources
}

fn archetype_profiles() -> HashMap<ShadowArchetype, ArchetypeProfile> {
    HashMap::from([
        (
            ShadowArchetype::Destroyer,
            ArchetypeProfile {
                description: "The part that tears down, breaks, and destroys",
                positive_aspect: "Necessary destruction, clearing old patterns",
                negative_aspect: "Destructive rage, self-sabotage, harm to others",
                origin_wounds: &["abandonment", "betrayal", "powerlessness", "injustice"],
                protective_function: "Attempts to destroy before being destroyed",
                integration_gift: "Discernment, healthy boundaries, transformative power",
                body_location: "hands, jaw, lower back",
                element: "fire",
                tarot_correspondence: "tower",
                therapeutic_focus: "anger_work_and_healthy_assertion",
            },
        ),
        (
            ShadowArchetype::Deceiver,
            ArchetypeProfile {
                description: "The part that lies, manipulates, and hides truth",
                positive_aspect: "Adaptive survival strategy, protection of vulnerability",
                negative_aspect: "Compulsive lying, manipulation, loss of authentic self",
                origin_wounds: &["emotional_unsafe", "truth_punished", "shame", "exposure_trauma"],
                protective_function: "Hides authentic self to avoid rejection or harm",
                integration_gift: "Authentic communication, strategic thinking, diplomacy",
                body_location: "throat, eyes, nervous system",
                element: "air",
                tarot_correspondence: "magician_reversed",
                therapeutic_focus: "truth_telling_and_vulnerability_practice",
            },
        ),
        (
            ShadowArchetype::Addict,
            ArchetypeProfile {
                description: "The part that compulsively seeks external fulfillment",
                positive_aspect: "Deep longing for connection and transcendence",
                negative_aspect: "Destructive dependencies, loss of agency, escapism",
                origin_wounds: &["emotional_neglect", "trauma", "disconnection", "emptiness"],
                protective_function: "Medicates pain and fills inner void",
                integration_gift: "Passionate engagement, spiritual seeking, deep feeling",
                body_location: "heart, gut, dopamine pathways",
                element: "water",
                tarot_correspondence: "devil",
                therapeutic_focus: "addiction_recovery_and_spiritual_connection",
            },
        ),
        (
            ShadowArchetype::Victim,
            ArchetypeProfile {
                description: "The part that feels helpless and persecuted",
                positive_aspect: "Awareness of injustice, empathy for suffering",
                negative_aspect: "Learned helplessness, blame, martyrdom complex",
                origin_wounds: &["abuse", "neglect", "powerlessness", "invalidation"],
                protective_function: "Avoids responsibility and garners sympathy/support",
                integration_gift: "Compassion, justice orientation, resilience",
                body_location: "solar plexus, shoulders, posture",
                element: "earth",
                tarot_correspondence: "five_of_pentacles",
                therapeutic_focus: "empowerment_and_responsibility_reclamation",
            },
        ),
        (
            ShadowArchetype::Tyrant,
            ArchetypeProfile {
                description: "The part that dominates and controls others",
                positive_aspect: "Leadership capacity, protective instincts",
                negative_aspect: "Abuse of power, domination, cruelty",
                origin_wounds: &["powerlessness", "chaos", "being_controlled", "fear"],
                protective_function: "Maintains illusion of control and safety",
                integration_gift: "Benevolent leadership, protective strength, organization",
                body_location: "chest, arms, jaw",
                element: "fire",
                tarot_correspondence: "emperor_reversed",
                therapeutic_focus: "power_dynamics_and_healthy_authority",
            },
        ),
        (
            ShadowArchetype::Coward,
            ArchetypeProfile {
                description: "The part that avoids, retreats, and hides",
                positive_aspect: "Prudence, self-preservation instincts",
                negative_aspect: "Paralysis, missed opportunities, self-limitation",
                origin_wounds: &["criticism", "failure", "humiliation", "overwhelm"],
                protective_function: "Avoids potential pain or failure",
                integration_gift: "Careful consideration, strategic retreat, humility",
                body_location: "back, legs, nervous system",
                element: "earth",
                tarot_correspondence: "seven_of_swords",
                therapeutic_focus: "courage_building_and_gradual_exposure",
            },
        ),
        (
            ShadowArchetype::Saboteur,
            ArchetypeProfile {
                description: "The part that undermines success and happiness",
                positive_aspect: "Quality control, prevention of premature action",
                negative_aspect: "Self-destruction, success phobia, chronic self-defeat",
                origin_wounds: &["success_guilt", "fear_of_outshining", "impostor_syndrome"],
                protective_function: "Prevents disappointment by ensuring failure",
                integration_gift: "Quality assurance, realistic planning, humility",
                body_location: "hands, feet, decision-making centers",
                element: "air",
                tarot_correspondence: "ten_of_swords",
                therapeutic_focus: "success_tolerance_and_self_worth_building",
            },
        ),
        (
            ShadowArchetype::Critic,
            ArchetypeProfile {
                description: "The part that judges, criticizes, and finds fault",
                positive_aspect: "Discernment, quality standards, improvement drive",
                negative_aspect: "Harsh self-judgment, perfectionism, criticism of others",
                origin_wounds: &["conditional_love", "perfectionist_upbringing", "criticism"],
                protective_function: "Attempts to prevent criticism by being perfect",
                integration_gift: "Healthy discernment, quality consciousness, improvement",
                body_location: "head, eyes, tension patterns",
                element: "air",
                tarot_correspondence: "judgment_reversed",
                therapeutic_focus: "self_compassion_and_acceptance_practice",
            },
        ),
    ])
}

fn therapeutic_modalities() -> HashMap<TherapeuticApproach, Value> {
    HashMap::from([
        (
            TherapeuticApproach::JungianAnalysis,
            json!({
                "description": "Depth psychology exploring unconscious patterns",
                "techniques": ["shadow_dialogue", "active_imagination", "dream_analysis", "amplification"],
                "focus": "Integration of unconscious content into conscious awareness",
                "session_structure": "90_minutes_weekly_long_term",
                "best_for": ["archetypal_patterns", "recurring_dreams", "midlife_transitions"],
            }),
        ),
        (
            TherapeuticApproach::GestaltTherapy,
            json!({
                "description": "Present-moment awareness and integration of splits",
                "techniques": ["empty_chair", "two_chair_work", "body_awareness", "contact_experiments"],
                "focus": "Integration of disowned parts through present-moment experience",
                "session_structure": "60_minutes_weekly_medium_term",
                "best_for": ["internal_conflicts", "emotional_blocks", "relationship_patterns"],
            }),
        ),
        (
            TherapeuticApproach::SomaticExperiencing,
            json!({
                "description": "Body-based trauma resolution and nervous system regulation",
                "techniques": ["titration", "pendulation", "resource_building", "body_sensing"],
                "focus": "Healing trauma stored in the nervous system and body",
                "session_structure": "60_minutes_as_needed",
                "best_for": ["trauma_symptoms", "anxiety", "dissociation", "body_armor"],
            }),
        ),
        (
            TherapeuticApproach::PartsWork,
            json!({
                "description": "Internal Family Systems approach to healing inner conflicts",
                "techniques": ["parts_identification", "self_leadership", "internal_dialogue", "unburdening"],
                "focus": "Healing relationships between different internal parts",
                "session_structure": "60_minutes_weekly_medium_term",
                "best_for": ["internal_conflicts", "complex_trauma", "addiction", "relationships"],
            }),
        ),
        (
            TherapeuticApproach::ArtTherapy,
            json!({
                "description": "Creative expression for psychological healing",
                "techniques": ["drawing", "painting", "sculpture", "mandala_creation", "mask_making"],
                "focus": "Non-verbal processing and expression of shadow material",
                "session_structure": "90_minutes_weekly_medium_term",
                "best_for": ["non_verbal_trauma", "creative_blocks", "self_expression"],
            }),
        ),
        (
            TherapeuticApproach::DreamWork,
            json!({
                "description": "Working with dreams for psychological insight",
                "techniques": ["dream_journaling", "dream_re_entry", "symbol_exploration", "dream_dialogue"],
                "focus": "Understanding unconscious messages through dream symbolism",
                "session_structure": "60_minutes_bi_weekly_ongoing",
                "best_for": ["recurring_dreams", "nightmares", "symbolic_guidance", "creativity"],
            }),
        ),
    ])
}

fn integration_practices() -> Value {
    json!({
        "shadow_dialogue": {
            "description": "Conscious conversation with shadow aspects",
            "frequency": "daily_for_integration_period",
            "duration": "20-30_minutes",
            "benefits": ["conscious_relationship", "reduced_projection", "integration"],
        },
        "shadow_journaling": {
            "description": "Written exploration of shadow material",
            "prompts": [
                "What aspect of myself do I most try to hide?",
                "When do I feel most ashamed or embarrassed?",
                "What behaviors in others trigger me most strongly?",
                "How does my shadow try to protect me?",
                "What gifts might my shadow offer if integrated?",
            ],
            "frequency": "3-5_times_weekly",
            "duration": "15-20_minutes",
            "benefits": ["self_awareness", "pattern_recognition", "emotional_processing"],
        },
        "projection_reclamation": {
            "description": "Recognizing and reclaiming projected shadow material",
            "frequency": "as_triggered_situations_arise",
            "duration": "ongoing_practice",
            "benefits": ["reduced_reactivity", "self_ownership", "relationship_improvement"],
        },
        "shadow_embodiment": {
            "description": "Physical expression and integration of shadow aspects",
            "frequency": "weekly_sessions",
            "duration": "45-60_minutes",
            "benefits": ["somatic_integration", "emotional_release", "body_awareness"],
        },
        "creative_shadow_expression": {
            "description": "Artistic exploration of shadow material",
            "frequency": "regular_creative_practice",
            "duration": "varies_by_medium",
            "benefits": ["non_verbal_processing", "symbolic_expression", "integration"],
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responses(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_fifteen_archetypes_eight_profiles() {
        assert_eq!(ShadowArchetype::all().len(), 15);
        assert_eq!(HallOfShadows::new().archetypes.len(), 8);
    }

    #[test]
    fn test_high_anger_maps_to_destroyer() {
        let hall = HallOfShadows::new();
        let map = hall.create_personal_shadow_map(&responses(&[("anger_issues", 9.0)]));
        assert_eq!(map.primary_shadows.len(), 1);
        assert_eq!(map.primary_shadows[0].archetype, ShadowArchetype::Destroyer);
        assert_eq!(map.current_work_focus, Some(ShadowArchetype::Destroyer));
    }

    #[test]
    fn test_low_scores_yield_empty_constellation() {
        let hall = HallOfShadows::new();
        let map = hall.create_personal_shadow_map(&responses(&[("anger_issues", 3.0)]));
        assert!(map.primary_shadows.is_empty());
        assert_eq!(map.current_work_focus, None);
    }

    #[test]
    fn test_integration_level_defaults_to_quarter() {
        // three 5/10 defaults and two 0/10 defaults average to 0.3
        let level = integration_level(&HashMap::new());
        assert!((level - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_integration_level_with_full_scores() {
        let map = responses(&[
            ("self_awareness", 10.0),
            ("emotional_regulation", 10.0),
            ("projection_awareness", 10.0),
            ("therapy_experience", 10.0),
            ("spiritual_practice", 10.0),
        ]);
        assert!((integration_level(&map) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_trigger_pressure_selects_focus() {
        let hall = HallOfShadows::new();
        // both shadows active, but the deceiver's triggers score higher
        let map = hall.create_personal_shadow_map(&responses(&[
            ("anger_issues", 8.0),
            ("people_pleasing", 8.0),
            ("conflict", 9.0),
            ("disapproval", 9.0),
        ]));
        assert_eq!(map.primary_shadows.len(), 2);
        assert_eq!(map.current_work_focus, Some(ShadowArchetype::Deceiver));
    }

    #[test]
    fn test_resistance_patterns_detected() {
        let patterns = resistance_patterns(&responses(&[
            ("perfectionism", 8.0),
            ("intellectualization", 9.0),
        ]));
        assert_eq!(patterns.len(), 2);
    }

    #[test]
    fn test_generate_session_for_active_focus() {
        let hall = HallOfShadows::new();
        let map = hall.create_personal_shadow_map(&responses(&[("anger_issues", 9.0)]));
        let session = hall
            .generate_session(&map, TherapeuticApproach::GestaltTherapy, 1)
            .unwrap();
        assert_eq!(session.focus_archetype, ShadowArchetype::Destroyer);
        assert_eq!(session.session_id, "the_destroyer_001");
        assert!(session.techniques.contains(&"empty_chair".to_string()));
        assert!(session.homework.contains(&"anger_work".to_string()));
    }

    #[test]
    fn test_generate_session_without_focus_is_none() {
        let hall = HallOfShadows::new();
        let map = hall.create_personal_shadow_map(&HashMap::new());
        assert!(hall.generate_session(&map, TherapeuticApproach::DreamWork, 1).is_none());
    }

    #[test]
    fn test_support_resources_extend_per_archetype() {
        let hall = HallOfShadows::new();
        let map = hall.create_personal_shadow_map(&responses(&[("anger_issues", 9.0)]));
        assert!(map.support_resources.iter().any(|r| r == "Martial arts"));
    }
}
