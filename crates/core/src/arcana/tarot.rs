//! # Alchemical Tarot
//!
//! The 22 Major Arcana with full correspondences plus the extended pantheon
//! (21 Taras, Quan Yin, and the four elemental guardians). Draws, keyword
//! search, and a complete deck export.

use std::collections::HashMap;

use rand::Rng;
use serde::Serialize;
use serde_json::{json, Value};

/// Narrative voice used when a card speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WritingStyle {
    /// Alan Moore meets mystical traditions
    MooreMystical,
    /// Psychedelic consciousness expansion
    LearyPsychedelic,
    /// Gonzo journalism
    ThompsonGonzo,
    /// Jungian psychological depth
    JungAnalytical,
    /// Dion Fortune hermetic wisdom
    FortuneHermetic,
}

/// A Major Arcana card with its alchemical correspondences.
#[derive(Debug, Clone, Serialize)]
pub struct TarotCard {
    pub number: u8,
    pub name: &'static str,
    pub archetype: &'static str,
    pub element: &'static str,
    pub planet: &'static str,
    pub hebrew_letter: &'static str,
    pub tree_path: u8,
    pub keywords: &'static [&'static str],
    pub upright_meaning: &'static str,
    pub reversed_meaning: &'static str,
    pub alchemical_symbol: &'static str,
    pub color_palette: &'static [&'static str],
    pub solfeggio_frequency: u32,
    pub sacred_geometry: &'static str,
    pub crystal_correspondence: &'static str,
    pub writing_style: WritingStyle,
    pub character_voice: &'static str,
    pub psychological_profile: &'static str,
}

/// A being of the extended pantheon.
#[derive(Debug, Clone, Serialize)]
pub struct ExtendedPantheon {
    pub name: String,
    pub tradition: String,
    pub element: String,
    pub color: String,
    pub mantra: String,
    pub power: String,
    pub sacred_geometry: String,
    pub story_connection: String,
}

/// The 21 Taras: (name, power, element, color, mantra).
const TARAS: [(&str, &str, &str, &str, &str); 21] = [
    ("Green Tara", "swift_liberation", "earth", "#32cd32", "Om Tare Tuttare Ture Soha"),
    ("White Tara", "compassion_longevity", "water", "#ffffff", "Om Tare Tuttare Ture Mama Ayuh Punya Jnana Pustim Kuru Soha"),
    ("Red Tara", "magnetizing_power", "fire", "#ff0000", "Om Tare Tuttare Ture Hrih Soha"),
    ("Blue Tara", "fierce_protection", "air", "#4169e1", "Om Tare Tuttare Ture Hum Phat Soha"),
    ("Yellow Tara", "wealth_prosperity", "earth", "#ffd700", "Om Tare Tuttare Ture Ratnasambhave Soha"),
    ("Black Tara", "wrathful_protection", "space", "#000000", "Om Tare Tuttare Ture Kali Soha"),
    ("Orange Tara", "subjugating_obstacles", "fire", "#ff8c00", "Om Tare Tuttare Ture Vasam Soha"),
    ("Peaceful Tara", "calm_serenity", "water", "#87ceeb", "Om Tare Tuttare Ture Shanti Soha"),
    ("Wrathful Tara", "destroying_negativity", "fire", "#8b0000", "Om Tare Tuttare Ture Krodhani Soha"),
    ("Golden Tara", "supreme_wisdom", "light", "#ffd700", "Om Tare Tuttare Ture Jnana Soha"),
    ("Silver Tara", "lunar_mysteries", "water", "#c0c0c0", "Om Tare Tuttare Ture Chandra Soha"),
    ("Copper Tara", "healing_medicine", "earth", "#b87333", "Om Tare Tuttare Ture Bhaisajye Soha"),
    ("Crystal Tara", "clarity_purification", "space", "#ffffff", "Om Tare Tuttare Ture Suddhi Soha"),
    ("Rainbow Tara", "unity_diversity", "all", "#ff69b4", "Om Tare Tuttare Ture Sarvarupa Soha"),
    ("Jewel Tara", "precious_teachings", "earth", "#9932cc", "Om Tare Tuttare Ture Ratna Soha"),
    ("Lotus Tara", "pure_compassion", "water", "#ff69b4", "Om Tare Tuttare Ture Padma Soha"),
    ("Sword Tara", "cutting_ignorance", "air", "#c0c0c0", "Om Tare Tuttare Ture Khadga Soha"),
    ("Mirror Tara", "reflecting_truth", "space", "#e6e6fa", "Om Tare Tuttare Ture Adarsha Soha"),
    ("Dancing Tara", "joyful_liberation", "fire", "#ff1493", "Om Tare Tuttare Ture Nartana Soha"),
    ("Singing Tara", "melodious_dharma", "air", "#9370db", "Om Tare Tuttare Ture Gita Soha"),
    ("Silent Tara", "profound_stillness", "space", "#2f4f4f", "Om Tare Tuttare Ture Mauna Soha"),
];

/// The four elemental guardians: (name, element, color, mantra).
const ELEMENTALS: [(&str, &str, &str, &str); 4] = [
    ("Salamander", "fire", "#ff4500", "Ignis Natura Renovatur Integra"),
    ("Undine", "water", "#4169e1", "Aqua Vitae Semper Fluens"),
    ("Sylph", "air", "#87ceeb", "Ventus Spiritus Libertas"),
    ("Gnome", "earth", "#8b4513", "Terra Stabilis Fundamentum"),
];

/// The complete cathedral tarot system.
pub struct TarotSystem {
    pub major_arcana: HashMap<u8, TarotCard>,
    pub extended_pantheon: HashMap<String, ExtendedPantheon>,
}

impl Default for TarotSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl TarotSystem {
    pub fn new() -> Self {
        Self {
            major_arcana: major_arcana(),
            extended_pantheon: extended_pantheon(),
        }
    }

    /// Draw a random card, upright or reversed.
    pub fn draw_card<R: Rng>(&self, rng: &mut R) -> (&TarotCard, bool) {
        let number = rng.gen_range(0..=21);
        let reversed = rng.gen_bool(0.5);
        (&self.major_arcana[&number], reversed)
    }

    /// Case-insensitive search over card names and keywords.
    pub fn search_by_keyword(&self, query: &str) -> Vec<&TarotCard> {
        let query = query.to_lowercase();
        let mut hits: Vec<&TarotCard> = self
            .major_arcana
            .values()
            .filter(|card| {
                card.name.to_lowercase().contains(&query)
                    || card.keywords.iter().any(|k| k.contains(&query))
            })
            .collect();
        hits.sort_by_key(|card| card.number);
        hits
    }

    /// All cards of an element, in deck order.
    pub fn cards_by_element(&self, element: &str) -> Vec<&TarotCard> {
        let mut hits: Vec<&TarotCard> = self
            .major_arcana
            .values()
            .filter(|card| card.element.eq_ignore_ascii_case(element))
            .collect();
        hits.sort_by_key(|card| card.number);
        hits
    }

    /// Cards ordered by solfeggio frequency, lowest first.
    pub fn cards_by_frequency(&self) -> Vec<&TarotCard> {
        let mut cards: Vec<&TarotCard> = self.major_arcana.values().collect();
        cards.sort_by_key(|card| (card.solfeggio_frequency, card.number));
        cards
    }

    /// Complete deck data for download.
    pub fn full_deck_export(&self) -> Value {
        let mut arcana = serde_json::Map::new();
        for number in 0..=21u8 {
            let card = &self.major_arcana[&number];
            arcana.insert(number.to_string(), serde_json::to_value(card).unwrap_or(Value::Null));
        }
        let pantheon: Value = self
            .extended_pantheon
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::to_value(v).unwrap_or(Value::Null)))
            .collect::<serde_json::Map<String, Value>>()
            .into();
        let tree_paths: Vec<u32> = (11..33).collect();
        json!({
            "metadata": {
                "title": "Cathedral Alchemical Tarot",
                "version": env!("CARGO_PKG_VERSION"),
                "description": "Complete 22 Major Arcana with alchemical correspondences and extended pantheon",
                "total_cards": 22,
                "extended_pantheon": self.extended_pantheon.len(),
                "open_source": true,
                "license": "Creative Commons Attribution-ShareAlike 4.0",
            },
            "major_arcana": arcana,
            "extended_pantheon": pantheon,
            "correspondence_tables": {
                "elements": ["Fire", "Water", "Air", "Earth", "Spirit"],
                "planets": ["Sun", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto"],
                "hebrew_letters": ["Aleph", "Beth", "Gimel", "Daleth", "Heh", "Vav", "Zayin", "Cheth", "Teth", "Yod", "Kaph", "Lamed", "Mem", "Nun", "Samekh", "Ayin", "Peh", "Tzaddi", "Qoph", "Resh", "Shin", "Tav"],
                "tree_of_life_paths": tree_paths,
                "solfeggio_frequencies": [174, 285, 396, 417, 528, 639, 741, 852, 963],
            },
        })
    }
}

fn extended_pantheon() -> HashMap<String, ExtendedPantheon> {
    let mut pantheon = HashMap::new();
    for (i, (name, power, element, color, mantra)) in TARAS.iter().enumerate() {
        pantheon.insert(
            format!("tara_{:02}", i + 1),
            ExtendedPantheon {
                name: name.to_string(),
                tradition: "Tibetan Buddhist".to_string(),
                element: element.to_string(),
                color: color.to_string(),
                mantra: mantra.to_string(),
                power: power.to_string(),
                sacred_geometry: "lotus_mandala".to_string(),
                story_connection: format!("Appears in stories requiring {}", power.replace('_', " ")),
            },
        );
    }
    pantheon.insert(
        "quan_yin".to_string(),
        ExtendedPantheon {
            name: "Quan Yin".to_string(),
            tradition: "Chinese Buddhist".to_string(),
            element: "water".to_string(),
            color: "#87ceeb".to_string(),
            mantra: "Om Mani Padme Hum".to_string(),
            power: "infinite_compassion".to_string(),
            sacred_geometry: "thousand_petaled_lotus".to_string(),
            story_connection: "The supreme compassionate guide who appears in moments of deepest need"
                .to_string(),
        },
    );
    for (name, element, color, mantra) in ELEMENTALS {
        pantheon.insert(
            name.to_lowercase(),
            ExtendedPantheon {
                name: name.to_string(),
                tradition: "Western Hermetic".to_string(),
                element: element.to_string(),
                color: color.to_string(),
                mantra: mantra.to_string(),
                power: format!("{element}_mastery"),
                sacred_geometry: format!("{element}_platonic_solid"),
                story_connection: format!("Guardian of {element} realm stories"),
            },
        );
    }
    pantheon
}

fn major_arcana() -> HashMap<u8, TarotCard> {
    let cards = [
        TarotCard {
            number: 0,
            name: "The Fool",
            archetype: "The Innocent Wanderer",
            element: "Air",
            planet: "Uranus",
            hebrew_letter: "Aleph",
            tree_path: 11,
            keywords: &["beginnings", "innocence", "spontaneity", "free_spirit"],
            upright_meaning: "New beginnings, innocence, spontaneity, free spirit",
            reversed_meaning: "Holding back, recklessness, risk-taking",
            alchemical_symbol: "Prima Materia",
            color_palette: &["#ffff99", "#87ceeb", "#ffffff"],
            solfeggio_frequency: 396,
            sacred_geometry: "circle",
            crystal_correspondence: "clear_quartz",
            writing_style: WritingStyle::ThompsonGonzo,
            character_voice: "Wild-eyed and fearless, speaking in stream-of-consciousness bursts about the cosmic joke and the beautiful terror of infinite possibility",
            psychological_profile: "Represents the pure potential of consciousness before conditioning. The eternal child who sees wonder everywhere.",
        },
        TarotCard {
            number: 1,
            name: "The Magician",
            archetype: "The Manifestor",
            element: "Air",
            planet: "Mercury",
            hebrew_letter: "Beth",
            tree_path: 12,
            keywords: &["manifestation", "resourcefulness", "power", "inspired_action"],
            upright_meaning: "Manifestation, resourcefulness, power, inspired action",
            reversed_meaning: "Manipulation, poor planning, untapped talents",
            alchemical_symbol: "Sulfur",
            color_palette: &["#ff6600", "#ffff00", "#9932cc"],
            solfeggio_frequency: 528,
            sacred_geometry: "pentagram",
            crystal_correspondence: "citrine",
            writing_style: WritingStyle::MooreMystical,
            character_voice: "Speaks with quiet authority about the fundamental interconnectedness of will, word, and world. Every sentence contains layers of meaning.",
            psychological_profile: "The ego-consciousness that has learned to work with cosmic forces. Master of the four elements of manifestation.",
        },
        TarotCard {
            number: 2,
            name: "The High Priestess",
            archetype: "The Intuitive Mystic",
            element: "Water",
            planet: "Moon",
            hebrew_letter: "Gimel",
            tree_path: 13,
            keywords: &["intuition", "sacred_knowledge", "divine_feminine", "subconscious"],
            upright_meaning: "Intuition, sacred knowledge, divine feminine, subconscious mind",
            reversed_meaning: "Secrets, disconnected from intuition, withdrawal",
            alchemical_symbol: "Mercury",
            color_palette: &["#4169e1", "#c0c0c0", "#000000"],
            solfeggio_frequency: 741,
            sacred_geometry: "vesica_piscis",
            crystal_correspondence: "moonstone",
            writing_style: WritingStyle::FortuneHermetic,
            character_voice: "Speaks in riddles and symbols, her words carrying the weight of ancient mysteries. Every utterance is a key to hidden knowledge.",
            psychological_profile: "The anima, the receptive feminine principle that connects to the collective unconscious and archetypal wisdom.",
        },
        TarotCard {
            number: 3,
            name: "The Empress",
            archetype: "The Creative Mother",
            element: "Earth",
            planet: "Venus",
            hebrew_letter: "Daleth",
            tree_path: 14,
            keywords: &["fertility", "femininity", "beauty", "nature", "abundance"],
            upright_meaning: "Fertility, femininity, beauty, nature, abundance",
            reversed_meaning: "Creative block, dependence on others, smothering",
            alchemical_symbol: "Copper",
            color_palette: &["#228b22", "#ffd700", "#ff69b4"],
            solfeggio_frequency: 639,
            sacred_geometry: "hexagon",
            crystal_correspondence: "rose_quartz",
            writing_style: WritingStyle::JungAnalytical,
            character_voice: "Warm and generous, every phrase an invitation to grow, to make, to flower into whatever wants to be born.",
            psychological_profile: "The creative matrix of the psyche, the fertile ground from which all new forms emerge.",
        },
        TarotCard {
            number: 4,
            name: "The Emperor",
            archetype: "The Wise Leader",
            element: "Fire",
            planet: "Aries",
            hebrew_letter: "Heh",
            tree_path: 15,
            keywords: &["authority", "father_figure", "structure", "control"],
            upright_meaning: "Authority, father-figure, structure, control",
            reversed_meaning: "Tyranny, rigidity, coldness",
            alchemical_symbol: "Iron",
            color_palette: &["#dc143c", "#ffd700", "#8b0000"],
            solfeggio_frequency: 417,
            sacred_geometry: "square",
            crystal_correspondence: "hematite",
            writing_style: WritingStyle::MooreMystical,
            character_voice: "Measured and deliberate, speaking in foundations and load-bearing truths, each word placed like a stone in a wall.",
            psychological_profile: "The ordering principle of consciousness, the inner architect who builds structure from chaos.",
        },
        TarotCard {
            number: 5,
            name: "The Hierophant",
            archetype: "The Spiritual Teacher",
            element: "Earth",
            planet: "Taurus",
            hebrew_letter: "Vav",
            tree_path: 16,
            keywords: &["spiritual_wisdom", "religious_beliefs", "conformity", "tradition"],
            upright_meaning: "Spiritual wisdom, religious beliefs, conformity, tradition",
            reversed_meaning: "Personal beliefs, freedom, challenging the status quo",
            alchemical_symbol: "Gold",
            color_palette: &["#8b4513", "#ffd700", "#ffffff"],
            solfeggio_frequency: 852,
            sacred_geometry: "pentagram",
            crystal_correspondence: "lapis_lazuli",
            writing_style: WritingStyle::FortuneHermetic,
            character_voice: "Speaks as the living bridge between lineage and seeker, quoting teachers whose names dissolved centuries ago.",
            psychological_profile: "The inner teacher that transmits tradition, and the tension between received wisdom and direct knowing.",
        },
        TarotCard {
            number: 6,
            name: "The Lovers",
            archetype: "The Sacred Union",
            element: "Air",
            planet: "Gemini",
            hebrew_letter: "Zayin",
            tree_path: 17,
            keywords: &["love", "harmony", "relationships", "values_alignment"],
            upright_meaning: "Love, harmony, relationships, values alignment",
            reversed_meaning: "Self-love, disharmony, imbalance, misalignment of values",
            alchemical_symbol: "Chemical Wedding",
            color_palette: &["#ff69b4", "#87ceeb", "#ffd700"],
            solfeggio_frequency: 639,
            sacred_geometry: "hexagram",
            crystal_correspondence: "emerald",
            writing_style: WritingStyle::JungAnalytical,
            character_voice: "Two voices speaking as one, finishing each other's sentences about choice, union, and the alchemy of opposites.",
            psychological_profile: "The integration of opposites within the psyche, and every meaningful choice between paths.",
        },
        TarotCard {
            number: 7,
            name: "The Chariot",
            archetype: "The Determined Warrior",
            element: "Water",
            planet: "Cancer",
            hebrew_letter: "Cheth",
            tree_path: 18,
            keywords: &["control", "willpower", "success", "determination"],
            upright_meaning: "Control, willpower, success, determination",
            reversed_meaning: "Self-discipline, hard control, lack of direction",
            alchemical_symbol: "Antimony",
            color_palette: &["#4682b4", "#c0c0c0", "#000000"],
            solfeggio_frequency: 528,
            sacred_geometry: "chariot_wheels",
            crystal_correspondence: "carnelian",
            writing_style: WritingStyle::ThompsonGonzo,
            character_voice: "All momentum and white knuckles, narrating the road at speed while two sphinxes pull in opposite directions.",
            psychological_profile: "Will harnessed to direction: the ego learning to drive opposing drives as a single vehicle.",
        },
        TarotCard {
            number: 8,
            name: "Strength",
            archetype: "The Gentle Power",
            element: "Fire",
            planet: "Leo",
            hebrew_letter: "Teth",
            tree_path: 19,
            keywords: &["strength", "courage", "persuasion", "influence", "compassion"],
            upright_meaning: "Strength, courage, persuasion, influence, compassion",
            reversed_meaning: "Self-doubt, lack of confidence, raw emotion",
            alchemical_symbol: "Lion",
            color_palette: &["#ffd700", "#ff6347", "#32cd32"],
            solfeggio_frequency: 741,
            sacred_geometry: "infinity",
            crystal_correspondence: "tiger_eye",
            writing_style: WritingStyle::JungAnalytical,
            character_voice: "Soft-spoken and unhurried, describing how the lion was never tamed, only befriended.",
            psychological_profile: "Instinct met with compassion rather than repression; the strength that needs no force.",
        },
        TarotCard {
            number: 9,
            name: "The Hermit",
            archetype: "The Wise Seeker",
            element: "Earth",
            planet: "Virgo",
            hebrew_letter: "Yod",
            tree_path: 20,
            keywords: &["soul_searching", "seeking_inner_guidance", "introspection"],
            upright_meaning: "Soul searching, seeking inner guidance, introspection",
            reversed_meaning: "Isolation, loneliness, withdrawal",
            alchemical_symbol: "Lamp",
            color_palette: &["#9932cc", "#ffd700", "#696969"],
            solfeggio_frequency: 852,
            sacred_geometry: "spiral",
            crystal_correspondence: "amethyst",
            writing_style: WritingStyle::MooreMystical,
            character_voice: "A voice like a lamp in fog, offering single sentences that take years to unpack.",
            psychological_profile: "The withdrawal that precedes insight; the inner light sought on the mountain of solitude.",
        },
        TarotCard {
            number: 10,
            name: "Wheel of Fortune",
            archetype: "The Cosmic Cycles",
            element: "Fire",
            planet: "Jupiter",
            hebrew_letter: "Kaph",
            tree_path: 21,
            keywords: &["good_luck", "karma", "life_cycles", "destiny", "turning_point"],
            upright_meaning: "Good luck, karma, life cycles, destiny, turning point",
            reversed_meaning: "Bad luck, lack of control, clinging to control, bad timing",
            alchemical_symbol: "Ouroboros",
            color_palette: &["#ffd700", "#4169e1", "#dc143c", "#32cd32"],
            solfeggio_frequency: 528,
            sacred_geometry: "wheel",
            crystal_correspondence: "aventurine",
            writing_style: WritingStyle::LearyPsychedelic,
            character_voice: "Laughing through every turn of phrase, pointing out that the rim rises and falls but the hub never moves.",
            psychological_profile: "The cyclical nature of experience and the consciousness that can identify with the center rather than the rim.",
        },
        TarotCard {
            number: 11,
            name: "Justice",
            archetype: "The Cosmic Balance",
            element: "Air",
            planet: "Libra",
            hebrew_letter: "Lamed",
            tree_path: 22,
            keywords: &["justice", "fairness", "truth", "cause_and_effect", "law"],
            upright_meaning: "Justice, fairness, truth, cause and effect, law",
            reversed_meaning: "Unfairness, lack of accountability, dishonesty",
            alchemical_symbol: "Scales",
            color_palette: &["#4169e1", "#ffd700", "#ffffff"],
            solfeggio_frequency: 741,
            sacred_geometry: "balance",
            crystal_correspondence: "sapphire",
            writing_style: WritingStyle::FortuneHermetic,
            character_voice: "Precise and impartial, weighing every clause of every sentence before letting it fall.",
            psychological_profile: "The psyche's ledger: every action weighed, every imbalance eventually corrected.",
        },
        TarotCard {
            number: 12,
            name: "The Hanged Man",
            archetype: "The Sacred Sacrifice",
            element: "Water",
            planet: "Neptune",
            hebrew_letter: "Mem",
            tree_path: 23,
            keywords: &["suspension", "restriction", "letting_go", "sacrifice"],
            upright_meaning: "Suspension, restriction, letting go, sacrifice",
            reversed_meaning: "Delays, resistance, stalling, indecision",
            alchemical_symbol: "Inversion",
            color_palette: &["#4682b4", "#32cd32", "#ffd700"],
            solfeggio_frequency: 639,
            sacred_geometry: "inverted_triangle",
            crystal_correspondence: "aquamarine",
            writing_style: WritingStyle::JungAnalytical,
            character_voice: "Serene and upside down, describing how the world looks truer from the gallows tree.",
            psychological_profile: "Surrender as transformation; the ego suspended until perspective inverts into wisdom.",
        },
        TarotCard {
            number: 13,
            name: "Death",
            archetype: "The Great Transformer",
            element: "Water",
            planet: "Scorpio",
            hebrew_letter: "Nun",
            tree_path: 24,
            keywords: &["endings", "beginnings", "change", "transformation"],
            upright_meaning: "Endings, beginnings, change, transformation",
            reversed_meaning: "Resistance to change, personal transformation, inner purging",
            alchemical_symbol: "Putrefaction",
            color_palette: &["#000000", "#8b0000", "#ffd700"],
            solfeggio_frequency: 417,
            sacred_geometry: "scythe",
            crystal_correspondence: "obsidian",
            writing_style: WritingStyle::MooreMystical,
            character_voice: "Gentle beyond expectation, explaining that nothing it has ever taken was still alive.",
            psychological_profile: "The dissolution that precedes every rebirth; putrefaction as the first operation of the work.",
        },
        TarotCard {
            number: 14,
            name: "Temperance",
            archetype: "The Divine Alchemist",
            element: "Fire",
            planet: "Sagittarius",
            hebrew_letter: "Samekh",
            tree_path: 25,
            keywords: &["balance", "moderation", "patience", "purpose"],
            upright_meaning: "Balance, moderation, patience, purpose",
            reversed_meaning: "Imbalance, excess, self-healing, re-alignment",
            alchemical_symbol: "Distillation",
            color_palette: &["#4169e1", "#ffd700", "#32cd32"],
            solfeggio_frequency: 741,
            sacred_geometry: "triangle_in_square",
            crystal_correspondence: "fluorite",
            writing_style: WritingStyle::FortuneHermetic,
            character_voice: "Patient as dripping water, narrating the art of pouring one cup into another without losing a drop.",
            psychological_profile: "The tempering of opposites into a third thing; the middle path as an act of creation.",
        },
        TarotCard {
            number: 15,
            name: "The Devil",
            archetype: "The Shadow Revealer",
            element: "Earth",
            planet: "Capricorn",
            hebrew_letter: "Ayin",
            tree_path: 26,
            keywords: &["shadow_self", "attachment", "addiction", "restriction", "sexuality"],
            upright_meaning: "Shadow self, attachment, addiction, restriction, sexuality",
            reversed_meaning: "Releasing limiting beliefs, exploring dark thoughts, detachment",
            alchemical_symbol: "Baphomet",
            color_palette: &["#8b0000", "#000000", "#ffd700"],
            solfeggio_frequency: 396,
            sacred_geometry: "inverted_pentagram",
            crystal_correspondence: "garnet",
            writing_style: WritingStyle::ThompsonGonzo,
            character_voice: "Grinning and unapologetic, pointing out that the chains were never locked.",
            psychological_profile: "The disowned shadow holding everything the persona refused; bondage that is always voluntary.",
        },
        TarotCard {
            number: 16,
            name: "The Tower",
            archetype: "The Divine Lightning",
            element: "Fire",
            planet: "Mars",
            hebrew_letter: "Peh",
            tree_path: 27,
            keywords: &["sudden_change", "upheaval", "chaos", "revelation", "awakening"],
            upright_meaning: "Sudden change, upheaval, chaos, revelation, awakening",
            reversed_meaning: "Personal transformation, fear of change, averting disaster",
            alchemical_symbol: "Lightning",
            color_palette: &["#ff0000", "#ffff00", "#000000"],
            solfeggio_frequency: 963,
            sacred_geometry: "lightning_bolt",
            crystal_correspondence: "ruby",
            writing_style: WritingStyle::LearyPsychedelic,
            character_voice: "Speaks in sudden flashes, every sentence a structure collapsing to reveal the sky behind it.",
            psychological_profile: "The merciful catastrophe: false structures struck down so truth has somewhere to stand.",
        },
        TarotCard {
            number: 17,
            name: "The Star",
            archetype: "The Cosmic Hope",
            element: "Air",
            planet: "Aquarius",
            hebrew_letter: "Tzaddi",
            tree_path: 28,
            keywords: &["hope", "faith", "purpose", "renewal", "spirituality"],
            upright_meaning: "Hope, faith, purpose, renewal, spirituality",
            reversed_meaning: "Lack of faith, despair, self-trust, disconnection",
            alchemical_symbol: "Aquarius",
            color_palette: &["#4169e1", "#87ceeb", "#ffd700"],
            solfeggio_frequency: 852,
            sacred_geometry: "eight_pointed_star",
            crystal_correspondence: "aquamarine",
            writing_style: WritingStyle::MooreMystical,
            character_voice: "Quiet as starlight on water, speaking of the light that remains after every tower has fallen.",
            psychological_profile: "Hope after catastrophe; the naked psyche pouring itself out and finding itself replenished.",
        },
        TarotCard {
            number: 18,
            name: "The Moon",
            archetype: "The Illusion Walker",
            element: "Water",
            planet: "Pisces",
            hebrew_letter: "Qoph",
            tree_path: 29,
            keywords: &["illusion", "fear", "anxiety", "subconscious", "intuition"],
            upright_meaning: "Illusion, fear, anxiety, subconscious, intuition",
            reversed_meaning: "Release of fear, repressed emotion, inner confusion",
            alchemical_symbol: "Silver",
            color_palette: &["#c0c0c0", "#4682b4", "#9932cc"],
            solfeggio_frequency: 528,
            sacred_geometry: "crescent",
            crystal_correspondence: "moonstone",
            writing_style: WritingStyle::JungAnalytical,
            character_voice: "Half-heard, as if through water, describing the road between the towers that can only be walked at night.",
            psychological_profile: "The dreaming layer of the psyche where fears and intuitions wear each other's faces.",
        },
        TarotCard {
            number: 19,
            name: "The Sun",
            archetype: "The Radiant Joy",
            element: "Fire",
            planet: "Sun",
            hebrew_letter: "Resh",
            tree_path: 30,
            keywords: &["positivity", "fun", "warmth", "success", "vitality"],
            upright_meaning: "Positivity, fun, warmth, success, vitality",
            reversed_meaning: "Inner child, feeling down, overly optimistic",
            alchemical_symbol: "Solar Gold",
            color_palette: &["#ffd700", "#ff6347", "#ffff00"],
            solfeggio_frequency: 741,
            sacred_geometry: "solar_cross",
            crystal_correspondence: "citrine",
            writing_style: WritingStyle::LearyPsychedelic,
            character_voice: "Delighted by everything, narrating the world as a garden that was never actually walled.",
            psychological_profile: "Consciousness at noon: the clarity and simple joy on the far side of the lunar road.",
        },
        TarotCard {
            number: 20,
            name: "Judgement",
            archetype: "The Cosmic Awakening",
            element: "Fire",
            planet: "Pluto",
            hebrew_letter: "Shin",
            tree_path: 31,
            keywords: &["judgement", "rebirth", "inner_calling", "absolution"],
            upright_meaning: "Judgement, rebirth, inner calling, absolution",
            reversed_meaning: "Self-doubt, inner critic, ignoring the call, self-loathing",
            alchemical_symbol: "Phoenix",
            color_palette: &["#ff0000", "#ffd700", "#ffffff"],
            solfeggio_frequency: 963,
            sacred_geometry: "trumpet",
            crystal_correspondence: "diamond",
            writing_style: WritingStyle::MooreMystical,
            character_voice: "A trumpet made of words, calling each listener by the name they had before they were born.",
            psychological_profile: "The summons to rise from every grave the self has slept in; absolution as awakening.",
        },
        TarotCard {
            number: 21,
            name: "The World",
            archetype: "The Cosmic Completion",
            element: "Earth",
            planet: "Saturn",
            hebrew_letter: "Tav",
            tree_path: 32,
            keywords: &["completion", "integration", "accomplishment", "travel"],
            upright_meaning: "Completion, integration, accomplishment, travel",
            reversed_meaning: "Seeking personal closure, short-cut to success, stagnation",
            alchemical_symbol: "Philosopher's Stone",
            color_palette: &["#9932cc", "#ffd700", "#32cd32", "#ff0000"],
            solfeggio_frequency: 528,
            sacred_geometry: "mandala",
            crystal_correspondence: "diamond",
            writing_style: WritingStyle::FortuneHermetic,
            character_voice: "Dancing while speaking, every sentence closing a circle that opens another.",
            psychological_profile: "Integration achieved: the four elements reconciled, the journey complete and beginning again.",
        },
    ];
    cards.into_iter().map(|card| (card.number, card)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_deck_is_complete() {
        let system = TarotSystem::new();
        assert_eq!(system.major_arcana.len(), 22);
        for number in 0..=21u8 {
            assert!(system.major_arcana.contains_key(&number), "card {number}");
        }
    }

    #[test]
    fn test_pantheon_is_complete() {
        let system = TarotSystem::new();
        // 21 Taras + Quan Yin + 4 elementals
        assert_eq!(system.extended_pantheon.len(), 26);
        assert!(system.extended_pantheon.contains_key("tara_01"));
        assert!(system.extended_pantheon.contains_key("tara_21"));
        assert!(system.extended_pantheon.contains_key("quan_yin"));
        assert!(system.extended_pantheon.contains_key("salamander"));
    }

    #[test]
    fn test_draw_card_is_seeded() {
        let system = TarotSystem::new();
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let (card_a, rev_a) = system.draw_card(&mut a);
        let (card_b, rev_b) = system.draw_card(&mut b);
        assert_eq!(card_a.number, card_b.number);
        assert_eq!(rev_a, rev_b);
    }

    #[test]
    fn test_keyword_search_finds_transformation() {
        let system = TarotSystem::new();
        let hits = system.search_by_keyword("transformation");
        assert!(hits.iter().any(|c| c.name == "Death"));
    }

    #[test]
    fn test_search_by_name_fragment() {
        let system = TarotSystem::new();
        let hits = system.search_by_keyword("priestess");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].number, 2);
    }

    #[test]
    fn test_cards_by_element_sorted() {
        let system = TarotSystem::new();
        let water = system.cards_by_element("Water");
        let numbers: Vec<u8> = water.iter().map(|c| c.number).collect();
        assert_eq!(numbers, vec![2, 7, 12, 13, 18]);
    }

    #[test]
    fn test_frequency_sort_is_stable() {
        let system = TarotSystem::new();
        let cards = system.cards_by_frequency();
        assert_eq!(cards.len(), 22);
        for pair in cards.windows(2) {
            assert!(pair[0].solfeggio_frequency <= pair[1].solfeggio_frequency);
        }
    }

    #[test]
    fn test_full_deck_export_has_22_entries() {
        let system = TarotSystem::new();
        let deck = system.full_deck_export();
        assert_eq!(deck["metadata"]["total_cards"], 22);
        assert_eq!(deck["major_arcana"].as_object().unwrap().len(), 22);
        assert_eq!(deck["extended_pantheon"].as_object().unwrap().len(), 26);
        assert_eq!(deck["major_arcana"]["0"]["name"], "The Fool");
    }
}
