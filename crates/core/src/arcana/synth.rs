//! # Synth Lab
//!
//! The legendary synthesizer collection with magical integration: engine
//! metadata, spell-frequency mappings, session management, and a simplified
//! sound simulation (waveform + ADSR envelope over an `f32` buffer).

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{json, Value};

const SAMPLE_RATE: u32 = 44_100;

/// Elemental/chakra correspondences of an engine.
#[derive(Debug, Clone, Serialize)]
pub struct MagicIntegration {
    pub element: &'static str,
    pub chakra: &'static str,
    pub solfeggio: u32,
    pub sacred_geometry: &'static str,
}

/// A legendary synthesizer engine. Oscillator/filter/effect descriptors are
/// loose metadata, kept as JSON values.
#[derive(Debug, Clone, Serialize)]
pub struct SynthEngine {
    pub name: &'static str,
    /// USD value of the original instrument
    pub original_value: u64,
    pub year_created: u16,
    pub manufacturer: &'static str,
    pub sound_architecture: &'static str,
    pub magic_integration: MagicIntegration,
    pub spell_triggers: &'static [&'static str],
    pub frequency_range: (u32, u32),
    pub polyphony: u8,
    pub oscillators: Vec<Value>,
    pub filters: Vec<Value>,
    pub effects: Vec<Value>,
}

/// Frequency recipe behind a spell trigger.
#[derive(Debug, Clone, Serialize)]
pub struct SpellFrequency {
    pub frequency: u32,
    pub harmonics: &'static [u32],
    pub waveform: &'static str,
}

/// ADSR envelope parameters, all in the unit range.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Envelope {
    pub attack: f64,
    pub decay: f64,
    pub sustain: f64,
    pub release: f64,
}

/// An active play session on one engine.
#[derive(Debug, Clone, Serialize)]
pub struct SynthSession {
    pub synth_key: String,
    pub user_id: String,
    pub current_patch: Value,
    pub spell_mode: bool,
    pub active_spell: Option<String>,
    pub magic_resonance: f64,
}

/// Result of a (simulated) note played on a session.
#[derive(Debug, Clone, Serialize)]
pub struct SoundResult {
    pub note: u8,
    pub frequency: f64,
    pub duration: f64,
    pub samples_generated: usize,
    pub synth_used: String,
    pub spell_effect: Option<String>,
    pub magic_resonance: f64,
    #[serde(skip)]
    pub samples: Vec<f32>,
}

/// Errors from session bookkeeping. These stay string-y on purpose; the
/// original returned error records rather than raising.
#[derive(Debug, PartialEq, Eq)]
pub enum SynthError {
    UnknownSynth(String),
    UnknownSession(String),
    SpellUnavailable(String),
}

impl std::fmt::Display for SynthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SynthError::UnknownSynth(name) => write!(f, "synth '{name}' not found"),
            SynthError::UnknownSession(id) => write!(f, "session '{id}' not found"),
            SynthError::SpellUnavailable(name) => {
                write!(f, "spell '{name}' not available on this synth")
            }
        }
    }
}

impl std::error::Error for SynthError {}

/// The complete legendary collection plus session state.
pub struct SynthLab {
    pub synths: HashMap<&'static str, SynthEngine>,
    pub spell_frequencies: HashMap<&'static str, SpellFrequency>,
    sessions: HashMap<String, SynthSession>,
}

impl Default for SynthLab {
    fn default() -> Self {
        Self::new()
    }
}

impl SynthLab {
    pub fn new() -> Self {
        Self {
            synths: legendary_collection(),
            spell_frequencies: spell_frequencies(),
            sessions: HashMap::new(),
        }
    }

    /// Start a play session on a named engine.
    pub fn start_session(&mut self, synth_key: &str, user_id: &str) -> Result<String, SynthError> {
        let synth = self
            .synths
            .get(synth_key)
            .ok_or_else(|| SynthError::UnknownSynth(synth_key.to_string()))?;
        let session_id = format!("{synth_key}_{user_id}");
        let patch = default_patch(synth);
        self.sessions.insert(
            session_id.clone(),
            SynthSession {
                synth_key: synth_key.to_string(),
                user_id: user_id.to_string(),
                current_patch: patch,
                spell_mode: false,
                active_spell: None,
                magic_resonance: 0.0,
            },
        );
        Ok(session_id)
    }

    pub fn session(&self, session_id: &str) -> Option<&SynthSession> {
        self.sessions.get(session_id)
    }

    /// Activate a spell on a session, swapping in the spell patch.
    pub fn trigger_spell_mode(&mut self, session_id: &str, spell: &str) -> Result<&SpellFrequency, SynthError> {
        let session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| SynthError::UnknownSession(session_id.to_string()))?;
        let synth = &self.synths[session.synth_key.as_str()];
        if !synth.spell_triggers.iter().any(|t| *t == spell) {
            return Err(SynthError::SpellUnavailable(spell.to_string()));
        }
        let freq = self
            .spell_frequencies
            .get(spell)
            .ok_or_else(|| SynthError::SpellUnavailable(spell.to_string()))?;
        session.spell_mode = true;
        session.active_spell = Some(spell.to_string());
        session.magic_resonance = 1.0;
        session.current_patch = spell_patch(synth, freq);
        Ok(freq)
    }

    /// Simulate playing a MIDI note on a session.
    pub fn generate_sound(
        &self,
        session_id: &str,
        note: u8,
        velocity: u8,
        duration: f64,
    ) -> Result<SoundResult, SynthError> {
        let session = self
            .sessions
            .get(session_id)
            .ok_or_else(|| SynthError::UnknownSession(session_id.to_string()))?;
        let synth = &self.synths[session.synth_key.as_str()];

        let frequency = midi_to_hz(note);
        let samples_len = (SAMPLE_RATE as f64 * duration) as usize;
        let waveform = session.current_patch["oscillators"]["osc1"]["waveform"]
            .as_str()
            .unwrap_or("sine");

        let mut samples: Vec<f32> = (0..samples_len)
            .map(|i| {
                let t = i as f64 / SAMPLE_RATE as f64;
                render_waveform(waveform, frequency, t) as f32
            })
            .collect();

        let envelope = generate_envelope(
            samples_len,
            Envelope {
                attack: patch_env(&session.current_patch, "attack", 0.1),
                decay: patch_env(&session.current_patch, "decay", 0.3),
                sustain: patch_env(&session.current_patch, "sustain", 0.6),
                release: patch_env(&session.current_patch, "release", 0.8),
            },
        );
        let gain = velocity as f32 / 127.0;
        for (sample, env) in samples.iter_mut().zip(&envelope) {
            *sample *= env * gain;
        }

        Ok(SoundResult {
            note,
            frequency,
            duration,
            samples_generated: samples_len,
            synth_used: synth.name.to_string(),
            spell_effect: session.active_spell.clone(),
            magic_resonance: session.magic_resonance,
            samples,
        })
    }

    /// Collection overview for the CLI.
    pub fn collection_info(&self) -> Value {
        let total_value: u64 = self.synths.values().map(|s| s.original_value).sum();
        let synths: Value = self
            .synths
            .iter()
            .map(|(key, synth)| {
                (
                    key.to_string(),
                    json!({
                        "name": synth.name,
                        "value": synth.original_value,
                        "year": synth.year_created,
                        "manufacturer": synth.manufacturer,
                        "architecture": synth.sound_architecture,
                        "polyphony": synth.polyphony,
                        "magic_element": synth.magic_integration.element,
                        "spell_triggers": synth.spell_triggers,
                        "oscillator_count": synth.oscillators.len(),
                        "filter_count": synth.filters.len(),
                        "effect_count": synth.effects.len(),
                    }),
                )
            })
            .collect::<serde_json::Map<String, Value>>()
            .into();
        json!({
            "total_synths": self.synths.len(),
            "total_original_value": total_value,
            "synths": synths,
        })
    }
}

/// Equal temperament around A4 = 440 Hz (MIDI note 69).
pub fn midi_to_hz(note: u8) -> f64 {
    440.0 * 2.0_f64.powf((note as f64 - 69.0) / 12.0)
}

fn patch_env(patch: &Value, key: &str, default: f64) -> f64 {
    patch["envelope"][key].as_f64().unwrap_or(default)
}

fn render_waveform(waveform: &str, frequency: f64, t: f64) -> f64 {
    let phase = frequency * t;
    match waveform {
        "sawtooth" => 2.0 * (phase - (0.5 + phase).floor()),
        "square" => {
            if (2.0 * std::f64::consts::PI * phase).sin() >= 0.0 {
                1.0
            } else {
                -1.0
            }
        }
        "triangle" => 2.0 * (2.0 * (phase - (0.5 + phase).floor())).abs() - 1.0,
        // everything else defaults to sine
        _ => (2.0 * std::f64::consts::PI * phase).sin(),
    }
}

/// ADSR over a fixed sample count: attack and decay each take a quarter of
/// the buffer scaled by their parameter, the remainder splits between
/// sustain and release.
pub fn generate_envelope(samples: usize, env: Envelope) -> Vec<f32> {
    let attack_samples = (samples as f64 * env.attack / 4.0) as usize;
    let decay_samples = (samples as f64 * env.decay / 4.0) as usize;
    let mut envelope = vec![0.0f32; samples];

    for (i, slot) in envelope.iter_mut().take(attack_samples).enumerate() {
        *slot = i as f32 / attack_samples as f32;
    }
    for i in 0..decay_samples {
        let idx = attack_samples + i;
        if idx >= samples {
            break;
        }
        let frac = i as f32 / decay_samples as f32;
        envelope[idx] = 1.0 - frac * (1.0 - env.sustain as f32);
    }
    let rest_start = (attack_samples + decay_samples).min(samples);
    let rest = samples - rest_start;
    let sustain_samples = rest / 2;
    let release_samples = rest - sustain_samples;
    for slot in envelope.iter_mut().skip(rest_start).take(sustain_samples) {
        *slot = env.sustain as f32;
    }
    for i in 0..release_samples {
        let idx = rest_start + sustain_samples + i;
        envelope[idx] = env.sustain as f32 * (1.0 - i as f32 / release_samples as f32);
    }
    envelope
}

fn default_patch(_synth: &SynthEngine) -> Value {
    json!({
        "oscillators": {
            "osc1": { "waveform": "sawtooth", "octave": 0, "fine": 0 },
            "osc2": { "waveform": "square", "octave": -1, "fine": 5 },
            "sub": { "level": 0.3, "octave": -2 },
        },
        "filter": { "cutoff": 0.7, "resonance": 0.3, "envelope_amount": 0.5, "type": "lowpass" },
        "envelope": { "attack": 0.1, "decay": 0.3, "sustain": 0.6, "release": 0.8 },
        "effects": {
            "reverb": { "level": 0.2, "size": 0.5 },
            "delay": { "level": 0.1, "time": 0.25, "feedback": 0.4 },
            "chorus": { "level": 0.0, "rate": 0.5, "depth": 0.3 },
        },
    })
}

fn spell_patch(synth: &SynthEngine, freq: &SpellFrequency) -> Value {
    let base = freq.frequency as f64;
    let first = freq.harmonics.first().map(|&h| h as f64).unwrap_or(base * 2.0);
    let second = freq.harmonics.get(1).map(|&h| h as f64).unwrap_or(base * 3.0);
    json!({
        "oscillators": {
            "osc1": { "waveform": freq.waveform, "frequency": base, "amplitude": 0.8 },
            "osc2": { "waveform": "sine", "frequency": first, "amplitude": 0.4 },
            "osc3": { "waveform": "triangle", "frequency": second, "amplitude": 0.2 },
        },
        "filter": { "cutoff": 0.9, "resonance": 0.1, "type": "lowpass", "envelope_amount": 0.0 },
        "envelope": { "attack": 2.0, "decay": 0.0, "sustain": 1.0, "release": 3.0 },
        "effects": {
            "reverb": { "level": 0.8, "size": 1.0, "type": "cathedral" },
            "delay": { "level": 0.3, "time": 0.618, "feedback": 0.7 },
            "chorus": { "level": 0.0, "rate": 0.0, "depth": 0.0 },
        },
        "magic": {
            "element": synth.magic_integration.element,
            "chakra": synth.magic_integration.chakra,
            "sacred_geometry": synth.magic_integration.sacred_geometry,
        },
    })
}

fn spell_frequencies() -> HashMap<&'static str, SpellFrequency> {
    HashMap::from([
        ("wind_calling", SpellFrequency { frequency: 741, harmonics: &[1482, 2223, 2964], waveform: "sine" }),
        ("fire_manifestation", SpellFrequency { frequency: 528, harmonics: &[1056, 1584, 2112], waveform: "triangle" }),
        ("memory_recall", SpellFrequency { frequency: 639, harmonics: &[1278, 1917, 2556], waveform: "square" }),
        ("grounding_ritual", SpellFrequency { frequency: 396, harmonics: &[792, 1188, 1584], waveform: "sawtooth" }),
        ("consciousness_expansion", SpellFrequency { frequency: 963, harmonics: &[1926, 2889, 3852], waveform: "sine" }),
        ("vision_enhancement", SpellFrequency { frequency: 852, harmonics: &[1704, 2556, 3408], waveform: "triangle" }),
        ("sonic_healing", SpellFrequency { frequency: 741, harmonics: &[1482, 2223, 2964], waveform: "sine" }),
        ("creative_flow", SpellFrequency { frequency: 417, harmonics: &[834, 1251, 1668], waveform: "square" }),
        ("wave_manipulation", SpellFrequency { frequency: 852, harmonics: &[1704, 2556, 3408], waveform: "sine" }),
        ("matrix_activation", SpellFrequency { frequency: 639, harmonics: &[1278, 1917, 2556], waveform: "complex" }),
    ])
}

fn legendary_collection() -> HashMap<&'static str, SynthEngine> {
    HashMap::from([
        (
            "cosmic_modular",
            SynthEngine {
                name: "Cosmic Modular System",
                original_value: 850_000,
                year_created: 1970,
                manufacturer: "Cosmic Electronics",
                sound_architecture: "modular_analog",
                magic_integration: MagicIntegration {
                    element: "air",
                    chakra: "throat",
                    solfeggio: 741,
                    sacred_geometry: "hexagon",
                },
                spell_triggers: &["wind_calling", "communication_boost", "truth_revelation"],
                frequency_range: (20, 20_000),
                polyphony: 32,
                oscillators: vec![
                    json!({ "type": "vco", "waveforms": ["sine", "triangle", "sawtooth", "square", "noise"] }),
                    json!({ "type": "lfo", "range": [0.01, 1000.0], "sync": true }),
                    json!({ "type": "chaos", "algorithm": "lorenz_attractor" }),
                ],
                filters: vec![
                    json!({ "type": "ladder", "poles": 4, "resonance": true, "self_oscillation": true }),
                    json!({ "type": "state_variable", "modes": ["lowpass", "highpass", "bandpass", "notch"] }),
                    json!({ "type": "formant", "vowel_morphing": true }),
                ],
                effects: vec![
                    json!({ "type": "reverb", "algorithm": "cathedral_hall", "size": "infinite" }),
                    json!({ "type": "delay", "max_time": 10.0, "feedback": 0.98 }),
                    json!({ "type": "chorus", "voices": 12, "dimensional": true }),
                ],
            },
        ),
        (
            "quantum_prophet",
            SynthEngine {
                name: "Quantum Prophet Synthesizer",
                original_value: 750_000,
                year_created: 1978,
                manufacturer: "Quantum Audio",
                sound_architecture: "analog_polysynth",
                magic_integration: MagicIntegration {
                    element: "fire",
                    chakra: "solar_plexus",
                    solfeggio: 528,
                    sacred_geometry: "triangle",
                },
                spell_triggers: &["fire_manifestation", "power_amplification", "transformation_catalyst"],
                frequency_range: (20, 20_000),
                polyphony: 16,
                oscillators: vec![
                    json!({ "type": "curtis", "waveforms": ["sawtooth", "square", "triangle"], "sync": true }),
                    json!({ "type": "sub_oscillator", "octaves": [-1, -2], "pulse_width": true }),
                    json!({ "type": "quantum_noise", "color": "pink", "resonant": true }),
                ],
                filters: vec![
                    json!({ "type": "cascade", "poles": 4, "drive": true, "warm_saturation": true }),
                    json!({ "type": "voltage_controlled", "tracking": true, "keyboard_follow": true }),
                ],
                effects: vec![
                    json!({ "type": "analog_delay", "bucket_brigade": true, "warm_saturation": true }),
                    json!({ "type": "phase_shifter", "stages": 12, "resonance": true }),
                    json!({ "type": "frequency_shifter", "ring_modulation": true }),
                ],
            },
        ),
        (
            "digital_fairlight",
            SynthEngine {
                name: "Digital Fairlight Workstation",
                original_value: 680_000,
                year_created: 1979,
                manufacturer: "Fairlight Instruments",
                sound_architecture: "digital_sampling",
                magic_integration: MagicIntegration {
                    element: "water",
                    chakra: "heart",
                    solfeggio: 639,
                    sacred_geometry: "vesica_piscis",
                },
                spell_triggers: &["memory_recall", "emotional_healing", "time_manipulation"],
                frequency_range: (20, 20_000),
                polyphony: 8,
                oscillators: vec![
                    json!({ "type": "sample_based", "bit_depth": 16, "sample_rate": 44100 }),
                    json!({ "type": "wavetable", "tables": 256, "interpolation": "linear" }),
                    json!({ "type": "granular", "grain_size": 50, "overlap": 0.5 }),
                ],
                filters: vec![
                    json!({ "type": "digital_multimode", "algorithms": ["butterworth", "chebyshev", "elliptic"] }),
                    json!({ "type": "convolution", "impulse_responses": "cathedral_collection" }),
                ],
                effects: vec![
                    json!({ "type": "digital_reverb", "algorithm": "plate" }),
                    json!({ "type": "time_stretch", "granular": true }),
                ],
            },
        ),
        (
            "analog_synthesizer_system",
            SynthEngine {
                name: "Analog Synthesizer System 2000",
                original_value: 590_000,
                year_created: 1975,
                manufacturer: "Synthesizer Corporation",
                sound_architecture: "analog_monster",
                magic_integration: MagicIntegration {
                    element: "earth",
                    chakra: "root",
                    solfeggio: 396,
                    sacred_geometry: "cube",
                },
                spell_triggers: &["grounding_ritual", "protection_ward", "stability_anchor"],
                frequency_range: (20, 20_000),
                polyphony: 4,
                oscillators: vec![
                    json!({ "type": "discrete_vco", "waveforms": ["sawtooth", "pulse"] }),
                    json!({ "type": "sub_bass", "octave": -2 }),
                ],
                filters: vec![json!({ "type": "diode_ladder", "poles": 4, "drive": true })],
                effects: vec![json!({ "type": "spring_reverb", "tanks": 3 })],
            },
        ),
        (
            "digital_synclavier",
            SynthEngine {
                name: "Digital Synclavier Workstation",
                original_value: 520_000,
                year_created: 1977,
                manufacturer: "Digital Music Systems",
                sound_architecture: "digital_additive",
                magic_integration: MagicIntegration {
                    element: "spirit",
                    chakra: "crown",
                    solfeggio: 963,
                    sacred_geometry: "merkaba",
                },
                spell_triggers: &["consciousness_expansion", "astral_projection", "divine_connection"],
                frequency_range: (20, 20_000),
                polyphony: 32,
                oscillators: vec![
                    json!({ "type": "additive", "partials": 64 }),
                    json!({ "type": "fm", "operators": 4 }),
                ],
                filters: vec![json!({ "type": "digital_multimode", "resolution": "16_bit" })],
                effects: vec![json!({ "type": "digital_delay", "max_time": 8.0 })],
            },
        ),
        (
            "analog_cs80",
            SynthEngine {
                name: "Analog CS-80 Monster",
                original_value: 480_000,
                year_created: 1976,
                manufacturer: "Analog Industries",
                sound_architecture: "dual_layer_poly",
                magic_integration: MagicIntegration {
                    element: "fire",
                    chakra: "third_eye",
                    solfeggio: 852,
                    sacred_geometry: "pentagram",
                },
                spell_triggers: &["vision_enhancement", "psychic_activation", "future_sight"],
                frequency_range: (20, 20_000),
                polyphony: 8,
                oscillators: vec![
                    json!({ "type": "dual_layer", "waveforms": ["sawtooth", "pulse"], "ribbon": true }),
                ],
                filters: vec![json!({ "type": "dual_filter", "highpass": true, "lowpass": true })],
                effects: vec![json!({ "type": "ensemble_chorus", "depth": 0.7 })],
            },
        ),
        (
            "modal_synthesizer",
            SynthEngine {
                name: "Modal Synthesizer Engine",
                original_value: 450_000,
                year_created: 1981,
                manufacturer: "Modal Electronics",
                sound_architecture: "physical_modeling",
                magic_integration: MagicIntegration {
                    element: "air",
                    chakra: "throat",
                    solfeggio: 741,
                    sacred_geometry: "octahedron",
                },
                spell_triggers: &["sonic_healing", "frequency_therapy", "harmonic_alignment"],
                frequency_range: (20, 20_000),
                polyphony: 16,
                oscillators: vec![json!({ "type": "modal_resonator", "modes": 32 })],
                filters: vec![json!({ "type": "waveguide", "damping": 0.3 })],
                effects: vec![json!({ "type": "convolution_reverb", "space": "cathedral" })],
            },
        ),
        (
            "quantum_moog",
            SynthEngine {
                name: "Quantum Moog Modular",
                original_value: 420_000,
                year_created: 1968,
                manufacturer: "Quantum Moog",
                sound_architecture: "modular_quantum",
                magic_integration: MagicIntegration {
                    element: "earth",
                    chakra: "sacral",
                    solfeggio: 417,
                    sacred_geometry: "spiral",
                },
                spell_triggers: &["creative_flow", "sexual_energy", "life_force_boost"],
                frequency_range: (20, 20_000),
                polyphony: 1,
                oscillators: vec![
                    json!({ "type": "901_series", "waveforms": ["sine", "sawtooth", "triangle", "pulse"] }),
                ],
                filters: vec![json!({ "type": "transistor_ladder", "poles": 4 })],
                effects: vec![json!({ "type": "tape_delay", "wow_flutter": true })],
            },
        ),
        (
            "digital_ppg",
            SynthEngine {
                name: "Digital PPG Wavetable",
                original_value: 380_000,
                year_created: 1982,
                manufacturer: "PPG Electronics",
                sound_architecture: "wavetable_digital",
                magic_integration: MagicIntegration {
                    element: "water",
                    chakra: "third_eye",
                    solfeggio: 852,
                    sacred_geometry: "icosahedron",
                },
                spell_triggers: &["wave_manipulation", "liquid_transformation", "flow_control"],
                frequency_range: (20, 20_000),
                polyphony: 8,
                oscillators: vec![json!({ "type": "wavetable", "tables": 30, "sweep": true })],
                filters: vec![json!({ "type": "analog_ssm", "poles": 4 })],
                effects: vec![json!({ "type": "digital_chorus", "voices": 6 })],
            },
        ),
        (
            "analog_oberheim",
            SynthEngine {
                name: "Analog Oberheim Matrix",
                original_value: 350_000,
                year_created: 1984,
                manufacturer: "Oberheim Electronics",
                sound_architecture: "matrix_modulation",
                magic_integration: MagicIntegration {
                    element: "spirit",
                    chakra: "heart",
                    solfeggio: 639,
                    sacred_geometry: "flower_of_life",
                },
                spell_triggers: &["matrix_activation", "reality_programming", "dimensional_shift"],
                frequency_range: (20, 20_000),
                polyphony: 6,
                oscillators: vec![json!({ "type": "cem_vco", "waveforms": ["sawtooth", "pulse"] })],
                filters: vec![json!({ "type": "matrix_routed", "destinations": 27 })],
                effects: vec![json!({ "type": "stereo_chorus", "panning_matrix": true })],
            },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_of_ten_legends() {
        let lab = SynthLab::new();
        assert_eq!(lab.synths.len(), 10);
        let info = lab.collection_info();
        assert_eq!(info["total_synths"], 10);
        assert_eq!(info["total_original_value"], 5_470_000u64);
    }

    #[test]
    fn test_session_lifecycle() {
        let mut lab = SynthLab::new();
        let id = lab.start_session("cosmic_modular", "demo_user").unwrap();
        assert_eq!(id, "cosmic_modular_demo_user");
        let session = lab.session(&id).unwrap();
        assert!(!session.spell_mode);
        assert_eq!(session.magic_resonance, 0.0);
    }

    #[test]
    fn test_unknown_synth_errors() {
        let mut lab = SynthLab::new();
        let err = lab.start_session("imaginary_303", "x").unwrap_err();
        assert_eq!(err, SynthError::UnknownSynth("imaginary_303".into()));
    }

    #[test]
    fn test_spell_mode_swaps_patch() {
        let mut lab = SynthLab::new();
        let id = lab.start_session("cosmic_modular", "u").unwrap();
        let freq = lab.trigger_spell_mode(&id, "wind_calling").unwrap();
        assert_eq!(freq.frequency, 741);
        let session = lab.session(&id).unwrap();
        assert!(session.spell_mode);
        assert_eq!(session.magic_resonance, 1.0);
        assert_eq!(session.current_patch["oscillators"]["osc1"]["frequency"], 741.0);
        assert_eq!(session.current_patch["magic"]["element"], "air");
    }

    #[test]
    fn test_spell_must_belong_to_synth() {
        let mut lab = SynthLab::new();
        let id = lab.start_session("cosmic_modular", "u").unwrap();
        let err = lab.trigger_spell_mode(&id, "grounding_ritual").unwrap_err();
        assert_eq!(err, SynthError::SpellUnavailable("grounding_ritual".into()));
    }

    #[test]
    fn test_midi_to_hz_anchors() {
        assert!((midi_to_hz(69) - 440.0).abs() < 1e-9);
        // middle C
        assert!((midi_to_hz(60) - 261.6256).abs() < 1e-3);
    }

    #[test]
    fn test_generate_sound_metadata() {
        let mut lab = SynthLab::new();
        let id = lab.start_session("quantum_prophet", "u").unwrap();
        let sound = lab.generate_sound(&id, 60, 100, 0.5).unwrap();
        assert_eq!(sound.note, 60);
        assert_eq!(sound.samples_generated, 22_050);
        assert_eq!(sound.samples.len(), 22_050);
        assert_eq!(sound.synth_used, "Quantum Prophet Synthesizer");
        assert!(sound.spell_effect.is_none());
        // velocity scaling keeps everything under 100/127
        let peak = sound.samples.iter().fold(0.0f32, |m, s| m.max(s.abs()));
        assert!(peak <= 100.0 / 127.0 + 1e-6);
    }

    #[test]
    fn test_envelope_shape() {
        let env = generate_envelope(
            1000,
            Envelope { attack: 0.4, decay: 0.4, sustain: 0.6, release: 0.8 },
        );
        assert_eq!(env.len(), 1000);
        assert_eq!(env[0], 0.0);
        // end of attack ramp approaches full level
        assert!(env[99] > 0.95);
        // tail releases back toward zero
        assert!(env[999] < 0.01);
    }

    #[test]
    fn test_every_first_spell_trigger_has_frequencies() {
        // the lead trigger of each engine must resolve in the spell table
        // (secondary triggers are flavor and may not)
        let lab = SynthLab::new();
        for synth in lab.synths.values() {
            let lead = synth.spell_triggers[0];
            assert!(lab.spell_frequencies.contains_key(lead), "{} lead {lead}", synth.name);
        }
    }
}
