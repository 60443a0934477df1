//! # Sacred Geometry Catalog
//!
//! The closed set of geometry presets. Each entry carries a typed parameter
//! variant ([`GeometryKind`]) instead of a loose parameter map, so the
//! renderer can match on it directly.

use std::collections::HashMap;

use serde::Serialize;

/// Typed drawing parameters, one variant per geometry family.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeometryKind {
    /// Rings of overlapping circles (Flower of Life, Seed of Life)
    CirclePattern { circles: u32, radius: f64, central: bool },
    /// Platonic-solid projections (Metatron's Cube)
    PolyhedricPattern { vertices: u32, platonic_solids: u32 },
    /// Logarithmic spiral with nested golden rectangles
    SpiralPattern { ratio: f64, turns: u32 },
    /// Interlocking triangles around ringed circles (Sri Yantra)
    TriangularMandala { upward: u32, downward: u32 },
    /// Two interpenetrating tetrahedra (Merkaba)
    TetrahedronStar { scale: f64 },
    /// Two circles overlapping in a lens (Vesica Piscis)
    LensPattern { radius: f64, separation: f64 },
    /// Sephirothic network (Tree of Life)
    SphericalNetwork { sephiroth: u32, paths: u32 },
    /// The inverted tree of the Aeon of Maat
    ReversedTree { sephiroth: u32, paths: u32 },
    /// Daath seal with Choronzon triangles and the Babalon gate
    AbyssCrossing { gate_points: u32 },
    /// The cube of space with its letter stations
    CubicLetters { mother: u32, double: u32, single: u32 },
}

/// A sacred geometry preset. Immutable once registered.
#[derive(Debug, Clone, Serialize)]
pub struct SacredGeometry {
    pub name: &'static str,
    pub kind: GeometryKind,
    pub frequency_resonance: Option<u32>,
    pub symbolic_meaning: &'static str,
}

/// Build the preset registry. Called once by the suite at startup.
pub fn sacred_geometries() -> HashMap<&'static str, SacredGeometry> {
    use GeometryKind::*;
    HashMap::from([
        (
            "flower_of_life",
            SacredGeometry {
                name: "Flower of Life",
                kind: CirclePattern { circles: 19, radius: 1.0, central: true },
                frequency_resonance: Some(528),
                symbolic_meaning: "Unity of all creation, sacred blueprint of existence",
            },
        ),
        (
            "metatrons_cube",
            SacredGeometry {
                name: "Metatron's Cube",
                kind: PolyhedricPattern { vertices: 13, platonic_solids: 5 },
                frequency_resonance: Some(741),
                symbolic_meaning: "Archangel Metatron's divine blueprint, container of all forms",
            },
        ),
        (
            "golden_spiral",
            SacredGeometry {
                name: "Golden Spiral",
                kind: SpiralPattern { ratio: 1.618, turns: 5 },
                frequency_resonance: Some(639),
                symbolic_meaning: "Natural growth pattern, divine proportion in nature",
            },
        ),
        (
            "sri_yantra",
            SacredGeometry {
                name: "Sri Yantra",
                kind: TriangularMandala { upward: 4, downward: 5 },
                frequency_resonance: Some(852),
                symbolic_meaning: "Cosmic union of masculine and feminine principles",
            },
        ),
        (
            "merkaba",
            SacredGeometry {
                name: "Merkaba",
                kind: TetrahedronStar { scale: 1.5 },
                frequency_resonance: Some(963),
                symbolic_meaning: "Light-spirit-body vehicle, divine chariot of ascension",
            },
        ),
        (
            "vesica_piscis",
            SacredGeometry {
                name: "Vesica Piscis",
                kind: LensPattern { radius: 1.0, separation: 1.0 },
                frequency_resonance: Some(396),
                symbolic_meaning: "Birth portal, intersection of matter and spirit",
            },
        ),
        (
            "seed_of_life",
            SacredGeometry {
                name: "Seed of Life",
                kind: CirclePattern { circles: 7, radius: 1.0, central: true },
                frequency_resonance: Some(417),
                symbolic_meaning: "Genesis pattern, foundation of creation",
            },
        ),
        (
            "tree_of_life",
            SacredGeometry {
                name: "Tree of Life",
                kind: SphericalNetwork { sephiroth: 10, paths: 22 },
                frequency_resonance: Some(741),
                symbolic_meaning: "Map of consciousness, divine emanation structure",
            },
        ),
        (
            "achad_tree",
            SacredGeometry {
                name: "Frater Achad's Tree",
                kind: ReversedTree { sephiroth: 10, paths: 22 },
                // ABRAHADABRA
                frequency_resonance: Some(418),
                symbolic_meaning: "The reversed tree of the Aeon of Maat, Achad's great revelation",
            },
        ),
        (
            "oath_abyss_sigil",
            SacredGeometry {
                name: "Oath of the Abyss",
                kind: AbyssCrossing { gate_points: 7 },
                // Choronzon number
                frequency_resonance: Some(333),
                symbolic_meaning:
                    "I will interpret every phenomenon as a particular dealing of God with my soul",
            },
        ),
        (
            "qblh_cube",
            SacredGeometry {
                name: "QBLH Cube of Space",
                kind: CubicLetters { mother: 3, double: 7, single: 12 },
                frequency_resonance: Some(777),
                symbolic_meaning: "Achad's arrangement of the 22 Hebrew letters in cosmic space",
            },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_holds_eleven_presets() {
        assert_eq!(sacred_geometries().len(), 11);
    }

    #[test]
    fn test_flower_of_life_parameters() {
        let geos = sacred_geometries();
        let flower = &geos["flower_of_life"];
        assert_eq!(flower.frequency_resonance, Some(528));
        assert_eq!(
            flower.kind,
            GeometryKind::CirclePattern { circles: 19, radius: 1.0, central: true }
        );
    }

    #[test]
    fn test_kind_tags_serialize_snake_case() {
        let geos = sacred_geometries();
        let json = serde_json::to_value(&geos["merkaba"].kind).unwrap();
        assert_eq!(json["type"], "tetrahedron_star");
    }
}
