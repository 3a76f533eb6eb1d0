//! Descriptive text for each dimension shown by the viewer.
//!
//! Counts are computed from [`stats`](crate::stats) so they cannot drift from the
//! geometry actually drawn.

use crate::stats::{HypercubeStats, face_count};

#[derive(Clone, Debug, PartialEq)]
pub struct DimensionInfo {
    pub dimension: usize,
    pub label: String,
    pub name: String,
    pub description: String,
    pub properties: Vec<String>,
    pub geometric: Vec<String>,
    pub topological: Vec<String>,
}

const NAMES: [&str; 12] = [
    "Point",
    "Line",
    "Square",
    "Cube",
    "Tesseract (Hypercube)",
    "Penteract (5-cube)",
    "Hexeract (6-cube)",
    "Hepteract (7-cube)",
    "Octeract (8-cube)",
    "Enneract (9-cube)",
    "Dekeract (10-cube)",
    "Hendekeract (11-cube)",
];

// Plural names of k-faces, indexed by k, for k >= 2.
const FACE_NAMES: [&str; 11] = [
    "",
    "",
    "faces",
    "cubes",
    "tesseracts",
    "penteracts",
    "hexeracts",
    "hepteracts",
    "octeracts",
    "enneracts",
    "dekeracts",
];

const NUMBER_WORDS: [&str; 12] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven",
];

pub fn label(dimension: usize) -> String {
    format!("{}D", dimension)
}

pub fn name(dimension: usize) -> String {
    NAMES
        .get(dimension)
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("{}-cube", dimension))
}

fn number_word(n: usize) -> String {
    NUMBER_WORDS
        .get(n)
        .map(|s| s.to_string())
        .unwrap_or_else(|| n.to_string())
}

/// "An" before a vowel sound. Covers the spelled-out words and digit strings used here.
fn indefinite_article(word: &str) -> &'static str {
    match word.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u' | '8') => "An",
        _ if word == "11" || word == "18" => "An",
        _ => "A",
    }
}

pub fn info(dimension: usize) -> DimensionInfo {
    let stats = HypercubeStats::for_dimension(dimension);
    DimensionInfo {
        dimension,
        label: label(dimension),
        name: name(dimension),
        description: description(dimension, &stats),
        properties: properties(dimension, &stats),
        geometric: geometric(dimension, &stats),
        topological: topological(dimension, &stats),
    }
}

fn description(dimension: usize, stats: &HypercubeStats) -> String {
    match dimension {
        0 => "A zero-dimensional point with no length, width, or height. It represents position only.".into(),
        1 => "A one-dimensional line with length only. Points can only move along this single axis.".into(),
        2 => "A two-dimensional plane with length and width. Objects can move in any direction within this flat surface.".into(),
        3 => "Our familiar three-dimensional space with length, width, and height. Objects have volume and can move in any direction.".into(),
        4 => "A four-dimensional hypercube with length, width, height, and a fourth spatial dimension (ana/kata). This is a projection into our 3D space.".into(),
        d => {
            let word = number_word(d);
            format!(
                "{} {}-dimensional hypercube. Rotates through {} different 2D planes simultaneously.",
                indefinite_article(&word),
                word,
                stats.rotation_planes
            )
        }
    }
}

/// "32 vertices, 80 edges, 80 faces, 40 cubes, 10 tesseracts"
fn element_summary(dimension: usize, stats: &HypercubeStats) -> String {
    let mut parts = vec![
        format!("{} vertices", stats.vertices),
        format!("{} edges", stats.edges),
    ];
    for k in 2..dimension.min(FACE_NAMES.len()) {
        parts.push(format!("{} {}", face_count(dimension, k), FACE_NAMES[k]));
    }
    parts.join(", ")
}

fn properties(dimension: usize, stats: &HypercubeStats) -> Vec<String> {
    match dimension {
        0 => vec![
            "Position only".into(),
            "No extension in any direction".into(),
            "Fundamental geometric object".into(),
        ],
        1 => vec![
            "Length".into(),
            "No width or height".into(),
            "Infinite thinness".into(),
        ],
        2 => vec![
            "Length and Width".into(),
            "No thickness".into(),
            "Area exists".into(),
            "Infinite thinness in 3rd dimension".into(),
        ],
        3 => vec![
            "Length, Width, and Height".into(),
            "Volume exists".into(),
            "Physical space we experience".into(),
            element_summary(3, stats),
        ],
        4 => vec![
            "4 spatial dimensions".into(),
            element_summary(4, stats),
            "Rotates through multiple 4D planes".into(),
            "Impossible to fully visualize in 3D".into(),
        ],
        d => vec![
            format!("{} spatial dimensions", d),
            element_summary(d, stats),
            format!("{} rotation planes", stats.rotation_planes),
            format!("Hypervolume: l^{}", d),
        ],
    }
}

fn geometric(dimension: usize, stats: &HypercubeStats) -> Vec<String> {
    match dimension {
        0 => vec![
            "No dimensions".into(),
            "Position only".into(),
            "No distance concept".into(),
        ],
        1 => vec![
            "Distance: |x2 - x1|".into(),
            "Degrees of freedom: 1".into(),
            "Neighbors: 2 maximum".into(),
        ],
        2 => vec![
            "Area: length x width".into(),
            "Degrees of freedom: 2".into(),
            "Euclidean distance: sqrt((x2-x1)^2 + (y2-y1)^2)".into(),
        ],
        3 => vec![
            "Volume: length x width x height".into(),
            "Degrees of freedom: 3".into(),
            "Distance: sqrt((x2-x1)^2 + (y2-y1)^2 + (z2-z1)^2)".into(),
        ],
        d => vec![
            format!("Hypervolume: l^{}", d),
            format!("Degrees of freedom: {}", d),
            format!("Distance: sqrt(sum (xi2-xi1)^2) for i=1..{}", d),
            format!("Rotation planes: {}", stats.rotation_planes),
        ],
    }
}

fn topological(dimension: usize, stats: &HypercubeStats) -> Vec<String> {
    match dimension {
        0 => vec![
            "Vertices: 1".into(),
            "No edges or faces".into(),
            "Boundary: empty set".into(),
        ],
        1 => vec![
            "Vertices: 2".into(),
            "Edges: 1".into(),
            "Boundary: 0-dimensional points".into(),
        ],
        2 => vec![
            "Vertices: 4".into(),
            "Edges: 4".into(),
            "Faces: 1".into(),
            "Boundary: 1-dimensional edges".into(),
        ],
        3 => vec![
            "Vertices: 8".into(),
            "Edges: 12".into(),
            "Faces: 6".into(),
            "Boundary: 2-dimensional faces".into(),
        ],
        d => vec![
            format!("Vertices: {}", stats.vertices),
            format!("Edges: {}", stats.edges),
            format!("{}D content: 1 hypercube", d),
            format!(
                "Boundary: {} facets of dimension {}",
                face_count(d, d - 1),
                d - 1
            ),
        ],
    }
}
