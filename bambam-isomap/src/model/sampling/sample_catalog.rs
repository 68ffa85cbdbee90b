use serde::{Deserialize, Serialize};

use crate::model::coordinate::Position;

/// description and illustration shown in the popup of a sampled point.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    pub description: String,
    pub image: String,
}

/// a sampled point paired with its catalog entry.
#[derive(Clone, Debug, PartialEq)]
pub struct SampledListing {
    pub index: usize,
    pub position: Position,
    pub description: String,
    pub image: String,
}

/// fixed presentation catalog, assigned to sampled points by index. when there are
/// more points than entries the catalog wraps around.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct SampleCatalog(Vec<CatalogEntry>);

const DEFAULT_DESCRIPTIONS: [&str; 15] = [
    "Mansão de luxo com piscina",
    "T3 com vista deslumbrante",
    "Apartamento moderno no centro",
    "Casa rústica com jardim",
    "Vivenda espaçosa com garagem",
    "Moradia geminada com varanda",
    "T2 acolhedor perto do mar",
    "Chalé encantador na serra",
    "Quinta com terreno agrícola",
    "Estúdio elegante em zona urbana",
    "Moradia com piscina e barbecue",
    "Apartamento T1 com terraço",
    "Duplex com acabamentos de luxo",
    "T4 com lareira e jardim",
    "Casa de campo",
];

impl Default for SampleCatalog {
    fn default() -> Self {
        let entries = DEFAULT_DESCRIPTIONS
            .iter()
            .enumerate()
            .map(|(i, d)| CatalogEntry {
                description: d.to_string(),
                image: format!("images/{}.jpg", i + 1),
            })
            .collect();
        SampleCatalog(entries)
    }
}

impl SampleCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> SampleCatalog {
        SampleCatalog(entries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<&CatalogEntry> {
        if self.0.is_empty() {
            None
        } else {
            self.0.get(index % self.0.len())
        }
    }

    /// pairs points with entries in order. an empty catalog yields blank text.
    pub fn pair(&self, points: Vec<Position>) -> Vec<SampledListing> {
        points
            .into_iter()
            .enumerate()
            .map(|(index, position)| {
                let (description, image) = match self.entry(index) {
                    Some(e) => (e.description.clone(), e.image.clone()),
                    None => (String::new(), String::new()),
                };
                SampledListing {
                    index,
                    position,
                    description,
                    image,
                }
            })
            .collect()
    }
}
