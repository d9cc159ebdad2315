//! Procedural low-poly city.
//!
//! The registry is built once from a seed and never resized, so entity
//! indices (and the per-card animation phases derived from them) are stable
//! for the lifetime of the page.

use crate::constants::*;
use glam::Vec3;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Ground,
    GridLine,
    Building,
    PalmTrunk,
    PalmLeaves,
    Card,
    CardBorder,
}

/// One renderable box. Children are positioned relative to their parent.
#[derive(Clone, Debug)]
pub struct Entity {
    pub kind: EntityKind,
    pub translation: Vec3,
    pub scale: Vec3,
    pub color: [f32; 4],
    pub parent: Option<usize>,
}

#[derive(Clone, Copy, Debug)]
pub struct CharacterCard {
    pub name: &'static str,
    pub color_rgb: [f32; 3],
    pub x: f32,
    pub z: f32,
}

pub const CHARACTERS: [CharacterCard; 3] = [
    CharacterCard {
        name: "CJ",
        color_rgb: [0.0, 1.0, 0.0],
        x: -5.0,
        z: 0.0,
    },
    CharacterCard {
        name: "SMOKE",
        color_rgb: [1.0, 0.0, 0.0],
        x: 0.0,
        z: -2.0,
    },
    CharacterCard {
        name: "RYDER",
        color_rgb: [0.0, 0.0, 1.0],
        x: 5.0,
        z: 0.0,
    },
];

#[derive(Clone, Debug)]
pub struct CityParams {
    pub seed: u64,
    pub building_count: usize,
    pub palm_count: usize,
    pub ground_size: f32,
    pub grid_divisions: usize,
}

impl Default for CityParams {
    fn default() -> Self {
        Self {
            seed: 42,
            building_count: 100,
            palm_count: 20,
            ground_size: 200.0,
            grid_divisions: 50,
        }
    }
}

pub struct EntityRegistry {
    entities: Vec<Entity>,
    cards: Vec<usize>,
}

#[inline]
fn opaque(rgb: [f32; 3]) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], 1.0]
}

/// Uniform sample in `[-0.5, 0.5) * span`.
#[inline]
fn centered(rng: &mut StdRng, span: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * span
}

impl EntityRegistry {
    pub fn generate(params: &CityParams) -> Self {
        let mut rng = StdRng::seed_from_u64(params.seed);
        let mut entities = Vec::with_capacity(
            1 + 2 * (params.grid_divisions + 1)
                + params.building_count
                + 2 * params.palm_count
                + 5 * CHARACTERS.len(),
        );

        let size = params.ground_size;
        entities.push(Entity {
            kind: EntityKind::Ground,
            translation: Vec3::new(0.0, -0.1, 0.0),
            scale: Vec3::new(size, 0.01, size),
            color: opaque(GROUND_COLOR),
            parent: None,
        });
        let step = size / params.grid_divisions.max(1) as f32;
        for i in 0..=params.grid_divisions {
            let offset = -size / 2.0 + i as f32 * step;
            entities.push(Entity {
                kind: EntityKind::GridLine,
                translation: Vec3::new(offset, 0.0, 0.0),
                scale: Vec3::new(0.05, 0.01, size),
                color: opaque(GRID_COLOR),
                parent: None,
            });
            entities.push(Entity {
                kind: EntityKind::GridLine,
                translation: Vec3::new(0.0, 0.0, offset),
                scale: Vec3::new(size, 0.01, 0.05),
                color: opaque(GRID_COLOR),
                parent: None,
            });
        }

        for _ in 0..params.building_count {
            let x = centered(&mut rng, 100.0);
            let z = centered(&mut rng, 100.0) - 20.0;
            let height = rng.gen::<f32>() * 10.0 + 2.0;
            let width = rng.gen::<f32>() * 3.0 + 1.0;
            let depth = rng.gen::<f32>() * 3.0 + 1.0;
            entities.push(Entity {
                kind: EntityKind::Building,
                translation: Vec3::new(x, height / 2.0, z),
                scale: Vec3::new(width, height, depth),
                color: opaque(BUILDING_COLOR),
                parent: None,
            });
        }

        for _ in 0..params.palm_count {
            let x = centered(&mut rng, 80.0);
            let z = centered(&mut rng, 40.0) + 10.0;
            let trunk = entities.len();
            entities.push(Entity {
                kind: EntityKind::PalmTrunk,
                translation: Vec3::new(x, 2.0, z),
                scale: Vec3::new(0.5, 4.0, 0.5),
                color: opaque(TRUNK_COLOR),
                parent: None,
            });
            entities.push(Entity {
                kind: EntityKind::PalmLeaves,
                translation: Vec3::new(0.0, 2.0, 0.0),
                scale: Vec3::new(3.0, 1.0, 3.0),
                color: opaque(LEAF_COLOR),
                parent: Some(trunk),
            });
        }

        let mut cards = Vec::with_capacity(CHARACTERS.len());
        for ch in CHARACTERS.iter() {
            let card = entities.len();
            cards.push(card);
            let [r, g, b] = ch.color_rgb;
            entities.push(Entity {
                kind: EntityKind::Card,
                translation: Vec3::new(ch.x, CARD_BASE_HEIGHT, ch.z),
                scale: Vec3::new(CARD_WIDTH, CARD_HEIGHT, 0.02),
                color: [r, g, b, CARD_OPACITY],
                parent: None,
            });
            // Neon frame: top, bottom, left, right bars in card space.
            let (hw, hh) = (CARD_WIDTH / 2.0, CARD_HEIGHT / 2.0);
            let bars = [
                (Vec3::new(0.0, hh, 0.0), Vec3::new(CARD_WIDTH, CARD_BORDER_WIDTH, 0.04)),
                (Vec3::new(0.0, -hh, 0.0), Vec3::new(CARD_WIDTH, CARD_BORDER_WIDTH, 0.04)),
                (Vec3::new(-hw, 0.0, 0.0), Vec3::new(CARD_BORDER_WIDTH, CARD_HEIGHT, 0.04)),
                (Vec3::new(hw, 0.0, 0.0), Vec3::new(CARD_BORDER_WIDTH, CARD_HEIGHT, 0.04)),
            ];
            for (translation, scale) in bars {
                entities.push(Entity {
                    kind: EntityKind::CardBorder,
                    translation,
                    scale,
                    color: opaque(BORDER_COLOR),
                    parent: Some(card),
                });
            }
        }

        log::info!(
            "[scene] city seed={} entities={} cards={}",
            params.seed,
            entities.len(),
            cards.len()
        );
        Self { entities, cards }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entity indices of the character cards, in card-identity order.
    pub fn cards(&self) -> &[usize] {
        &self.cards
    }

    /// Card identity (0-based) of an entity, if it is a card.
    pub fn card_identity(&self, entity: usize) -> Option<usize> {
        self.cards.iter().position(|&e| e == entity)
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind == kind).count()
    }
}
