use crate::block::Block;
use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Built-in registry data, embedded at compile time.
const BUILTIN_BLOCKS_RON: &str = include_str!("../assets/blocks.ron");

/// Material properties for a single block type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockDef {
    pub block: Block,
    /// Transparent blocks do not occlude neighboring faces.
    pub transparent: bool,
    /// Whether drones may extract this block.
    pub minable: bool,
    /// RGB color (0.0-1.0 per channel), baked into mesh colors.
    pub color: (f32, f32, f32),
}

/// Lookup table of block definitions, indexed by discriminant.
///
/// Dense: every discriminant up to `Block::Hub` has a slot, so lookups
/// in the mesher hot loop are a single array read.
#[derive(Debug, Clone)]
pub struct BlockRegistry {
    defs: Vec<Option<BlockDef>>,
}

impl BlockRegistry {
    /// Parse a registry from RON. Every block type must appear at most
    /// once; blocks missing from the data fall back to opaque black.
    pub fn from_ron_str(ron_str: &str) -> Result<Self, EngineError> {
        let options = ron::Options::default();
        let defs: Vec<BlockDef> = options
            .from_str(ron_str)
            .map_err(|e| EngineError::RegistryParse(e.to_string()))?;

        let max_id = Block::Hub as usize;
        let mut table: Vec<Option<BlockDef>> = vec![None; max_id + 1];
        for def in defs {
            let id = def.block as usize;
            if table[id].is_some() {
                return Err(EngineError::DuplicateRegistryEntry(def.block as u8));
            }
            table[id] = Some(def);
        }
        Ok(Self { defs: table })
    }

    /// The built-in registry shipped with the engine.
    pub fn builtin() -> Self {
        Self::from_ron_str(BUILTIN_BLOCKS_RON).expect("embedded block registry is valid RON")
    }

    pub fn get(&self, block: Block) -> Option<&BlockDef> {
        self.defs.get(block as usize).and_then(|d| d.as_ref())
    }

    pub fn is_transparent(&self, block: Block) -> bool {
        self.get(block).map(|d| d.transparent).unwrap_or(false)
    }

    pub fn is_minable(&self, block: Block) -> bool {
        self.get(block).map(|d| d.minable).unwrap_or(false)
    }

    /// Block color, or opaque magenta for unregistered blocks (the
    /// classic missing-asset marker).
    pub fn color(&self, block: Block) -> [f32; 3] {
        match self.get(block) {
            Some(d) => [d.color.0, d.color.1, d.color.2],
            None => [1.0, 0.0, 1.0],
        }
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
