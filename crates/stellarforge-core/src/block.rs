use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Block type stored per voxel. Discriminants are stable wire/save IDs
/// and leave gaps for future construction stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Block {
    /// Empty space. Never owns a chunk allocation by itself.
    #[default]
    Air = 0,
    AsteroidCore = 1,
    AsteroidSurface = 2,
    RareOre = 3,
    /// Ghost placeholder marking a registered blueprint cell.
    BlueprintFrame = 9,
    /// Construction stage 1: a built frame.
    Frame = 10,
    /// Construction stage 2: a completed panel.
    Panel = 20,
    /// Construction stage 3: an upgraded shell.
    Shell = 21,
    /// Drone control hub.
    Hub = 30,
}

impl Block {
    /// All known block types, in discriminant order.
    pub const ALL: [Block; 9] = [
        Block::Air,
        Block::AsteroidCore,
        Block::AsteroidSurface,
        Block::RareOre,
        Block::BlueprintFrame,
        Block::Frame,
        Block::Panel,
        Block::Shell,
        Block::Hub,
    ];

    /// Whether this block leaves the cell traversable/reachable.
    /// A minable voxel with at least one exposing neighbor is a valid
    /// mining target.
    pub fn exposes(self) -> bool {
        matches!(self, Block::Air | Block::Frame | Block::BlueprintFrame)
    }

    pub fn is_air(self) -> bool {
        self == Block::Air
    }
}

impl TryFrom<u8> for Block {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Block::ALL
            .into_iter()
            .find(|b| *b as u8 == value)
            .ok_or(EngineError::UnknownBlock(value))
    }
}
