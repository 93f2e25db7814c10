//! Treasure: hoard code parsing and hoard rolling.

pub mod catalogue;
pub mod code;
pub mod hoard;
pub mod quantity;

pub use code::{TreasureCode, TreasureSpec, TreasureTier, parse_treasure_code};
pub use hoard::{
    Coins, RolledArtObject, RolledGem, RolledMagicItem, RolledTreasure, TreasureGenerator,
};
pub use quantity::{Amount, MagicInstruction, Quantity, parse_magic_instructions};
