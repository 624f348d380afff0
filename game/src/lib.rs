//! Core modules for the tactics board game: piece data, the per-kind
//! movement rules, speed-ranked turn ordering, and the owned game state
//! that the SDL front end drives.

pub mod board;
pub mod piece;
pub mod render;
pub mod rules;
pub mod state;
pub mod turn_order;
