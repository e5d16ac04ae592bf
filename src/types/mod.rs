//! Core types
//!
//! Data records shared by the state, view and UI layers.

pub mod link_card;

pub use link_card::{link_cards, Accent, AccentStyle, LinkCard};
