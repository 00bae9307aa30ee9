//! Teamsprite - Library for building a Pokémon team and rendering it as a card
//!
//! This library provides functionality to:
//! - Look creatures up by name or number and search the name listing
//! - Keep a roster of up to six entries with their sprites cached
//! - Lay the team out and composite it with a background and label
//! - Export the card as PNG

pub mod cli;
pub mod color;
pub mod composition;
pub mod config;
pub mod image_cache;
pub mod layout;
pub mod models;
pub mod output;
pub mod repository;
pub mod roster;
pub mod session;

#[cfg(test)]
mod test_server;
