//! Gamification engine and marketplace operations

pub mod achievements;
pub mod badges;
pub mod gamification;
pub mod levels;
pub mod marketplace;
pub mod ratings;
pub mod seed;


pub use marketplace::{Marketplace, ProfileProgress};
