//! Reusable view components shared by several pages.

pub mod shoe_card;

pub use shoe_card::{Banner, ShoeCardTemplate, ShoeCardView};
