//! Wanderlust hero screen
//!
//! Landing screen for the trip planner: marketing copy with a call-to-action
//! and a live weather widget for the user's current position.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod geo;
pub mod icons;
pub mod logging;
pub mod night;
pub mod reducer;
pub mod state;
pub mod tasks;
