// src/systems/mod.rs

pub mod deal_system;
