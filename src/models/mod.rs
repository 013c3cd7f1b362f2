// src/models/mod.rs

pub mod motion;
pub mod pendulum;
