// src/services/mod.rs
pub mod backend;
pub mod clock;
pub mod store;
