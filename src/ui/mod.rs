// src/ui/mod.rs
pub mod charts;
pub mod controls;
