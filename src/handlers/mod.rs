// src/handlers/mod.rs

pub mod admin;
