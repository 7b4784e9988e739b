// src/utils/mod.rs

pub mod bulk_parser;
pub mod html;
pub mod scoring;
