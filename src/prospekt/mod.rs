// src/prospekt/mod.rs
pub mod client;
pub mod models;

pub use client::{BrochureClient, ClientConfig};
pub use models::Brochure;
