// src/extractors/mod.rs
pub mod brochure;
pub mod validity;

// Re-export key extraction types for convenience
pub use brochure::BrochureExtractor;
