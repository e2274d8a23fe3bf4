//! Social media word-cloud generation library.
//!
//! This crate provides the whole sample-then-render pipeline:
//! - Platform identifiers and their bias vocabularies
//! - Uniform random word sampling with replacement
//! - Word-cloud rendering, with a frequency bar chart fallback
//! - Configuration loading and the high-level `Analyzer`
//!
//! Renderers are selected once, at start-up, by a capability probe and are
//! then passed explicitly to the analyzer.

/// Application and rendering configuration.
pub mod config;

/// Platform identifiers (Facebook, Twitter, Reddit).
pub mod platform;

/// Generic and per-platform bias vocabularies.
pub mod vocabulary;

/// Uniform random word sampler.
pub mod sampler;

/// Word occurrence counting and top-N extraction.
pub mod frequency;

/// Continuous color schemes used to tint words.
pub mod color;

/// Visual renderers (word cloud and fallback chart) and the capability probe.
pub mod render;

/// High-level pipeline running sampler and renderer for every platform.
pub mod analyzer;

/// I/O utilities (file loading, path helpers).
pub mod io;
