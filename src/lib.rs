//! Batch re-encoder for DFauto merged exports.
//!
//! Scans a folder for `*.merged.txt` files with unknown or mixed encodings,
//! guesses each file's encoding from a short byte sample, decodes it, applies
//! the fixed DFauto label substitutions, and writes a UTF-8 copy.

pub mod cli;
pub mod config;
pub mod converter;
pub mod detector;
pub mod error;
pub mod scanner;
