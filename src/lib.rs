//! Sine wave lookup table generator.
//!
//! The table is computed once from a [`config::Config`] by
//! [`lut::LookupTable::new`] and written out by [`render::render`] either as
//! bare values or as a C/C++ array declaration for firmware sources.

pub mod cli;
pub mod config;
pub mod exit;
pub mod lut;
pub mod render;
