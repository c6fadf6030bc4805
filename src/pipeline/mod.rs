//! Question generation pipeline
//!
//! Configuration, intermediate artifacts, random index sources and the
//! runner that ties the stages together.

pub mod artifacts;
pub mod config;
pub mod runner;
pub mod sampling;
