//! Gas dashboard library.
//!
//! Pure logic (sampling, alarm policy, presentation, scheduling) behind
//! port traits, plus the adapters the binary wires together.  Everything
//! except `adapters::rpi` builds and tests on any host.

#![deny(unused_must_use)]

pub mod adapters;
pub mod alarm;
pub mod app;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod pins;
pub mod scheduler;
pub mod sensors;
