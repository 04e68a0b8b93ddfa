//! Step definitions for contact submission BDD scenarios.

mod given;
mod when;
pub mod world;
