//! Rootwalk Application Layer
//!
//! Orchestration of iterative DNS resolution: the answer-location decision
//! procedure and the recursive walk it drives. Network and bootstrap
//! collaborators are reached through ports so the walk itself stays
//! independent of wire and transport concerns.

pub mod ports;
pub mod use_cases;

pub use use_cases::IterativeResolver;
