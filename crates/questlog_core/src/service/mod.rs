//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate task mutations, progression awards and streak updates
//!   behind one coordinating facade.
//! - Keep web/transport layers decoupled from persistence details.

pub mod tracker_service;
