//! # Domain Models
//!
//! Pure types shared by every slice: site configuration, the legal-service
//! catalogue, submission outcomes and the slice registry.
//! Keep it lean: no I/O, networking, or heavy logic, just data and simple helpers.

pub mod config;
pub mod outcome;
pub mod registry;
pub mod service;
