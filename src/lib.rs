//! EKDKN - session and record management core for the NGO field app.
//!
//! This crate holds the shared logic behind the education, medical and
//! scholarship screens: who is signed in, which areas their role may open,
//! and the authoritative collections of students, patients, scholars and
//! related records.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
