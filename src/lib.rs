//! Tutor Match Engine
//!
//! This crate ranks tutors for a student by combining three explainable
//! sub-scores: subject coverage, level match and weekly availability
//! overlap. It also provides the HTTP service and the spreadsheet import
//! around that core.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod import;
pub mod matching;
pub mod models;
pub mod store;
