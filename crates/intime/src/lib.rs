//! Submission lifecycle and application state for the InTime staffing workspace.
//!
//! The crate is organised around one explicit [`store::AppStore`] shared by handle. The
//! submission workflow reads and replaces records in it; the HTTP router and CLI in
//! `intime-api` sit on top.

pub mod config;
pub mod error;
pub mod store;
pub mod telemetry;
pub mod workflows;
