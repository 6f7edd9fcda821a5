//! genenet-web — Web dashboard for gene interaction networks.
//! Provides:
//!   - Gene list input and STRING network retrieval
//!   - Force-directed network drawing and edge export
//!   - Links out to GeneMANIA, GIANT, Pathway Commons and friends
//!   - Per-session tool evaluation table with CSV export

pub mod router;
pub mod handlers;
pub mod network;
pub mod render;
pub mod session;
pub mod state;
