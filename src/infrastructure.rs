//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation (real and test backends)
//! - CLI argument processing
//! - File-based configuration
//! - HTTP overview fetches in a background task

pub mod api;
pub mod cli;
pub mod config;
pub mod overview_service;
pub mod tui;
