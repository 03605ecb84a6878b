//! # Hiretui - Hiring Pipeline TUI Dashboard
//!
//! A terminal dashboard for the HireTrack hiring platform, built with Rust and
//! Ratatui. It renders aggregate statistics (resumes, jobs, hiring processes,
//! meetings, applications) fetched from the platform's summary endpoint, plus a
//! landing view for signed-out sessions.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): Application state
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects (network fetches, logging)
//! - **View** (`presentation`): Stateless rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use hiretui::core::{msg::{ui::UiMsg, Msg}, state::AppState, update::update};
//! use hiretui::domain::route::Route;
//!
//! // Initialize state (signed-out session)
//! let initial_state = AppState::default();
//!
//! // Process messages
//! let (new_state, commands) = update(Msg::Ui(UiMsg::Navigate(Route::Dashboard)), initial_state);
//!
//! // Entering the dashboard issues exactly one fetch command
//! assert_eq!(new_state.ui.route, Route::Dashboard);
//! assert_eq!(commands.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, commands and the pure update cycle
//! - [`domain`] - Overview record, status/badge mappings, formatting helpers
//! - [`infrastructure`] - TUI foundation, config, CLI, HTTP overview service
//! - [`integration`] - Runtime and application runner
//! - [`presentation`] - Components and widgets
//! - [`utils`] - Logging, panic handling, path management

#![deny(warnings)]

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
