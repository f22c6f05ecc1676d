//! # Connect Four
//!
//! A Connect Four rules engine with undo and reset, driven either by a
//! terminal UI built with Ratatui or by a line-oriented headless loop.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, engine state machine
//! - [`headless`] — Command parsing and the stdin/stdout game loop
//! - [`ui`] — Terminal UI and plain-text board rendering
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod headless;
pub mod ui;
