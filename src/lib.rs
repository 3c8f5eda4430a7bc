//! # Connect Four
//!
//! A two-player Connect Four game for the terminal, with a YAML-configurable
//! board size and win length. The UI is built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ui`] — Terminal UI: interactive game view
//! - [`config`] — YAML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
