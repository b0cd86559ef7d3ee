//! Shared utilities for the pagegen CLI.

pub mod actions;
