//! Power Menu Library
//!
//! A small popup listing power actions. Clicking one writes its label to a
//! well-known file and exits; closing the window exits without writing.
//! Acting on the choice is left to whatever watches that file.

pub mod config;
pub mod gui;
pub mod layout;
pub mod result_file;
pub mod session;
