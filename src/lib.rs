// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod error;
pub mod gui;
pub mod loader;
pub mod model;
pub mod outlet;
pub mod view;
pub mod viewer;
