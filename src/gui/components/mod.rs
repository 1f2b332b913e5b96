// src/gui/components/mod.rs
pub mod card;
pub mod header;
pub mod notice;
pub mod tabs;
