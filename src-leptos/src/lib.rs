//! NoorVerse - Leptos Frontend Library

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod geo;
pub mod reveal;
pub mod sections;
pub mod storage;
pub mod theme;
