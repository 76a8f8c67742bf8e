// Public API exports
pub mod config;
pub mod domain;
pub mod shared;

// Presentation layer (Dioxus components and hooks glue)
pub mod app;
