//! UI module - reusable widgets shared across the app panels

pub mod components;
