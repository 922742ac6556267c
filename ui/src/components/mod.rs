//! Shared components for the app. Components are the building blocks of
//! dioxus apps; the ones here are the generic pieces the screens compose.

pub mod empty_state;
pub mod pico;
