//! Dioxus router, views and shared components for the invitation site.
//!
//! This crate provides:
//! - `route`: the `Route` enum mapping URLs to views
//! - `views`: one component per route (friend list, invitation, ceremony)
//! - `components`: reusable RSX pieces (status screens, cards, links)
//! - `fetch`: `ViewState` and the loaders each view runs on mount
//! - `state`: `AppState` shared through Dioxus context
//! - `copy` / `theme`: user-visible strings and inline styles

pub mod components;
pub mod copy;
pub mod fetch;
pub mod route;
pub mod state;
pub mod theme;
pub mod views;

pub use route::Route;
pub use state::AppState;
