//! Blood donor directory front-end.
//!
//! The crate splits along the target boundary: the domain core (`flow`,
//! `donors`, `validate`, most of `app_lib`) is plain Rust that compiles and
//! tests natively, while everything that touches the browser (the Leptos
//! component tree, the Supabase REST clients, session storage) only exists
//! on `wasm32`. The binary entrypoint in `main.rs` mounts the app on wasm
//! and does nothing elsewhere.

#[cfg(target_arch = "wasm32")]
pub mod app;
pub mod app_lib;
#[cfg(target_arch = "wasm32")]
pub mod components;
pub mod donors;
#[cfg(target_arch = "wasm32")]
pub mod features;
pub mod flow;
#[cfg(target_arch = "wasm32")]
pub mod routes;
pub mod supabase;
pub mod validate;
