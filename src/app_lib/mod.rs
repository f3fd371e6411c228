//! Shared frontend utilities: configuration, the application error type,
//! HTTP helpers, and build metadata. Centralizing these keeps network
//! behavior consistent across the Supabase clients and out of view code.
//! The anon key these helpers attach is a public client credential; no
//! secrets live here.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;

pub use errors::AppError;
