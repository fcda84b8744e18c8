//! Admin Shell
//!
//! Responsive navigation shell for an e-commerce admin panel.
//!
//! This library provides:
//! - The navigation registry and its permission filter (`nav`)
//! - Session data shared by server and client (`session`)
//! - Web UI: desktop sidebar and mobile drawer (Dioxus + Tailwind CSS)
//! - Session API and configuration (server only)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Navigation model and session types (shared)
pub mod nav;
pub mod session;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
