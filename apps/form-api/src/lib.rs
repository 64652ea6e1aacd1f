//! # Form API library
//!
//! Core modules of the form relay server. The binary in `main.rs` only loads
//! configuration, builds the email backend and serves the router returned by
//! [`app_builder::build_app`].
//!
//! ## Modules
//!
//! - `app_builder`: router and middleware stack
//! - `config`: environment-driven settings
//! - `error`: API error type and its HTTP mapping
//! - `handler`: HTTP handlers
//! - `middleware`: response header middleware
//! - `usecase`: render → dispatch flow for accepted submissions

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod usecase;
