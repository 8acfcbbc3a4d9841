//! # nameguard
//!
//! `nameguard` screens candidate usernames during account creation and
//! renames. It rejects names that collide with an existing user-group's
//! display name (exactly, as a leading prefix, or after transliteration
//! and deaccenting) and names that begin with `[`, which the host
//! platform reserves for username tagging.

pub mod config;
pub mod error;
pub mod models;
pub mod normalization;
pub mod username_validation;
