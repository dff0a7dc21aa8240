//! Critique View-Model Library
//!
//! Pure projections from typed REST payloads (`critique-api-types`) to the
//! view state the rendering layer consumes: the merged header navigation,
//! reviewer lists, download commands, access rule listings, and the
//! registration action. Every function here is a total, synchronous
//! function of its inputs — no ambient configuration, no hidden state, safe
//! to recompute on every payload refresh.

pub mod access;
pub mod auth;
pub mod download;
pub mod menu;
pub mod reviewer;
