// SPDX-License-Identifier: MPL-2.0

//! Processing pipelines for capture
//!
//! The booth only needs stills. Heavy work runs in blocking tasks so the
//! caller's event loop keeps going while a frame is resized and encoded.
//!
//! # Pipeline Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────────┐     ┌──────────────────┐
//! │ Camera Frame │ ──▶ │  Still Pipeline   │ ──▶ │  JPEG data URL   │
//! │   (RGBA)     │     │  - Fit 800×800    │     │  (photo payload) │
//! │              │     │  - Mirror         │     │                  │
//! │              │     │  - JPEG encode    │     │                  │
//! └──────────────┘     └───────────────────┘     └──────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`photo`]: still capture, post-processing and encoding

pub mod photo;
