// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Scroll-driven 3D scene built on wgpu.
//!
//! Three toon-shaded shapes sit one viewport-height apart down a scrollable
//! page. Scrolling moves the camera through them, crossing into a new
//! section kicks that section's shape into a spin, the cursor drives a
//! smoothed camera parallax, and the scroll fraction tints the shared
//! material.
//!
//! # Key entry points
//!
//! - [`engine::AnimationState`] - all mutable scene state plus the event
//!   handlers and the per-frame step
//! - [`engine::SceneLoop`] - single-threaded queue of [`SceneEvent`]s that
//!   drives an [`AnimationState`](engine::AnimationState) against a
//!   [`Renderer`](renderer::Renderer)
//! - [`scene::builder`] - constructs meshes, particles, light, material
//! - [`options::Options`] - runtime configuration with TOML preset support
//! - `Viewer` (feature `viewer`) - standalone winit window
//!
//! # Architecture
//!
//! Everything that decides *what* the scene looks like is platform-free and
//! runs headless: the event loop takes an injected [`util::clock::Clock`]
//! and any [`renderer::Renderer`], so the whole animation can be stepped in
//! tests with a manual clock and a recording renderer. The wgpu renderer in
//! [`renderer::gpu`] and the winit host in `viewer` are thin adapters over
//! that core.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
mod viewer;

pub use engine::{AnimationState, SceneLoop};
pub use error::ScrollscapeError;
pub use input::SceneEvent;
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
