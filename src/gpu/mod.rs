//! GPU resource management utilities.
//!
//! Device and surface setup, bind group layout shorthands, and the small
//! set of textures the renderer owns (depth target, toon gradient).

/// Bind group layout entries, samplers, and pipeline construction.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Depth target and gradient lookup textures.
pub mod texture;
