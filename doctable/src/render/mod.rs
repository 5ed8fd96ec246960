//! Renderer module.

pub mod html;
