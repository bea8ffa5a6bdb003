//! Filesystem-shaped tree values and the diagram renderer.
//!
//! [`TreeNode`] is the single data type shared by every component: the
//! renderer consumes it read-only, the builder produces it from a real
//! directory, and the materializer writes it back out as empty files and
//! directories.

mod builder;
mod materializer;
mod node;
mod render;

pub use builder::{TreeBuildError, TreeBuilder};
pub use materializer::materialize;
pub use node::TreeNode;
pub use render::{RenderError, render, render_forest};
