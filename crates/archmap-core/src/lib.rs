//! # archmap-core - Static Content and Domain Types
//!
//! Foundation crate for archmap. Provides the node content table, section
//! identifiers, fixed diagram geometry, panel copy, error handling, and
//! logging setup.
//!
//! This crate has **zero internal dependencies** and no terminal dependency;
//! colours are plain [`Rgb`] values that the TUI converts at render time.
//!
//! ## Public API
//!
//! ### Content (`content`)
//! - [`NodeId`] - Closed set of node identifiers
//! - [`NodeRecord`] - Title, description, and feature list of a node
//! - [`ContentTable`] - Immutable `NodeId -> NodeRecord` table
//!
//! ### Sections (`section`)
//! - [`SectionId`] - Closed set of collapsible sections
//! - [`SectionFlags`] - One boolean per section
//!
//! ### Geometry (`diagram`)
//! - [`DiagramNode`], [`Connection`], [`SectionLabel`] - Hardcoded placements
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`], [`ResultExt`]
//!
//! ## Prelude
//!
//! ```rust
//! use archmap_core::prelude::*;
//! ```

pub mod content;
pub mod diagram;
pub mod error;
pub mod logging;
pub mod panels;
pub mod section;

/// Prelude for common imports used throughout all archmap crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use content::{ContentTable, NodeId, NodeRecord};
pub use diagram::{
    Connection, DiagramNode, NodeIcon, Rgb, SectionLabel, SizeClass, CANVAS_HEIGHT, CANVAS_WIDTH,
};
pub use error::{Error, Result, ResultExt};
pub use section::{SectionFlags, SectionId};
