//! # Treescope
//!
//! `treescope` walks a directory up to a depth bound and returns it as a nested
//! tree of [`TreeNode`]s, ready to be serialized as JSON. With the `server`
//! feature it also exposes the walk over HTTP next to a static frontend.
//!
//! The walk never follows failures upward: a directory that cannot be listed
//! gets an `error` on its own node and its siblings are still built. Only a
//! root that cannot be resolved turns the whole result into
//! [`TreeResponse::Error`].
//!
//! # Features
//!
//! - `server` (default): the axum HTTP server, configuration loading and the
//!   `treescope` binary.
//!
//! # Example
//!
//! ```no_run
//! use treescope::{TreeBuilder, TreeResponse};
//!
//! let response = TreeBuilder::new("~/projects")
//!     .max_depth(2)
//!     .show_hidden(false)
//!     .build();
//!
//! match response {
//!     TreeResponse::Node(root) => {
//!         for child in &root.children {
//!             println!("{} ({} bytes)", child.name, child.size);
//!         }
//!     }
//!     TreeResponse::Error { error } => eprintln!("{}", error),
//! }
//! ```

mod engine;
mod error;
mod options;
pub mod output;
pub mod path;
mod tree;
mod types;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use engine::{build_tree, try_build_tree};
pub use error::TreeError;
pub use options::{TreeBuilder, TreeOptions};
pub use types::{NodeKind, TreeNode, TreeResponse};
