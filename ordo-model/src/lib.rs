//! Entity kinds for Ordo.
//!
//! Defines the concrete collections the client keeps ordered:
//! - [`Project`]: hierarchical project tree
//! - [`Task`]: hierarchical tasks within a project
//! - [`Label`]: flat, user-ordered labels
//! - [`Filter`]: flat, user-ordered saved filters
//! - [`SharedProject`]: collaboration projects, hierarchical
//!
//! Each kind implements [`ordo_order::Ordered`] (and
//! [`ordo_order::Hierarchical`] where it nests) and comes with a patch type
//! for partial updates. JSON uses the remote store's camelCase shape, with
//! the order key on the wire as `generalOrder`.

mod filter;
mod kind;
mod label;
mod project;
mod shared;
mod task;

pub use filter::{Filter, FilterPatch};
pub use kind::{EntityKind, Kinded};
pub use label::{Label, LabelPatch};
pub use project::{Project, ProjectPatch};
pub use shared::{SharedProject, SharedProjectPatch};
pub use task::{Task, TaskPatch};
