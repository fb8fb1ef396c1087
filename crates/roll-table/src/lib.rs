//! # roll-table
//!
//! The generic data table: renders any record collection from its column
//! descriptors into a [`TableView`] a front end can draw. Handles
//! filtering, sorting, pagination, column visibility, the permission-gated
//! actions cell, the loading skeleton, and the delete confirmation flow.

pub mod confirm;
pub mod permissions;
pub mod view;

pub use confirm::DeleteConfirm;
pub use permissions::{Permissions, Viewer};
pub use view::{RowActions, RowView, SKELETON_ROWS, SortDir, TableState, TableView, build_view};
