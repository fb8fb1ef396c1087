//! # roll-forms
//!
//! Form state for exactly one entity type at a time:
//! - [`FormStore`]: values, per-field errors, validity, and mode, driven by
//!   a [`roll_schema::SchemaConfig`]
//! - [`EditDialog`]: the modal create/update surface state machine
//! - [`PreviewCard`]: the inline read/edit card over a selected record
//!
//! Everything here is synchronous and side-effect-free; network submission
//! belongs to the caller, which feeds the outcome back into the surface.

pub mod dialog;
pub mod preview;
pub mod store;

pub use dialog::{DialogState, EditDialog, SubmitAction};
pub use preview::PreviewCard;
pub use store::FormStore;
