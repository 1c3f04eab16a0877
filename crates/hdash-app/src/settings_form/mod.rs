//! Settings form controller
//!
//! - `fields`: form fields, their defaults and the per-app [`PanelSpec`]
//! - `snapshot`: the loaded baseline each app's controls are compared against
//! - `form`: live control values, change detection and save payloads

pub mod fields;
pub mod form;
pub mod snapshot;

pub use fields::{FieldGroup, FieldKind, FormField, PanelSpec};
pub use form::{lenient_int, ConnectionStatus, EditBuffer, FieldInput, FormValues, SettingsForm};
pub use snapshot::{FieldValue, SettingsSnapshot};
