//! Form domain layer
//!
//! Per-form configuration, field model, validation and the submission
//! pipeline. The pipeline only emits directives; `FormState` applies them.

mod button;
mod config;
mod field;
mod form_state;
mod notification;
mod pipeline;
pub mod presets;
mod record;
mod validation;

pub use button::SubmitButton;
pub use config::FormConfigError;
pub use field::{FieldKind, FormField};
pub use form_state::{Form, FormKind, FormState, SendRequest};
pub use notification::{Notification, NotificationKind};
pub use pipeline::{PipelineState, SubmissionResult};
pub use record::FieldRecord;
