mod render;
pub mod state;

pub use render::{render_event_dialog, EventDialogResult};
pub use state::{EditorMode, EventEditor, SubmitOutcome};
