mod dialog_context;
mod dialog_type;

pub use dialog_context::DialogContext;
pub use dialog_type::DialogType;
