pub mod event_types;
pub mod events;

pub use event_types::EventType;
pub use events::{EVENT_COLLECTION, NewEvent};
