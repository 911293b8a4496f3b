pub mod create_event;

pub use create_event::{
    CreateEventCommand, CreateEventError, CreateEventHandler,
};
