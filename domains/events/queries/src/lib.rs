pub mod list_events;
pub mod normalize;

pub use list_events::{
    ListEventsError, ListEventsQuery, ListEventsQueryHandler, build_filter,
};
pub use normalize::normalize_document;
