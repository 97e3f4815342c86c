//! Host side of the resume matcher page: an in-memory document driven by
//! synthetic user events and a deterministic clock.
pub mod platform;
