//! Statistics enumerations.

/// Events that update a specific statistics counter.
pub mod stats_event;
