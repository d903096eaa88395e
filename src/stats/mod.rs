//! Real-time statistics tracking and monitoring module.
//!
//! This module provides atomic counters for tracking all index activity,
//! enabling real-time monitoring through the console logger and the REST API.
//!
//! # Statistics Categories
//!
//! ## Store Metrics
//! - Torrent counts and pending persistence updates
//! - User counts and pending persistence updates
//! - Forum, thread and post counts and pending persistence updates
//!
//! ## Activity Metrics
//! - Searches and lucky searches served
//! - Download counter increments
//! - Torrent uploads accepted and rejected
//! - Registrations, logins and failed logins
//!
//! ## API Metrics
//! - Requests served, not-found responses, failures, unauthorized attempts
//!
//! # Thread Safety
//!
//! All statistics are stored as atomic integers, allowing safe concurrent
//! updates from multiple worker threads without locking overhead.
//!
//! # Monitoring Integration
//!
//! - Periodic `[STATS]` console lines driven by `log_console_interval`
//! - JSON format via the `/api/stats` endpoint
//!
//! # Example
//!
//! ```rust,ignore
//! use harbor_actix::stats::enums::stats_event::StatsEvent;
//!
//! // Update statistics
//! index.update_stats(StatsEvent::SearchesHandled, 1);
//!
//! // Read statistics
//! let stats = index.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;

/// Unit tests for statistics functionality.
pub mod tests;
