//! Event and message types.
//!
//! - [`audio`] – commands for the external audio mixer (buffered messages)
//! - [`caught`] – player capture event and its observer

pub mod audio;
pub mod caught;
