//! # recordr core
//!
//! * [`validator`]: pure field checks that gate persistence.
//! * [`store`]: the record store port and its flat-file adapter.
//! * [`intake`]: the use case that turns one input line into a stored record.

pub mod intake;
pub mod store;
pub mod validator;
