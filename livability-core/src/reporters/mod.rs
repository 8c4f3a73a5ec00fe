//! The reporters fetch one kind of data each and render it into
//! their own display regions.
//!
//! A reporter never fails: transport errors are logged and rendered
//! as a static message. Every reporter discards responses of requests
//! that have been superseded by a more recent one.

mod alternatives;
mod livability;
mod prediction;

pub use self::{alternatives::*, livability::*, prediction::*};
