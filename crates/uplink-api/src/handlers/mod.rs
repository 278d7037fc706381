//! Request handlers for the three-phase upload protocol.

pub mod complete;
pub mod initiate;
pub mod sign_part;
