//! Items not related to the Horn procedures, directly.

pub mod log;
