use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Variant orders in which to take clauses from the propagation worklist.
///
/// Propagation closes under unit resolution regardless of order, so the final assignment is order-independent.
/// The order only varies which intermediate states are passed through, which matters for reproducing a trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorklistOrder {
    /// Clauses are taken oldest first.
    Fifo,

    /// Clauses are taken newest first.
    Lifo,
}

impl std::fmt::Display for WorklistOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fifo => write!(f, "FIFO"),
            Self::Lifo => write!(f, "LIFO"),
        }
    }
}

impl FromStr for WorklistOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FIFO" => Ok(Self::Fifo),
            "LIFO" => Ok(Self::Lifo),
            _ => Err(()),
        }
    }
}
