/*!
Configuration of a context.

All configuration for a context is contained within its [Config], fixed when the context is created.
Inference is deterministic for a fixed configuration: the same knowledge base and query always yield the same result, literal for literal.
*/

mod worklist;
pub use worklist::WorklistOrder;

use serde::{Deserialize, Serialize};

/// The primary configuration structure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// The order in which clauses are taken from the propagation worklist.
    pub worklist_order: WorklistOrder,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            worklist_order: WorklistOrder::Fifo,
        }
    }
}
