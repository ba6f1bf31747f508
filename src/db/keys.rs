/*!
Keys to access clauses stored in the clause database.

Keys are slotmap keys, so they are cheap to copy, hashable, and versioned --- a key outliving the clause it pointed to cannot silently alias a later clause.
Keys double as the edge labels of the [implication graph](crate::structures::implication_graph), tying each edge back to the clause it encodes.
*/

slotmap::new_key_type! {
    /// A key to a clause stored in the clause database.
    pub struct ClauseKey;
}
