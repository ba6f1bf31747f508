/*!
Procedures to transform a context in some way.

- [Propagation](propagation), the worklist fixpoint establishing everything unit resolution forces.
- [Refinement](refinement), closing the assignment against the clause sets and extracting minimal inconsistent pairs.
*/

pub mod propagation;
pub mod refinement;
