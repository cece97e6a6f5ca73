//! Module: select
//! Responsibility: selector evaluators and the matching walk.
//! Does not own: document storage or serialization.
//! Boundary: everything that decides whether an element matches a selector.

mod collect;
mod combining;
mod evaluator;
mod leaf;
mod structural;

pub use collect::{Selection, select};
pub use combining::{And, Or};
pub use evaluator::Evaluator;
pub use leaf::{AnyElement, Attribute, AttributeWithValue, Class, Id, Tag};
pub use structural::{Ancestor, ImmediateParent};
