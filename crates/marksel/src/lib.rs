//! Structural selector matching over a lightweight markup tree: a document
//! arena, primitive predicate evaluators, and the combining evaluators that
//! compose them, plus the selection walk exported via the `prelude`.
#![warn(unreachable_pub)]

pub mod dom;
pub mod select;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, builders, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        dom::{Document, ElementRef, NodeId, TagName},
        select::{And, Evaluator, Or, Selection, select},
    };
}
