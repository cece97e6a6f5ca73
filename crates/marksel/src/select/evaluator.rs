use crate::dom::ElementRef;
use std::{fmt, rc::Rc};

///
/// Evaluator
///
/// Predicate capability: does `node` satisfy one selector clause, relative
/// to the `scope` element the selection was anchored at?
///
/// Evaluator trees follow a single-writer-then-many-readers discipline:
/// they are assembled (and possibly rewritten) during selector construction,
/// then treated as read-only for the whole matching phase. Children are
/// shared as `Rc<dyn Evaluator>`, which keeps trees deliberately `!Send`.
///
/// The `Display` form is the clause's selector representation; combining
/// evaluators derive their own representation from it.
///

pub trait Evaluator: fmt::Display {
    /// Test one candidate element against this clause.
    fn matches(&self, scope: ElementRef<'_>, node: ElementRef<'_>) -> bool;

    /// Fold another evaluator onto this one, yielding the evaluator the
    /// accumulated chain should carry for the pair.
    ///
    /// The default (and every implementation in this crate) returns `next`
    /// unchanged: the receiver contributes nothing to the fold. That makes
    /// every accumulated-chain entry collapse to the chain's seed clause.
    /// TODO: decide whether `append` should produce a genuine conjunction of
    /// the pair before any new evaluator relies on the chain.
    fn append(&self, next: Rc<dyn Evaluator>) -> Rc<dyn Evaluator> {
        next
    }
}
