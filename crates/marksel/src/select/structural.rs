//! Module: select::structural
//! Responsibility: relational wrappers produced when a selector builder
//! splices ancestry requirements onto the right-most clause of a combinator.
//! Does not own: the clause being wrapped.

use crate::{dom::ElementRef, select::evaluator::Evaluator};
use std::{fmt, rc::Rc};

///
/// Ancestor
///
/// True when any proper ancestor of the candidate matches the inner clause.
/// The walk checks every ancestor up to the tree root; the scope element is
/// eligible like any other ancestor, but the candidate itself is not.
///

#[derive(Clone)]
pub struct Ancestor(Rc<dyn Evaluator>);

impl Ancestor {
    #[must_use]
    pub fn new(inner: Rc<dyn Evaluator>) -> Self {
        Self(inner)
    }
}

impl Evaluator for Ancestor {
    fn matches(&self, scope: ElementRef<'_>, node: ElementRef<'_>) -> bool {
        let mut current = node.parent();
        while let Some(ancestor) = current {
            if self.0.matches(scope, ancestor) {
                return true;
            }
            current = ancestor.parent();
        }

        false
    }
}

impl fmt::Display for Ancestor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.0)
    }
}

impl fmt::Debug for Ancestor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ancestor").field(&self.0.to_string()).finish()
    }
}

///
/// ImmediateParent
///
/// True when the candidate's direct parent matches the inner clause.
///

#[derive(Clone)]
pub struct ImmediateParent(Rc<dyn Evaluator>);

impl ImmediateParent {
    #[must_use]
    pub fn new(inner: Rc<dyn Evaluator>) -> Self {
        Self(inner)
    }
}

impl Evaluator for ImmediateParent {
    fn matches(&self, scope: ElementRef<'_>, node: ElementRef<'_>) -> bool {
        node.parent()
            .is_some_and(|parent| self.0.matches(scope, parent))
    }
}

impl fmt::Display for ImmediateParent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} > ", self.0)
    }
}

impl fmt::Debug for ImmediateParent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ImmediateParent")
            .field(&self.0.to_string())
            .finish()
    }
}
