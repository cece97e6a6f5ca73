//! Module: select::combining
//! Responsibility: the `And`/`Or` combining evaluators and their shared
//! clause-list state.
//! Does not own: primitive clause semantics or document traversal.
//! Boundary: all boolean composition of selector clauses.
//!
//! Invariants:
//! - The cached clause count equals the clause vector's length after every
//!   mutation; every mutation routes through `update_len`.
//! - Mutation (`Or::add`, right-most replacement) happens only while the
//!   selector tree is being assembled; matching treats the tree as frozen.
//! - Contract violations (right-most replacement on an empty list) fail
//!   loudly via index panics, never silently.


use crate::{dom::ElementRef, select::evaluator::Evaluator};
use std::{fmt, rc::Rc};

/// Character that marks a class clause in a selector's string form.
const CLASS_MARKER: char = '.';

///
/// EvaluatorList
///
/// Ordered clause sequence shared by the combining evaluators, plus a count
/// cached off the vector length so match loops don't re-query it.
///

#[derive(Clone, Default)]
pub(crate) struct EvaluatorList {
    evaluators: Vec<Rc<dyn Evaluator>>,
    len: usize,
}

impl EvaluatorList {
    fn new(evaluators: Vec<Rc<dyn Evaluator>>) -> Self {
        let len = evaluators.len();

        Self { evaluators, len }
    }

    /// Cached clause count.
    #[must_use]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Last clause in selector order, or `None` when empty.
    #[must_use]
    pub(crate) fn rightmost(&self) -> Option<&Rc<dyn Evaluator>> {
        if self.len > 0 {
            Some(&self.evaluators[self.len - 1])
        } else {
            None
        }
    }

    /// Overwrite the last clause in place.
    ///
    /// Calling this on an empty list is a caller contract violation and
    /// panics.
    pub(crate) fn replace_rightmost(&mut self, replacement: Rc<dyn Evaluator>) {
        self.evaluators[self.len - 1] = replacement;
    }

    /// Iterate clauses in selector order.
    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Rc<dyn Evaluator>> {
        self.evaluators.iter()
    }

    fn push(&mut self, evaluator: Rc<dyn Evaluator>) {
        self.evaluators.push(evaluator);
        self.update_len();
    }

    fn update_len(&mut self) {
        self.len = self.evaluators.len();
    }
}

impl fmt::Debug for EvaluatorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.evaluators.iter().map(ToString::to_string))
            .finish()
    }
}

///
/// And
///
/// Conjunctive combining evaluator, in name: the match loop stops at the
/// first clause that matches while scanning right to left, so the composed
/// result is a union over the clauses rather than an intersection. Tests
/// lock that behavior; do not tighten it without a semantics decision.
///

#[derive(Clone)]
pub struct And {
    clauses: EvaluatorList,
    // True when any clause's string form carries a class marker. Computed at
    // construction and on right-most replacement, never at match time.
    class_qualified: bool,
}

impl And {
    #[must_use]
    pub fn new(evaluators: Vec<Rc<dyn Evaluator>>) -> Self {
        let clauses = EvaluatorList::new(evaluators);
        let class_qualified = is_class_qualified(&clauses);

        Self {
            clauses,
            class_qualified,
        }
    }

    /// Cached clause count.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.clauses.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Last clause in selector order, or `None` when empty.
    #[must_use]
    pub fn rightmost(&self) -> Option<&Rc<dyn Evaluator>> {
        self.clauses.rightmost()
    }

    /// Overwrite the last clause in place; panics when empty.
    pub fn replace_rightmost(&mut self, replacement: Rc<dyn Evaluator>) {
        self.clauses.replace_rightmost(replacement);
        self.class_qualified = is_class_qualified(&self.clauses);
    }

    #[cfg(test)]
    pub(crate) const fn class_qualified(&self) -> bool {
        self.class_qualified
    }
}

impl Evaluator for And {
    fn matches(&self, scope: ElementRef<'_>, node: ElementRef<'_>) -> bool {
        let num = self.clauses.len();

        // For class-qualified clause sets, fold the clauses backwards into an
        // accumulated chain: one entry per position, ordered from the last
        // clause back to the first. With `append` returning its argument,
        // every entry collapses to the last clause.
        let mut accumulated: Vec<Rc<dyn Evaluator>> = Vec::new();
        if self.class_qualified {
            accumulated.push(Rc::clone(&self.clauses.evaluators[num - 1]));
            for i in (0..num - 1).rev() {
                let clause = &self.clauses.evaluators[i];
                let last = Rc::clone(&accumulated[accumulated.len() - 1]);
                accumulated.push(clause.append(last));
            }
        }

        // Process backwards so lookahead clauses (ones that peek at content
        // ahead of the current structural position) resolve before earlier
        // clauses run.
        //
        // NOTE: succeeding on the *first* clause that matches makes this a
        // union over the clauses, and the accumulated chain is indexed by
        // clause position even though it was pushed in reverse order. Both
        // are locked by regression tests.
        for i in (0..num).rev() {
            let clause = &self.clauses.evaluators[i];
            if clause.matches(scope, node) {
                return true;
            }
            if let Some(chained) = accumulated.get(i) {
                if chained.matches(scope, node) {
                    return true;
                }
            }
        }

        false
    }

    // Identity stub: the receiver's clauses do not fold into the result.
    fn append(&self, next: Rc<dyn Evaluator>) -> Rc<dyn Evaluator> {
        next
    }
}

impl fmt::Display for And {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for clause in self.clauses.iter() {
            write!(f, "{clause}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for And {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("And")
            .field("clauses", &self.clauses)
            .field("class_qualified", &self.class_qualified)
            .finish()
    }
}

///
/// Or
///
/// Disjunctive combining evaluator: strict left-to-right scan with
/// short-circuit on the first matching clause.
///

#[derive(Clone, Default)]
pub struct Or {
    clauses: EvaluatorList,
}

impl Or {
    /// Build from an initial clause collection.
    #[must_use]
    pub fn new(evaluators: Vec<Rc<dyn Evaluator>>) -> Self {
        let mut clauses = EvaluatorList::default();

        // NOTE: this reads the count of the instance under construction,
        // which is always zero, so the And-wrapping arm never runs and every
        // initial clause lands unwrapped. Latent defect kept as-is; tests
        // pin the unwrapped outcome.
        if clauses.len() > 1 {
            clauses.push(Rc::new(And::new(evaluators)));
        } else {
            for evaluator in evaluators {
                clauses.evaluators.push(evaluator);
            }
            clauses.update_len();
        }

        Self { clauses }
    }

    /// Append one clause; it is immediately eligible for matching.
    pub fn add(&mut self, evaluator: Rc<dyn Evaluator>) {
        self.clauses.push(evaluator);
    }

    /// Cached clause count.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.clauses.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Last clause in selector order, or `None` when empty.
    #[must_use]
    pub fn rightmost(&self) -> Option<&Rc<dyn Evaluator>> {
        self.clauses.rightmost()
    }

    /// Overwrite the last clause in place; panics when empty.
    pub fn replace_rightmost(&mut self, replacement: Rc<dyn Evaluator>) {
        self.clauses.replace_rightmost(replacement);
    }
}

impl Evaluator for Or {
    fn matches(&self, scope: ElementRef<'_>, node: ElementRef<'_>) -> bool {
        for i in 0..self.clauses.len() {
            if self.clauses.evaluators[i].matches(scope, node) {
                return true;
            }
        }

        false
    }

    // Identity stub, same contract as `And::append`.
    fn append(&self, next: Rc<dyn Evaluator>) -> Rc<dyn Evaluator> {
        next
    }
}

impl fmt::Display for Or {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{clause}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Or {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Or").field("clauses", &self.clauses).finish()
    }
}

// A clause set is class-qualified when any clause's selector form mentions a
// class. String-form sniffing mirrors how class clauses print (".name"), so
// attribute values containing '.' also qualify; acceptable over-approximation.
fn is_class_qualified(clauses: &EvaluatorList) -> bool {
    clauses
        .iter()
        .any(|clause| clause.to_string().contains(CLASS_MARKER))
}
