//! Module: select::collect
//! Responsibility: the matching walk over one subtree.
//! Does not own: evaluator semantics.

use crate::{dom::ElementRef, select::evaluator::Evaluator};
use derive_more::{Deref, IntoIterator};

///
/// Selection
///
/// Elements matched by one selection walk, in document order. Read-only
/// view; exposes the slice API through `Deref`.
///

#[derive(Clone, Debug, Deref, Eq, IntoIterator, PartialEq)]
pub struct Selection<'a>(#[into_iterator(owned, ref)] Vec<ElementRef<'a>>);

impl<'a> Selection<'a> {
    /// First matched element, if any.
    #[must_use]
    pub fn first(&self) -> Option<ElementRef<'a>> {
        self.0.first().copied()
    }
}

/// Walk `scope`'s subtree depth-first (the scope element included) and
/// collect every element the evaluator matches, anchored at `scope`.
#[must_use]
pub fn select<'a>(evaluator: &dyn Evaluator, scope: ElementRef<'a>) -> Selection<'a> {
    let matched = scope
        .descendants()
        .filter(|node| evaluator.matches(scope, *node))
        .collect();

    Selection(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        select::{
            combining::Or,
            leaf::{Class, Tag},
        },
        test_fixtures::{fixture_doc, tag_name},
    };
    use std::rc::Rc;

    #[test]
    fn collects_in_document_order() {
        let doc = fixture_doc();
        let selection = select(&Tag::new(tag_name("p")), doc.root());

        assert_eq!(selection.len(), 2);
        let classes: Vec<_> = selection
            .iter()
            .map(|e| e.attr("class").unwrap_or(""))
            .collect();
        assert_eq!(classes, ["headline major", ""]);
    }

    #[test]
    fn scope_element_is_a_candidate() {
        let doc = fixture_doc();
        let selection = select(&Tag::new(tag_name("body")), doc.root());

        assert_eq!(selection.first(), Some(doc.root()));
    }

    #[test]
    fn or_selection_unions_clauses() {
        let doc = fixture_doc();
        let or = Or::new(vec![
            Rc::new(Tag::new(tag_name("a"))),
            Rc::new(Class::new("headline")),
        ]);

        let selection = select(&or, doc.root());
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn empty_selection_iterates_nothing() {
        let doc = fixture_doc();
        let selection = select(&Tag::new(tag_name("table")), doc.root());

        assert!(selection.is_empty());
        assert_eq!(selection.into_iter().count(), 0);
    }
}
