//! Shared test fixtures: a small document and instrumented evaluators.

use crate::{
    dom::{Document, ElementRef, TagName},
    select::Evaluator,
};
use std::{cell::RefCell, fmt, rc::Rc};

/// Tag name from a literal known to be valid.
pub(crate) fn tag_name(name: &str) -> TagName {
    TagName::try_from_str(name).unwrap()
}

/// Fixture tree:
///
/// ```text
/// <body>
///   <div>
///     <p class="headline major"><a href="/home">home</a></p>
///   </div>
///   <p>plain</p>
///   <span id="footer">(c) example &amp; co</span>
/// </body>
/// ```
pub(crate) fn fixture_doc() -> Document {
    let mut doc = Document::new(tag_name("body"));
    let root = doc.root_id();

    let div = doc.append_element(root, tag_name("div"));
    let headline = doc.append_element(div, tag_name("p"));
    doc.set_attr(headline, "class", "headline major");
    let link = doc.append_element(headline, tag_name("a"));
    doc.set_attr(link, "href", "/home");
    doc.append_text(link, "home");

    let plain = doc.append_element(root, tag_name("p"));
    doc.append_text(plain, "plain");

    let footer = doc.append_element(root, tag_name("span"));
    doc.set_attr(footer, "id", "footer");
    doc.append_text(footer, "(c) example & co");

    doc
}

///
/// ConstEval
///
/// Fixed-outcome clause for combinator semantics tests. Its selector form
/// carries no class marker.
///

#[derive(Clone, Copy, Debug)]
pub(crate) struct ConstEval(pub(crate) bool);

impl Evaluator for ConstEval {
    fn matches(&self, _scope: ElementRef<'_>, _node: ElementRef<'_>) -> bool {
        self.0
    }
}

impl fmt::Display for ConstEval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

///
/// RecordingEvaluator
///
/// Fixed-outcome clause that appends its label to a shared log on every
/// `matches` call, for asserting evaluation order and short-circuiting.
///

#[derive(Clone)]
pub(crate) struct RecordingEvaluator {
    label: &'static str,
    result: bool,
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl RecordingEvaluator {
    pub(crate) fn new(
        label: &'static str,
        result: bool,
        log: &Rc<RefCell<Vec<&'static str>>>,
    ) -> Self {
        Self {
            label,
            result,
            log: Rc::clone(log),
        }
    }
}

impl Evaluator for RecordingEvaluator {
    fn matches(&self, _scope: ElementRef<'_>, _node: ElementRef<'_>) -> bool {
        self.log.borrow_mut().push(self.label);

        self.result
    }
}

impl fmt::Display for RecordingEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}
