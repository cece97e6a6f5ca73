//! Module: select::leaf
//! Responsibility: primitive one-element predicates.
//! Does not own: boolean composition or tree navigation.
//!
//! All leaves inherit the default `append` (returns the argument).

use crate::{
    dom::{ElementRef, TagName},
    select::evaluator::Evaluator,
};
use std::fmt;

///
/// Tag
///
/// Matches elements by (lowercase-normalized) tag name.
///

#[derive(Clone, Debug)]
pub struct Tag(TagName);

impl Tag {
    #[must_use]
    pub const fn new(name: TagName) -> Self {
        Self(name)
    }
}

impl Evaluator for Tag {
    fn matches(&self, _scope: ElementRef<'_>, node: ElementRef<'_>) -> bool {
        node.tag_name() == self.0.as_str()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

///
/// Class
///
/// Matches elements carrying one class name. Its selector form (".name") is
/// what makes a clause set class-qualified.
///

#[derive(Clone, Debug)]
pub struct Class(String);

impl Class {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl Evaluator for Class {
    fn matches(&self, _scope: ElementRef<'_>, node: ElementRef<'_>) -> bool {
        node.has_class(&self.0)
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.0)
    }
}

///
/// Id
///

#[derive(Clone, Debug)]
pub struct Id(String);

impl Id {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl Evaluator for Id {
    fn matches(&self, _scope: ElementRef<'_>, node: ElementRef<'_>) -> bool {
        node.attr("id") == Some(self.0.as_str())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

///
/// Attribute
///
/// Matches elements where the attribute is present, whatever its value.
///

#[derive(Clone, Debug)]
pub struct Attribute(String);

impl Attribute {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl Evaluator for Attribute {
    fn matches(&self, _scope: ElementRef<'_>, node: ElementRef<'_>) -> bool {
        node.has_attr(&self.0)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

///
/// AttributeWithValue
///

#[derive(Clone, Debug)]
pub struct AttributeWithValue {
    key: String,
    value: String,
}

impl AttributeWithValue {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Evaluator for AttributeWithValue {
    fn matches(&self, _scope: ElementRef<'_>, node: ElementRef<'_>) -> bool {
        node.attr(&self.key) == Some(self.value.as_str())
    }
}

impl fmt::Display for AttributeWithValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}={}]", self.key, self.value)
    }
}

///
/// AnyElement
///

#[derive(Clone, Copy, Debug, Default)]
pub struct AnyElement;

impl Evaluator for AnyElement {
    fn matches(&self, _scope: ElementRef<'_>, _node: ElementRef<'_>) -> bool {
        true
    }
}

impl fmt::Display for AnyElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::fixture_doc;

    #[test]
    fn tag_matches_case_normalized_name() {
        let doc = fixture_doc();
        let scope = doc.root();
        let tag = Tag::new(TagName::try_from_str("DIV").unwrap());

        let div = doc.root().descendants().find(|e| e.tag_name() == "div");
        assert!(tag.matches(scope, div.unwrap()));
        assert!(!tag.matches(scope, scope));
    }

    #[test]
    fn class_matches_whitespace_split_list() {
        let doc = fixture_doc();
        let scope = doc.root();
        let node = doc
            .root()
            .descendants()
            .find(|e| e.has_attr("class"))
            .unwrap();

        assert!(Class::new("headline").matches(scope, node));
        assert!(Class::new("major").matches(scope, node));
        assert!(!Class::new("head").matches(scope, node));
    }

    #[test]
    fn attribute_presence_and_value() {
        let doc = fixture_doc();
        let scope = doc.root();
        let link = doc
            .root()
            .descendants()
            .find(|e| e.tag_name() == "a")
            .unwrap();

        assert!(Attribute::new("href").matches(scope, link));
        assert!(AttributeWithValue::new("href", "/home").matches(scope, link));
        assert!(!AttributeWithValue::new("href", "/away").matches(scope, link));
    }

    #[test]
    fn selector_forms() {
        assert_eq!(Tag::new(TagName::try_from_str("p").unwrap()).to_string(), "p");
        assert_eq!(Class::new("major").to_string(), ".major");
        assert_eq!(Id::new("main").to_string(), "#main");
        assert_eq!(Attribute::new("href").to_string(), "[href]");
        assert_eq!(
            AttributeWithValue::new("href", "/home").to_string(),
            "[href=/home]"
        );
        assert_eq!(AnyElement.to_string(), "*");
    }
}
