// SPDX-License-Identifier: MPL-2.0
//! The CSS selector subset used by page markers.
//!
//! Supported syntax is deliberately small: type selectors (`img`), class
//! selectors (`.arrow.left`), compounds of both (`img.fade-in`), the descendant
//! combinator (whitespace) and the child combinator (`>`). Anything else is
//! rejected at parse time so a typo in a configured marker fails loudly at
//! setup instead of silently matching nothing.

use crate::error::{Error, Result};
use std::fmt;

/// Relationship between two adjacent compounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// `a b`: `b` anywhere below `a`.
    Descendant,
    /// `a > b`: `b` directly below `a`.
    Child,
}

/// One compound selector: an optional type plus any number of classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn is_empty(&self) -> bool {
        self.tag.is_none() && self.classes.is_empty()
    }

    fn matches<T: ElementTree>(&self, tree: &T, id: T::Id) -> bool {
        if let Some(tag) = &self.tag {
            if !tree.tag_name(id).eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        self.classes.iter().all(|class| tree.has_class(id, class))
    }
}

/// Read access to an element tree, enough to evaluate a [`Selector`].
pub trait ElementTree {
    type Id: Copy;

    fn tag_name(&self, id: Self::Id) -> &str;
    fn has_class(&self, id: Self::Id, class: &str) -> bool;
    fn parent_element(&self, id: Self::Id) -> Option<Self::Id>;
}

/// A parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    head: Compound,
    tail: Vec<(Combinator, Compound)>,
}

impl Selector {
    /// Parses a selector from the supported subset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Selector`] for empty input, dangling combinators, empty
    /// class names and any syntax outside the subset (ids, attributes,
    /// pseudo-classes, sibling combinators, selector lists, `*`).
    pub fn parse(input: &str) -> Result<Self> {
        let fail = |reason: &'static str| Error::Selector {
            selector: input.to_string(),
            reason,
        };

        let mut compounds: Vec<Compound> = Vec::new();
        let mut combinators: Vec<Combinator> = Vec::new();
        let mut current = Compound::default();
        let mut pending: Option<Combinator> = None;
        let mut chars = input.trim().chars().peekable();

        if chars.peek().is_none() {
            return Err(fail("empty selector"));
        }

        while let Some(c) = chars.next() {
            match c {
                c if c.is_whitespace() || c == '>' => {
                    if !current.is_empty() {
                        compounds.push(std::mem::take(&mut current));
                        pending = Some(Combinator::Descendant);
                    } else if compounds.is_empty() {
                        return Err(fail("selector starts with a combinator"));
                    }
                    if c == '>' {
                        if pending == Some(Combinator::Child) {
                            return Err(fail("dangling combinator"));
                        }
                        pending = Some(Combinator::Child);
                    }
                }
                '.' => {
                    let name = take_ident(&mut chars);
                    if name.is_empty() {
                        return Err(fail("empty class name"));
                    }
                    if current.is_empty() {
                        if let Some(combinator) = pending.take() {
                            combinators.push(combinator);
                        }
                    }
                    current.classes.push(name);
                }
                c if is_ident_char(c) => {
                    if !current.is_empty() {
                        return Err(fail("type selector must come first in a compound"));
                    }
                    if let Some(combinator) = pending.take() {
                        combinators.push(combinator);
                    }
                    let mut name = String::from(c);
                    name.push_str(&take_ident(&mut chars));
                    current.tag = Some(name.to_ascii_lowercase());
                }
                '#' => return Err(fail("id selectors are not supported")),
                '[' => return Err(fail("attribute selectors are not supported")),
                ':' => return Err(fail("pseudo-classes are not supported")),
                '+' | '~' => return Err(fail("sibling combinators are not supported")),
                ',' => return Err(fail("selector lists are not supported")),
                '*' => return Err(fail("universal selector is not supported")),
                _ => return Err(fail("unexpected character")),
            }
        }

        if current.is_empty() {
            return Err(fail("dangling combinator"));
        }
        compounds.push(current);

        let mut compounds = compounds.into_iter();
        let head = compounds.next().ok_or_else(|| fail("empty selector"))?;
        let tail: Vec<_> = combinators.into_iter().zip(compounds).collect();
        let source = render(&head, &tail);

        Ok(Self { source, head, tail })
    }

    /// The normalized selector text, suitable for `querySelectorAll`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns whether the element `id` matches, evaluating right to left.
    pub fn matches<T: ElementTree>(&self, tree: &T, id: T::Id) -> bool {
        self.matches_at(tree, id, self.tail.len())
    }

    fn compound(&self, index: usize) -> &Compound {
        if index == 0 {
            &self.head
        } else {
            &self.tail[index - 1].1
        }
    }

    fn matches_at<T: ElementTree>(&self, tree: &T, id: T::Id, index: usize) -> bool {
        if !self.compound(index).matches(tree, id) {
            return false;
        }
        if index == 0 {
            return true;
        }
        match self.tail[index - 1].0 {
            Combinator::Child => tree
                .parent_element(id)
                .is_some_and(|parent| self.matches_at(tree, parent, index - 1)),
            Combinator::Descendant => {
                let mut ancestor = tree.parent_element(id);
                while let Some(candidate) = ancestor {
                    if self.matches_at(tree, candidate, index - 1) {
                        return true;
                    }
                    ancestor = tree.parent_element(candidate);
                }
                false
            }
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl std::str::FromStr for Selector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if !is_ident_char(c) {
            break;
        }
        ident.push(c);
        chars.next();
    }
    ident
}

fn render(head: &Compound, tail: &[(Combinator, Compound)]) -> String {
    let mut out = String::new();
    write_compound(&mut out, head);
    for (combinator, compound) in tail {
        out.push_str(match combinator {
            Combinator::Descendant => " ",
            Combinator::Child => " > ",
        });
        write_compound(&mut out, compound);
    }
    out
}

fn write_compound(out: &mut String, compound: &Compound) {
    if let Some(tag) = &compound.tag {
        out.push_str(tag);
    }
    for class in &compound.classes {
        out.push('.');
        out.push_str(class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Flat tree: (tag, classes, parent index).
    struct Tree(Vec<(&'static str, Vec<&'static str>, Option<usize>)>);

    impl ElementTree for Tree {
        type Id = usize;

        fn tag_name(&self, id: usize) -> &str {
            self.0[id].0
        }

        fn has_class(&self, id: usize, class: &str) -> bool {
            self.0[id].1.contains(&class)
        }

        fn parent_element(&self, id: usize) -> Option<usize> {
            self.0[id].2
        }
    }

    fn header_tree() -> Tree {
        Tree(vec![
            ("header", vec![], None),              // 0
            ("nav", vec![], Some(0)),              // 1
            ("ul", vec![], Some(1)),               // 2
            ("li", vec!["nav-parent"], Some(2)),   // 3
            ("a", vec![], Some(3)),                // 4
            ("ul", vec!["submenu"], Some(3)),      // 5
            ("li", vec![], Some(5)),               // 6
            ("a", vec![], Some(6)),                // 7
        ])
    }

    #[test]
    fn parses_and_normalizes() {
        let selector = Selector::parse("  nav   >ul  ").expect("valid");
        assert_eq!(selector.as_str(), "nav > ul");
        let selector = Selector::parse("IMG.fade-in").expect("valid");
        assert_eq!(selector.to_string(), "img.fade-in");
    }

    #[test]
    fn rejects_unsupported_syntax() {
        for input in [
            "", "   ", "#main", "a[href]", "a:hover", "a + b", "a ~ b", "a, b", "*", "> a",
            "a >", "a > > b", ".", "a.b c.",
        ] {
            assert!(
                matches!(Selector::parse(input), Err(Error::Selector { .. })),
                "expected `{input}` to be rejected"
            );
        }
    }

    #[test]
    fn class_compound_requires_all_classes() {
        let tree = Tree(vec![
            ("button", vec!["arrow", "left"], None),
            ("button", vec!["arrow", "right"], None),
        ]);
        let selector = Selector::parse(".arrow.left").expect("valid");
        assert!(selector.matches(&tree, 0));
        assert!(!selector.matches(&tree, 1));
    }

    #[test]
    fn descendant_matches_any_depth() {
        let tree = header_tree();
        let selector = Selector::parse("nav ul").expect("valid");
        assert!(selector.matches(&tree, 2));
        assert!(selector.matches(&tree, 5));
        assert!(!selector.matches(&tree, 1));
    }

    #[test]
    fn child_matches_direct_children_only() {
        let tree = header_tree();
        let selector = Selector::parse(".nav-parent > a").expect("valid");
        assert!(selector.matches(&tree, 4));
        assert!(!selector.matches(&tree, 7));
    }

    #[test]
    fn descendant_backtracks_past_first_candidate() {
        let tree = header_tree();
        // The nearest `ul` ancestor of node 7 is the submenu, which is not a
        // direct child of `nav`; the outer list is.
        let selector = Selector::parse("nav > ul a").expect("valid");
        assert!(selector.matches(&tree, 7));
    }
}
