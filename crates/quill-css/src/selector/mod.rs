//! CSS selector building
//!
//! This module implements an immutable-step builder for selectors per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/). Each part-adding
//! method consumes the builder and hands back the extended one, so there is
//! no shared state to reset between selectors.

mod combinator;

use std::fmt;
use std::ops::Add;

use quill_common::warn_once;
use serde::Serialize;
use strum_macros::Display;

use crate::error::{Result, SelectorError};

pub use combinator::Combinator;

/// Component name used for builder warnings.
const COMPONENT: &str = "Selector";

/// [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// The kinds of fragment a compound selector is made of, declared in
/// canonical rendering order so that `Ord` gives the rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Part {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `a`, `tr`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#data`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.container`, `.editable`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[href$=".png"]`
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:focus`, `:nth-of-type(even)`
    PseudoClass,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement,
}

impl Part {
    /// Whether a selector may hold at most one fragment of this kind.
    #[must_use]
    pub const fn is_single(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Text written before the fragment value when rendering.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// Text written after the fragment value when rendering.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }
}

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)
///
/// Specificities are compared by comparing the three components in order."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2)
    }
}

/// How the builder reacts to parts added out of canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderPolicy {
    /// Accept any call order; rendering puts parts back in canonical order.
    #[default]
    Normalize,
    /// Reject a part whose kind ranks before one already present.
    Strict,
}

impl OrderPolicy {
    /// The stricter of two policies.
    #[must_use]
    pub const fn stricter(self, other: Self) -> Self {
        match (self, other) {
            (Self::Normalize, Self::Normalize) => Self::Normalize,
            _ => Self::Strict,
        }
    }
}

/// Two selectors joined by a combinator.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Combination {
    left: SelectorBuilder,
    combinator: Combinator,
    right: SelectorBuilder,
}

/// A selector under construction.
///
/// A builder is either compound (the part fields below) or the result of
/// [`SelectorBuilder::combine`]. A combined builder renders only its
/// combination; parts added to it afterwards are kept but ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectorBuilder {
    policy: OrderPolicy,
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    combined: Option<Box<Combination>>,
    /// Highest-ranked part added so far.
    highest: Option<Part>,
}

impl SelectorBuilder {
    /// Create an empty builder with the default [`OrderPolicy::Normalize`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with the given ordering policy.
    #[must_use]
    pub fn with_policy(policy: OrderPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Join two selectors with a combinator.
    ///
    /// Renders as `"<left> <combinator> <right>"`. The new builder is strict
    /// if either side is.
    #[must_use]
    pub fn combine(left: Self, combinator: Combinator, right: Self) -> Self {
        Self {
            policy: left.policy.stricter(right.policy),
            combined: Some(Box::new(Combination {
                left,
                combinator,
                right,
            })),
            ..Self::default()
        }
    }

    /// Raise this builder's policy to at least `policy`.
    pub(crate) fn tightened(mut self, policy: OrderPolicy) -> Self {
        self.policy = self.policy.stricter(policy);
        self
    }

    /// Set the type selector.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if an element is already set, or
    /// [`SelectorError::WrongOrder`] under [`OrderPolicy::Strict`].
    pub fn element(mut self, value: impl Into<String>) -> Result<Self> {
        self.admit(Part::Element)?;
        self.element = Some(value.into());
        Ok(self)
    }

    /// Set the id selector, rendered as `#value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if an id is already set, or
    /// [`SelectorError::WrongOrder`] under [`OrderPolicy::Strict`].
    pub fn id(mut self, value: impl Into<String>) -> Result<Self> {
        self.admit(Part::Id)?;
        self.id = Some(value.into());
        Ok(self)
    }

    /// Append a class selector, rendered as `.value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::WrongOrder`] under [`OrderPolicy::Strict`].
    pub fn class(mut self, value: impl Into<String>) -> Result<Self> {
        self.admit(Part::Class)?;
        self.classes.push(value.into());
        Ok(self)
    }

    /// Append an attribute selector, rendered as `[value]`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::WrongOrder`] under [`OrderPolicy::Strict`].
    pub fn attr(mut self, value: impl Into<String>) -> Result<Self> {
        self.admit(Part::Attribute)?;
        self.attributes.push(value.into());
        Ok(self)
    }

    /// Append a pseudo-class, rendered as `:value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::WrongOrder`] under [`OrderPolicy::Strict`].
    pub fn pseudo_class(mut self, value: impl Into<String>) -> Result<Self> {
        self.admit(Part::PseudoClass)?;
        self.pseudo_classes.push(value.into());
        Ok(self)
    }

    /// Set the pseudo-element, rendered as `::value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if a pseudo-element is already set,
    /// or [`SelectorError::WrongOrder`] under [`OrderPolicy::Strict`].
    pub fn pseudo_element(mut self, value: impl Into<String>) -> Result<Self> {
        self.admit(Part::PseudoElement)?;
        self.pseudo_element = Some(value.into());
        Ok(self)
    }

    /// Render the selector string.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// The ordering policy this builder was created with.
    #[must_use]
    pub const fn policy(&self) -> OrderPolicy {
        self.policy
    }

    /// Whether this builder came from [`SelectorBuilder::combine`].
    #[must_use]
    pub const fn is_combined(&self) -> bool {
        self.combined.is_some()
    }

    /// The compound parts in canonical rendering order.
    ///
    /// For a combined builder this lists only parts added after the
    /// combination, which rendering ignores.
    #[must_use]
    pub fn parts(&self) -> Vec<(Part, &str)> {
        let mut parts = Vec::new();
        parts.extend(self.element.as_deref().map(|v| (Part::Element, v)));
        parts.extend(self.id.as_deref().map(|v| (Part::Id, v)));
        parts.extend(self.classes.iter().map(|v| (Part::Class, v.as_str())));
        parts.extend(self.attributes.iter().map(|v| (Part::Attribute, v.as_str())));
        parts.extend(self.pseudo_classes.iter().map(|v| (Part::PseudoClass, v.as_str())));
        parts.extend(self.pseudo_element.as_deref().map(|v| (Part::PseudoElement, v)));
        parts
    }

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// A combined selector sums the specificity of both sides.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        if let Some(combination) = &self.combined {
            return combination.left.specificity() + combination.right.specificity();
        }

        self.parts()
            .into_iter()
            .fold(Specificity::default(), |acc, (part, _)| {
                acc + match part {
                    Part::Id => Specificity(1, 0, 0),
                    Part::Class | Part::Attribute | Part::PseudoClass => Specificity(0, 1, 0),
                    Part::Element | Part::PseudoElement => Specificity(0, 0, 1),
                }
            })
    }

    /// Check that `part` may be added, then record it as added.
    fn admit(&mut self, part: Part) -> Result<()> {
        if part.is_single() && self.holds(part) {
            return Err(SelectorError::DuplicatePart(part));
        }

        if let Some(highest) = self.highest.filter(|&highest| part < highest) {
            match self.policy {
                OrderPolicy::Strict => {
                    return Err(SelectorError::WrongOrder {
                        part,
                        after: highest,
                    });
                }
                OrderPolicy::Normalize => warn_once(
                    COMPONENT,
                    &format!("{part} added after {highest}; reordered on render"),
                ),
            }
        }

        if self.combined.is_some() {
            warn_once(
                COMPONENT,
                &format!("{part} added to a combined selector is ignored on render"),
            );
        }

        self.highest = self.highest.max(Some(part));
        Ok(())
    }

    fn holds(&self, part: Part) -> bool {
        match part {
            Part::Element => self.element.is_some(),
            Part::Id => self.id.is_some(),
            Part::Class => !self.classes.is_empty(),
            Part::Attribute => !self.attributes.is_empty(),
            Part::PseudoClass => !self.pseudo_classes.is_empty(),
            Part::PseudoElement => self.pseudo_element.is_some(),
        }
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(combination) = &self.combined {
            return write!(
                f,
                "{} {} {}",
                combination.left, combination.combinator, combination.right
            );
        }

        for (part, value) in self.parts() {
            write!(f, "{}{value}{}", part.prefix(), part.suffix())?;
        }
        Ok(())
    }
}
