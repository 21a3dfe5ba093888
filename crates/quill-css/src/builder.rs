//! Facade over [`SelectorBuilder`].
//!
//! Every entry point starts a fresh builder, so one facade value can be
//! shared freely while building many selectors.
//!
//! ```
//! use quill_css::CSS_SELECTOR_BUILDER as builder;
//!
//! let selector = builder.id("main")?.class("container")?.class("editable")?;
//! assert_eq!(selector.stringify(), "#main.container.editable");
//! # Ok::<(), quill_css::SelectorError>(())
//! ```

use crate::error::Result;
use crate::selector::{Combinator, OrderPolicy, SelectorBuilder};

/// Shared facade using [`OrderPolicy::Normalize`].
pub const CSS_SELECTOR_BUILDER: CssSelectorBuilder = CssSelectorBuilder::new();

/// Entry points that create a [`SelectorBuilder`] and add its first part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CssSelectorBuilder {
    policy: OrderPolicy,
}

impl CssSelectorBuilder {
    /// Facade whose builders normalize part order on render.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            policy: OrderPolicy::Normalize,
        }
    }

    /// Facade whose builders reject out-of-order parts.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            policy: OrderPolicy::Strict,
        }
    }

    fn start(self) -> SelectorBuilder {
        SelectorBuilder::with_policy(self.policy)
    }

    /// Start a selector with a type selector.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh builder; the `Result` keeps chaining uniform.
    pub fn element(self, value: impl Into<String>) -> Result<SelectorBuilder> {
        self.start().element(value)
    }

    /// Start a selector with an id.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh builder; the `Result` keeps chaining uniform.
    pub fn id(self, value: impl Into<String>) -> Result<SelectorBuilder> {
        self.start().id(value)
    }

    /// Start a selector with a class.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh builder; the `Result` keeps chaining uniform.
    pub fn class(self, value: impl Into<String>) -> Result<SelectorBuilder> {
        self.start().class(value)
    }

    /// Start a selector with an attribute.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh builder; the `Result` keeps chaining uniform.
    pub fn attr(self, value: impl Into<String>) -> Result<SelectorBuilder> {
        self.start().attr(value)
    }

    /// Start a selector with a pseudo-class.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh builder; the `Result` keeps chaining uniform.
    pub fn pseudo_class(self, value: impl Into<String>) -> Result<SelectorBuilder> {
        self.start().pseudo_class(value)
    }

    /// Start a selector with a pseudo-element.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh builder; the `Result` keeps chaining uniform.
    pub fn pseudo_element(self, value: impl Into<String>) -> Result<SelectorBuilder> {
        self.start().pseudo_element(value)
    }

    /// Join two selectors with a combinator given as its symbol.
    ///
    /// The result is strict if this facade or either side is strict.
    ///
    /// # Errors
    ///
    /// [`SelectorError::UnknownCombinator`](crate::SelectorError::UnknownCombinator)
    /// if `combinator` is not exactly `" "`, `">"`, `"+"` or `"~"`.
    pub fn combine(
        self,
        left: SelectorBuilder,
        combinator: &str,
        right: SelectorBuilder,
    ) -> Result<SelectorBuilder> {
        let combinator: Combinator = combinator.parse()?;
        Ok(SelectorBuilder::combine(left, combinator, right).tightened(self.policy))
    }
}
