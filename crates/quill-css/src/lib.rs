//! CSS selector builder for the Quill toolkit.
//!
//! # Scope
//!
//! This crate builds selector strings out of typed fragments:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, id, class, attribute, pseudo-class and pseudo-element parts
//!   - Canonical rendering order regardless of call order
//!   - Optional strict ordering policy
//!
//! - **Complex selectors** ([§ 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   - Descendant, child, next-sibling and subsequent-sibling combinators
//!
//! - **Specificity** ([§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!
//! # Not Implemented
//!
//! - Parsing selector strings
//! - Matching selectors against a document
//! - Validating fragment contents (fragments are written verbatim)

/// Facade that starts a new selector from any part.
pub mod builder;
/// Errors raised while building a selector.
pub mod error;
/// Selector parts, combinators and the immutable-step builder.
pub mod selector;

pub use builder::{CSS_SELECTOR_BUILDER, CssSelectorBuilder};
pub use error::{Result, SelectorError};
pub use selector::{Combinator, OrderPolicy, Part, SelectorBuilder, Specificity};
