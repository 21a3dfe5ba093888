//! Error types for selector building.

use thiserror::Error;

use crate::selector::Part;

/// Result alias used throughout the selector builder.
pub type Result<T> = std::result::Result<T, SelectorError>;

/// Everything that can go wrong while adding parts or combining selectors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// An element, id or pseudo-element was set a second time.
    #[error("Element, id and pseudo-element should not occur more then one time inside the selector")]
    DuplicatePart(Part),

    /// A strict builder received a part that ranks before one it already holds.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    WrongOrder {
        /// The part that was being added.
        part: Part,
        /// The highest-ranked part already present.
        after: Part,
    },

    /// The combinator string was not one of `" "`, `">"`, `"+"` or `"~"`.
    #[error("Unknown combinator {0:?}: expected one of \" \", \">\", \"+\", \"~\"")]
    UnknownCombinator(String),
}
