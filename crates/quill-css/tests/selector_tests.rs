//! Integration tests for CSS selector building and rendering.

use quill_css::{
    CSS_SELECTOR_BUILDER as builder, Combinator, CssSelectorBuilder, OrderPolicy, Part,
    SelectorBuilder, SelectorError, Specificity,
};
use quickcheck_macros::quickcheck;

// Compound Rendering Tests
// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)

#[test]
fn test_id_with_classes() {
    let selector = builder
        .id("main")
        .and_then(|s| s.class("container"))
        .and_then(|s| s.class("editable"))
        .unwrap();
    assert_eq!(selector.stringify(), "#main.container.editable");
}

#[test]
fn test_element_attribute_pseudo_class() {
    let selector = builder
        .element("a")
        .and_then(|s| s.attr(r#"href$=".png""#))
        .and_then(|s| s.pseudo_class("focus"))
        .unwrap();
    assert_eq!(selector.stringify(), r#"a[href$=".png"]:focus"#);
}

#[test]
fn test_every_part_kind() {
    let selector = builder
        .element("p")
        .and_then(|s| s.id("intro"))
        .and_then(|s| s.class("lead"))
        .and_then(|s| s.attr("lang|=en"))
        .and_then(|s| s.pseudo_class("first-of-type"))
        .and_then(|s| s.pseudo_element("first-line"))
        .unwrap();
    assert_eq!(
        selector.stringify(),
        "p#intro.lead[lang|=en]:first-of-type::first-line"
    );
}

#[test]
fn test_repeated_parts_keep_call_order() {
    let selector = builder
        .element("input")
        .and_then(|s| s.attr("type=text"))
        .and_then(|s| s.attr("required"))
        .and_then(|s| s.pseudo_class("enabled"))
        .and_then(|s| s.pseudo_class("focus"))
        .unwrap();
    assert_eq!(
        selector.stringify(),
        "input[type=text][required]:enabled:focus"
    );
}

#[test]
fn test_empty_builder_renders_empty() {
    assert_eq!(SelectorBuilder::new().stringify(), "");
}

#[test]
fn test_display_matches_stringify() {
    let selector = builder.class("btn").unwrap();
    assert_eq!(format!("{selector}"), selector.stringify());
}

#[test]
fn test_render_does_not_consume() {
    let selector = builder.element("li").unwrap();
    assert_eq!(selector.stringify(), "li");
    let selector = selector.class("active").unwrap();
    assert_eq!(selector.stringify(), "li.active");
}

// Ordering Tests

#[test]
fn test_out_of_order_parts_are_normalized() {
    let selector = builder
        .pseudo_element("after")
        .and_then(|s| s.class("note"))
        .and_then(|s| s.id("n1"))
        .and_then(|s| s.element("span"))
        .unwrap();
    assert_eq!(selector.stringify(), "span#n1.note::after");
}

#[test]
fn test_out_of_order_part_is_warned_about() {
    quill_common::set_enabled(false);
    let _ = builder
        .attr("data-warn-check")
        .and_then(|s| s.element("section"))
        .unwrap();
    assert!(
        quill_common::warnings_emitted()
            .iter()
            .any(|w| w == "[Selector] element added after attribute; reordered on render")
    );
}

#[test]
fn test_strict_rejects_id_after_class() {
    let result = CssSelectorBuilder::strict()
        .class("container")
        .and_then(|s| s.id("main"));
    assert_eq!(
        result,
        Err(SelectorError::WrongOrder {
            part: Part::Id,
            after: Part::Class,
        })
    );
}

#[test]
fn test_strict_rejects_pseudo_class_after_pseudo_element() {
    let result = CssSelectorBuilder::strict()
        .pseudo_element("before")
        .and_then(|s| s.pseudo_class("hover"));
    assert!(matches!(result, Err(SelectorError::WrongOrder { .. })));
}

#[test]
fn test_strict_accepts_canonical_order() {
    let selector = CssSelectorBuilder::strict()
        .element("div")
        .and_then(|s| s.id("main"))
        .and_then(|s| s.class("a"))
        .and_then(|s| s.class("b"))
        .and_then(|s| s.attr("title"))
        .and_then(|s| s.pseudo_class("hover"))
        .and_then(|s| s.pseudo_element("before"))
        .unwrap();
    assert_eq!(selector.policy(), OrderPolicy::Strict);
    assert_eq!(selector.stringify(), "div#main.a.b[title]:hover::before");
}

#[test]
fn test_wrong_order_message() {
    let err = SelectorBuilder::with_policy(OrderPolicy::Strict)
        .class("x")
        .and_then(|s| s.element("div"))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    );
}

// Duplicate Part Tests

#[test]
fn test_duplicate_id() {
    let result = builder.id("a").and_then(|s| s.id("b"));
    assert_eq!(result, Err(SelectorError::DuplicatePart(Part::Id)));
}

#[test]
fn test_duplicate_element() {
    let result = builder.element("div").and_then(|s| s.element("span"));
    assert_eq!(result, Err(SelectorError::DuplicatePart(Part::Element)));
}

#[test]
fn test_duplicate_pseudo_element() {
    let result = builder
        .pseudo_element("before")
        .and_then(|s| s.pseudo_element("after"));
    assert_eq!(result, Err(SelectorError::DuplicatePart(Part::PseudoElement)));
}

#[test]
fn test_duplicate_checked_before_order() {
    let result = CssSelectorBuilder::strict()
        .id("a")
        .and_then(|s| s.class("b"))
        .and_then(|s| s.id("c"));
    assert_eq!(result, Err(SelectorError::DuplicatePart(Part::Id)));
}

#[test]
fn test_duplicate_message() {
    let err = builder.id("a").and_then(|s| s.id("b")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Element, id and pseudo-element should not occur more then one time inside the selector"
    );
}

// Combinator Tests
// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

#[test]
fn test_combine_next_sibling() {
    let left = builder.element("div").and_then(|s| s.id("x")).unwrap();
    let right = builder.element("span").unwrap();
    let selector = builder.combine(left, "+", right).unwrap();
    assert!(selector.is_combined());
    assert_eq!(selector.stringify(), "div#x + span");
}

#[test]
fn test_combine_descendant_renders_three_spaces() {
    let selector = builder
        .combine(
            builder.element("ul").unwrap(),
            " ",
            builder.element("li").unwrap(),
        )
        .unwrap();
    assert_eq!(selector.stringify(), "ul   li");
}

#[test]
fn test_combine_nested() {
    let left = builder
        .element("div")
        .and_then(|s| s.id("main"))
        .and_then(|s| s.class("container"))
        .and_then(|s| s.class("draggable"))
        .unwrap();
    let inner = builder
        .combine(
            builder
                .element("tr")
                .and_then(|s| s.pseudo_class("nth-of-type(even)"))
                .unwrap(),
            " ",
            builder
                .element("td")
                .and_then(|s| s.pseudo_class("nth-of-type(even)"))
                .unwrap(),
        )
        .unwrap();
    let middle = builder
        .combine(
            builder.element("table").and_then(|s| s.id("data")).unwrap(),
            "~",
            inner,
        )
        .unwrap();
    let selector = builder.combine(left, "+", middle).unwrap();

    assert_eq!(
        selector.stringify(),
        "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
    );
}

#[test]
fn test_combine_child_typed() {
    let selector = SelectorBuilder::combine(
        builder.element("nav").unwrap(),
        Combinator::Child,
        builder.class("item").unwrap(),
    );
    assert_eq!(selector.stringify(), "nav > .item");
}

#[test]
fn test_combine_mixed_policies_is_strict() {
    let selector = SelectorBuilder::combine(
        builder.element("ul").unwrap(),
        Combinator::Child,
        CssSelectorBuilder::strict().element("li").unwrap(),
    );
    assert_eq!(selector.policy(), OrderPolicy::Strict);
    assert_eq!(selector.stringify(), "ul > li");

    let selector = SelectorBuilder::combine(
        CssSelectorBuilder::strict().element("ol").unwrap(),
        Combinator::Child,
        builder.element("li").unwrap(),
    );
    assert_eq!(selector.policy(), OrderPolicy::Strict);

    let selector = SelectorBuilder::combine(
        builder.element("ol").unwrap(),
        Combinator::Child,
        builder.element("li").unwrap(),
    );
    assert_eq!(selector.policy(), OrderPolicy::Normalize);
}

#[test]
fn test_strict_combined_still_checks_order_of_later_parts() {
    quill_common::set_enabled(false);
    let result = CssSelectorBuilder::strict()
        .combine(
            builder.element("dl").unwrap(),
            ">",
            builder.element("dt").unwrap(),
        )
        .and_then(|s| s.pseudo_element("after"))
        .and_then(|s| s.class("late"));
    assert_eq!(
        result,
        Err(SelectorError::WrongOrder {
            part: Part::Class,
            after: Part::PseudoElement,
        })
    );
}

#[test]
fn test_combine_unknown_combinator() {
    let result = builder.combine(
        builder.element("a").unwrap(),
        "<",
        builder.element("b").unwrap(),
    );
    assert_eq!(
        result,
        Err(SelectorError::UnknownCombinator("<".to_string()))
    );
}

#[test]
fn test_parts_added_after_combine_are_ignored() {
    quill_common::set_enabled(false);
    let selector = SelectorBuilder::combine(
        builder.element("h1").unwrap(),
        Combinator::SubsequentSibling,
        builder.element("p").unwrap(),
    )
    .class("ignored")
    .unwrap();
    assert_eq!(selector.stringify(), "h1 ~ p");
    assert_eq!(selector.parts(), vec![(Part::Class, "ignored")]);
    assert!(
        quill_common::warnings_emitted()
            .iter()
            .any(|w| w == "[Selector] class added to a combined selector is ignored on render")
    );
}

// Specificity Tests
// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)

#[test]
fn test_specificity_compound() {
    let selector = builder
        .element("a")
        .and_then(|s| s.id("home"))
        .and_then(|s| s.class("nav"))
        .and_then(|s| s.attr("href"))
        .and_then(|s| s.pseudo_class("hover"))
        .and_then(|s| s.pseudo_element("before"))
        .unwrap();
    assert_eq!(selector.specificity(), Specificity(1, 3, 2));
}

#[test]
fn test_specificity_combined_sums_sides() {
    let selector = SelectorBuilder::combine(
        builder.element("div").and_then(|s| s.id("x")).unwrap(),
        Combinator::Descendant,
        builder.class("y").unwrap(),
    );
    assert_eq!(selector.specificity(), Specificity::new(1, 1, 1));
}

#[test]
fn test_specificity_ordering() {
    assert!(Specificity(1, 0, 0) > Specificity(0, 10, 10));
    assert!(Specificity(0, 1, 0) > Specificity(0, 0, 5));
}

// Property Tests

#[quickcheck]
fn prop_classes_render_in_call_order(classes: Vec<String>) -> bool {
    let selector = classes
        .iter()
        .try_fold(SelectorBuilder::new(), |s, c| s.class(c.as_str()))
        .unwrap();
    let expected: String = classes.iter().map(|c| format!(".{c}")).collect();
    selector.stringify() == expected
}

#[quickcheck]
fn prop_second_id_always_fails(first: String, second: String) -> bool {
    builder.id(first).and_then(|s| s.id(second)) == Err(SelectorError::DuplicatePart(Part::Id))
}
