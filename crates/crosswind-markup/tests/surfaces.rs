//! Equivalence of the two authoring surfaces.
//!
//! The direct-chaining surface and the declarative block builder resolve
//! their operations from the same registry, so the scoped classes they
//! produce must agree. One pinned asymmetry separates them: merged-strategy
//! direct calls keep the unscoped baseline alongside each scoped variant,
//! while block-authored calls emit only the fully scoped class.

use crosswind::types::{Animation, Color, Edges, TransitionProperty};
use crosswind::{Modifier, StyleRegistry};
use crosswind_markup::{Styled, tags};

#[test]
fn direct_call_keeps_unscoped_baseline() {
    let direct = tags::div().background_on(Color::BLUE_500, &[Modifier::Hover]);
    assert_eq!(direct.classes(), ["bg-blue-500", "hover:bg-blue-500"]);
}

#[test]
fn block_call_emits_scoped_class_only() {
    let block = tags::div().on(|s| {
        s.hover(|s| {
            s.background(Color::BLUE_500);
        });
    });
    assert_eq!(block.classes(), ["hover:bg-blue-500"]);
}

#[test]
fn block_output_is_a_subset_of_the_direct_output() {
    let direct = tags::div().background_on(Color::BLUE_500, &[Modifier::Hover]);
    let block = tags::div().on(|s| {
        s.hover(|s| {
            s.background(Color::BLUE_500);
        });
    });
    for class in block.classes() {
        assert!(
            direct.classes().contains(class),
            "direct surface must cover block class {class}"
        );
    }
}

#[test]
fn separate_strategy_surfaces_agree_exactly() {
    let animation = Animation::named("spin-slow");
    let direct = tags::div().animate_on(animation.clone(), Some(1500), &[Modifier::Hover]);
    let block = tags::div().on(|s| {
        s.hover(|s| {
            s.animate(animation.clone(), Some(1500));
        });
    });
    assert_eq!(direct.classes(), block.classes());
    assert_eq!(
        direct.classes(),
        ["hover:animate-spin-slow", "hover:[animation-duration:1500ms]"]
    );
}

#[test]
fn multi_modifier_direct_call_has_no_cross_product() {
    let el = tags::div().padding_on(4, Edges::ALL, &[Modifier::Md, Modifier::Hover]);
    assert_eq!(el.classes(), ["p-4", "md:p-4", "hover:p-4"]);
}

#[test]
fn nested_blocks_build_the_combination_explicitly() {
    let el = tags::div().on(|s| {
        s.md(|s| {
            s.hover(|s| {
                s.padding(4);
            });
        });
    });
    assert_eq!(el.classes(), ["md:hover:p-4"]);
}

#[test]
fn unmodified_transition_still_emits_its_classes() {
    let el = tags::div().transition(TransitionProperty::Base, Some(300), None, None);
    assert_eq!(el.classes(), ["transition", "duration-300"]);
}

#[test]
fn unknown_concern_leaves_the_node_unchanged() {
    let params = crosswind::StyleParameters::new().with_length(2);
    let el = tags::div().style("outline", &params, &[]);
    assert!(el.classes().is_empty());
}

#[test]
fn injected_registry_reaches_both_surfaces() {
    let empty = StyleRegistry::empty();
    let params = crosswind::StyleParameters::new().with_length(4);

    let direct = tags::div().style_with(&empty, crosswind::concern::PADDING, &params, &[]);
    assert!(direct.classes().is_empty());

    let block = tags::div().on_with(&empty, |s| {
        s.padding(4);
    });
    assert!(block.classes().is_empty());
}

#[test]
fn call_order_is_preserved_across_surfaces() {
    let el = tags::div()
        .padding(4)
        .on(|s| {
            s.md(|s| {
                s.margin(2);
            });
        })
        .background(Color::GRAY_100);
    assert_eq!(el.classes(), ["p-4", "md:m-2", "bg-gray-100"]);
}
