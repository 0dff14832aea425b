//! Snapshot tests for rendered HTML output.

use crosswind::types::{Color, Edges, FontSize, FontWeight, Radius, ShadowSize};
use crosswind::Modifier;
use crosswind_markup::{Styled, tags};
use insta::assert_snapshot;

#[test]
fn renders_a_styled_card() {
    let card = tags::div()
        .id("hero")
        .padding_at(6, Edges::HORIZONTAL)
        .background(Color::GRAY_100)
        .corner_radius(Radius::Lg)
        .child(
            tags::p()
                .font_size(FontSize::Lg)
                .font_weight(FontWeight::SemiBold)
                .text("Welcome"),
        );

    assert_snapshot!(
        card.render(),
        @r#"<div id="hero" class="px-6 bg-gray-100 rounded-lg"><p class="text-lg font-semibold">Welcome</p></div>"#
    );
}

#[test]
fn renders_an_interactive_button() {
    let button = tags::button()
        .text("Deploy")
        .background_on(Color::BLUE_500, &[Modifier::Hover])
        .foreground(Color::WHITE)
        .shadow(ShadowSize::Base)
        .on(|s| {
            s.md(|s| {
                s.padding_at(4, Edges::HORIZONTAL);
            });
        });

    assert_snapshot!(
        button.render(),
        @r#"<button class="bg-blue-500 hover:bg-blue-500 text-white shadow md:px-4">Deploy</button>"#
    );
}

#[test]
fn renders_arbitrary_value_classes_verbatim() {
    let spinner = tags::span().animate(crosswind::types::Animation::named("spin-slow"), Some(1500));

    assert_snapshot!(
        spinner.render(),
        @r#"<span class="animate-spin-slow [animation-duration:1500ms]"></span>"#
    );
}
