//! Behavioural tests for the mock-data crate.
//!
//! These tests validate rendering behaviour against Gherkin scenarios
//! covering deterministic chaining, identifier divergence, and template
//! error handling.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::Arc;

use mock_data::{ReferenceData, RenderError, render};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

// ============================================================================
// Test fixtures and constants
// ============================================================================

/// Chained user-profile template shared by the determinism scenarios.
const PROFILE_TEMPLATE: &str = r#"{
    "name": "{{ FullNameChain(0) }}",
    "email": "{{ EmailChain(1) }}",
    "city": "{{ CityChain(2) }}",
    "age": {{ NumberChain(3, 18, 80) }},
    "active": {{ BooleanChain(4) }}
}"#;

/// Shared reference data for every scenario.
fn data() -> Arc<ReferenceData> {
    Arc::new(ReferenceData::builtin().expect("embedded datasets parse"))
}

/// Test world holding the template, identifier, and render results.
#[derive(Default, ScenarioState)]
struct World {
    template: Slot<String>,
    identifier: Slot<String>,
    first_render: Slot<Result<String, RenderError>>,
    second_render: Slot<Result<String, RenderError>>,
}

impl World {
    fn template(&self) -> String {
        self.template.get().expect("template should be set")
    }

    fn identifier(&self) -> String {
        self.identifier.get().expect("identifier should be set")
    }

    fn first_render(&self) -> Result<String, RenderError> {
        self.first_render.get().expect("first render should be set")
    }

    fn first_output(&self) -> String {
        self.first_render().expect("render should succeed")
    }

    fn second_output(&self) -> String {
        self.second_render
            .get()
            .expect("second render should be set")
            .expect("render should succeed")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("the user profile template")]
fn the_user_profile_template(world: &World) {
    world.template.set(PROFILE_TEMPLATE.to_owned());
}

#[given("a template repeating one chain key")]
fn a_template_repeating_one_chain_key(world: &World) {
    world
        .template
        .set("{{ FirstNameChain(7) }}|{{ FirstNameChain(7) }}".to_owned());
}

#[given("a template with broken syntax")]
fn a_template_with_broken_syntax(world: &World) {
    world.template.set("{{ FirstName(".to_owned());
}

#[given("a template requesting an empty numeric range")]
fn a_template_requesting_an_empty_numeric_range(world: &World) {
    world.template.set("{{ NumberChain(0, 5, 5) }}".to_owned());
}

#[given("the identifier \"{identifier}\"")]
fn the_identifier(world: &World, identifier: String) {
    world.identifier.set(identifier);
}

// ============================================================================
// When steps
// ============================================================================

#[when("the template is rendered")]
fn the_template_is_rendered(world: &World) {
    let data = data();
    let result = render(&world.template(), &world.identifier(), &data);
    world.first_render.set(result);
}

#[when("the template is rendered twice")]
fn the_template_is_rendered_twice(world: &World) {
    let data = data();
    let template = world.template();
    let identifier = world.identifier();

    world.first_render.set(render(&template, &identifier, &data));
    world
        .second_render
        .set(render(&template, &identifier, &data));
}

#[when("the template is rendered for a second identifier \"{identifier}\"")]
fn the_template_is_rendered_for_a_second_identifier(world: &World, identifier: String) {
    let data = data();
    let template = world.template();

    world
        .first_render
        .set(render(&template, &world.identifier(), &data));
    world.second_render.set(render(&template, &identifier, &data));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("both renders produce identical output")]
fn both_renders_produce_identical_output(world: &World) {
    assert_eq!(
        world.first_output(),
        world.second_output(),
        "Chained renders should be deterministic"
    );
}

#[then("the renders differ")]
fn the_renders_differ(world: &World) {
    assert_ne!(
        world.first_output(),
        world.second_output(),
        "Distinct identifiers should not collide"
    );
}

#[then("both occurrences match")]
fn both_occurrences_match(world: &World) {
    let output = world.first_output();
    let mut parts = output.split('|');
    let left = parts.next().expect("left occurrence");
    let right = parts.next().expect("right occurrence");
    assert_eq!(left, right, "Equal chain keys should repeat one value");
}

#[then("the output parses as JSON")]
fn the_output_parses_as_json(world: &World) {
    let output = world.first_output();
    let parsed: serde_json::Value =
        serde_json::from_str(&output).expect("rendered profile should be valid JSON");
    assert!(parsed.get("name").is_some(), "profile should carry a name");
}

#[then("rendering fails with a template error")]
fn rendering_fails_with_a_template_error(world: &World) {
    match world.first_render() {
        Err(RenderError::Template { .. }) => {}
        other => panic!("Expected Template error, got: {other:?}"),
    }
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/generation.feature",
    name = "Chained rendering is deterministic"
)]
fn chained_rendering_is_deterministic(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/generation.feature",
    name = "Distinct identifiers diverge"
)]
fn distinct_identifiers_diverge(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/generation.feature",
    name = "Equal chain keys repeat within one render"
)]
fn equal_chain_keys_repeat_within_one_render(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/generation.feature",
    name = "Rendered profile is valid JSON"
)]
fn rendered_profile_is_valid_json(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/generation.feature",
    name = "Malformed templates fail rendering"
)]
fn malformed_templates_fail_rendering(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/generation.feature",
    name = "Empty numeric ranges fail rendering"
)]
fn empty_numeric_ranges_fail_rendering(world: World) {
    let _ = world;
}
