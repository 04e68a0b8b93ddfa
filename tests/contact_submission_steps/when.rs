//! When steps for contact submission BDD scenarios.

use super::world::{PortfolioWorld, record, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use serde_json::{Value, json};

fn submit(world: &mut PortfolioWorld, body: &Value) -> Result<(), eyre::Report> {
    let request = world
        .client
        .post(world.server()?.url("/api/contact"))
        .json(body);
    let response = run_async(record(request)).wrap_err("submit contact form")?;
    world.last_response = Some(response);
    Ok(())
}

#[when(r#"a visitor submits name "{name}", email "{email}" and message "{message}""#)]
fn visitor_submits(
    world: &mut PortfolioWorld,
    name: String,
    email: String,
    message: String,
) -> Result<(), eyre::Report> {
    submit(
        world,
        &json!({ "name": name, "email": email, "message": message }),
    )
}

#[when("a visitor submits a form with every field invalid")]
fn visitor_submits_invalid_form(world: &mut PortfolioWorld) -> Result<(), eyre::Report> {
    submit(
        world,
        &json!({ "name": "", "email": "bad", "message": "short" }),
    )
}

#[when("the visitor requests the CV")]
fn visitor_requests_cv(world: &mut PortfolioWorld) -> Result<(), eyre::Report> {
    let request = world.client.get(world.server()?.url("/api/cv/download"));
    let response = run_async(record(request)).wrap_err("download CV")?;
    world.last_response = Some(response);
    Ok(())
}
