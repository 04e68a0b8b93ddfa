//! Given steps for contact submission BDD scenarios.

use super::world::{PortfolioWorld, run_async};
use crate::test_helpers::spawn_server;
use rstest_bdd_macros::given;

#[given("a running portfolio server")]
fn running_server(world: &mut PortfolioWorld) {
    world.server = Some(run_async(spawn_server(false)));
}

#[given("a running portfolio server with a CV on disk")]
fn running_server_with_cv(world: &mut PortfolioWorld) {
    world.server = Some(run_async(spawn_server(true)));
}
