/*! Integration tests for varstore.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * - store: Scripted host sessions against the public Store API
 * - coerce: Coercion of stored values through `get_as` and the free helpers
 * - properties: Property tests for the path operations
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("varstore=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod coerce;
mod helpers;
mod properties;
mod store;
