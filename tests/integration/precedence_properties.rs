//! Property-based tests for layer precedence

use proptest::prelude::*;
use template_cli::config::{ConfigResolver, ConfigSource, Layer};

const SOURCES: [ConfigSource; 3] = [
    ConfigSource::File,
    ConfigSource::Environment,
    ConfigSource::Flag,
];

fn origin(source: ConfigSource) -> String {
    source.to_string()
}

/// For any subset of sources setting `account`, the highest-ranked one wins,
/// whatever order the layers are passed in.
#[test]
fn test_highest_rank_wins_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                proptest::collection::vec(any::<bool>(), 3),
                proptest::collection::vec("[a-z0-9]{1,12}", 3),
                any::<bool>(),
            ),
            |(present, values, reversed)| {
                let mut layers: Vec<Layer> = SOURCES
                    .iter()
                    .zip(&present)
                    .zip(&values)
                    .filter(|((_, present), _)| **present)
                    .map(|((source, _), value)| {
                        Layer::new(*source, origin(*source)).with("account", value.as_str())
                    })
                    .collect();
                if reversed {
                    layers.reverse();
                }

                let expected = (0..3)
                    .rev()
                    .find(|i| present[*i])
                    .map(|i| values[i].clone());

                let config = ConfigResolver::resolve(&layers).unwrap();
                prop_assert_eq!(config.account().map(str::to_string), expected);
                Ok(())
            },
        )
        .unwrap();
}

/// Layers setting disjoint keys merge into their union.
#[test]
fn test_disjoint_layers_union_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &("[0-9]{1,9}", "[A-Za-z0-9]{1,20}", any::<bool>()),
            |(account, token, sandbox)| {
                let layers = [
                    Layer::new(ConfigSource::File, "file").with("account", account.as_str()),
                    Layer::new(ConfigSource::Environment, "environment")
                        .with("access-token", token.as_str()),
                    Layer::new(ConfigSource::Flag, "flags").with("sandbox", sandbox),
                ];

                let config = ConfigResolver::resolve(&layers).unwrap();
                prop_assert_eq!(config.account(), Some(account.as_str()));
                prop_assert_eq!(config.access_token(), Some(token.as_str()));
                prop_assert_eq!(config.sandbox(), sandbox);
                Ok(())
            },
        )
        .unwrap();
}
