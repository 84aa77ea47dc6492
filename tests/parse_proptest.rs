//! Property-based tests for argument binding and parse determinism.
//!
//! The grammar under test is a chain `walk <a0> <a1> ... <aN>` where every
//! node is executable, plus a `walk stop` literal branch that must always
//! win over the first argument.

use proptest::prelude::*;

use cmdtree::{Command, Dispatcher, NodeBuilder, NodeKind};

const DEPTH: usize = 5;

fn chain_dispatcher() -> Dispatcher<u8> {
    let mut node = NodeBuilder::argument(format!("a{}", DEPTH - 1)).executes(|_| Ok(()));
    for i in (0..DEPTH - 1).rev() {
        node = NodeBuilder::argument(format!("a{i}"))
            .then(node)
            .executes(|_| Ok(()));
    }
    let root = NodeBuilder::root()
        .then(node)
        .then(NodeBuilder::literal("stop").executes(|_| Ok(())))
        .executes(|_| Ok(()));

    let mut d = Dispatcher::new();
    d.register(Command::new("walk", root)).unwrap();
    d
}

/// Tokens without spaces that are never the `stop` literal.
fn token_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.-]{1,12}".prop_filter("literal", |t| t != "stop")
}

proptest! {
    #[test]
    fn arguments_bind_tokens_in_order(tokens in prop::collection::vec(token_strategy(), 0..=DEPTH)) {
        let d = chain_dispatcher();
        let input = if tokens.is_empty() {
            "walk".to_string()
        } else {
            format!("walk {}", tokens.join(" "))
        };

        let result = d.parse(&input, 0).unwrap();
        let bound: Vec<(String, String)> = result
            .context()
            .args
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let expected: Vec<(String, String)> = tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (format!("a{i}"), t.clone()))
            .collect();
        prop_assert_eq!(bound, expected);
    }

    #[test]
    fn too_many_tokens_always_fail(tokens in prop::collection::vec(token_strategy(), DEPTH + 1..DEPTH + 4)) {
        let d = chain_dispatcher();
        let input = format!("walk {}", tokens.join(" "));
        prop_assert!(d.parse(&input, 0).is_err());
    }

    #[test]
    fn parsing_is_deterministic(tokens in prop::collection::vec(token_strategy(), 0..=DEPTH), source in any::<u8>()) {
        let d = chain_dispatcher();
        let input = format!("walk {}", tokens.join(" "));
        let first = d.parse(input.trim_end(), source);
        let second = d.parse(input.trim_end(), source);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn stop_literal_beats_argument(source in any::<u8>()) {
        let d = chain_dispatcher();
        let result = d.parse("walk stop", source).unwrap();
        prop_assert_eq!(result.node().kind(), &NodeKind::Literal("stop".into()));
        prop_assert!(result.context().args.is_empty());
    }
}
