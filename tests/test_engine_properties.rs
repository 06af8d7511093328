use argprov::{
    aa::{AAFramework, Argument, ArgumentSet, FrameworkDescription, SemanticsKind},
    engine::{
        ArgumentStatus, EngineConfig, SemanticsEngine, SemanticsResult,
        DEFAULT_MAX_DISPUTE_TREE_NODES,
    },
    error::{EngineError, FrameworkDefect},
};
use paste::paste;

fn framework(labels: &[&str], attacks: &[(&str, &str)]) -> AAFramework<String> {
    let labels = labels.iter().map(|l| l.to_string()).collect::<Vec<String>>();
    let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels).unwrap());
    for (a, b) in attacks {
        af.new_attack(&a.to_string(), &b.to_string()).unwrap();
    }
    af
}

/// A 9-clique next to a mutual attack between x and y, where y also attacks z.
fn clique_and_cycle() -> AAFramework<String> {
    let clique = ["k0", "k1", "k2", "k3", "k4", "k5", "k6", "k7", "k8"];
    let mut labels = clique.to_vec();
    labels.extend(["x", "y", "z"]);
    let mut attacks = clique
        .iter()
        .flat_map(|a| clique.iter().filter(move |b| a != *b).map(move |b| (*a, *b)))
        .collect::<Vec<(&str, &str)>>();
    attacks.extend([("x", "y"), ("y", "x"), ("y", "z")]);
    framework(&labels, &attacks)
}

fn scenarios() -> Vec<AAFramework<String>> {
    vec![
        clique_and_cycle(),
        framework(&["a"], &[("a", "a")]),
        framework(&["a", "b", "c"], &[]),
        framework(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]),
        framework(&["a", "b", "c"], &[("b", "a"), ("c", "b")]),
        framework(&["a", "b", "c"], &[("a", "b"), ("b", "a"), ("b", "c")]),
        framework(
            &["a", "b", "c", "d", "e"],
            &[
                ("a", "b"),
                ("b", "a"),
                ("b", "c"),
                ("c", "d"),
                ("d", "e"),
                ("e", "c"),
                ("e", "e"),
            ],
        ),
        framework(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")],
        ),
    ]
}

fn labels(args: &[&Argument<String>]) -> Vec<String> {
    args.iter().map(|a| a.label().to_string()).collect()
}

fn solve_or_skip(
    af: &AAFramework<String>,
    semantics: SemanticsKind,
) -> Option<SemanticsResult<String>> {
    match SemanticsEngine::default().solve(af, semantics) {
        Ok(r) => Some(r),
        Err(EngineError::NoStableExtension) if semantics == SemanticsKind::Stable => None,
        Err(e) => panic!("unexpected error: {}", e),
    }
}

macro_rules! semantics_properties {
    ($($name:ident => $semantics:expr),* $(,)?) => {
        paste! {
            $(
                #[test]
                fn [<test_partition_ $name>]() {
                    for af in scenarios() {
                        let result = match solve_or_skip(&af, $semantics) {
                            Some(r) => r,
                            None => continue,
                        };
                        let mut all = labels(result.accepted());
                        all.append(&mut labels(result.rejected()));
                        all.append(&mut labels(result.undecided()));
                        all.sort();
                        let mut expected = labels(&af.argument_set().iter().collect::<Vec<_>>());
                        expected.sort();
                        assert_eq!(expected, all);
                    }
                }

                #[test]
                fn [<test_determinism_ $name>]() {
                    for af in scenarios() {
                        let engine = SemanticsEngine::default();
                        let extension_labels = || {
                            engine
                                .compute_extensions(&af, $semantics)
                                .map(|v| v.iter().map(|e| labels(e)).collect::<Vec<_>>())
                        };
                        assert_eq!(extension_labels(), extension_labels());
                    }
                }

                #[test]
                fn [<test_independent_arguments_are_accepted_ $name>]() {
                    let af = framework(&["a", "b", "c"], &[]);
                    let result = SemanticsEngine::default().solve(&af, $semantics).unwrap();
                    assert_eq!(vec!["a", "b", "c"], labels(result.accepted()));
                    assert!(result.rejected().is_empty());
                    assert!(result.undecided().is_empty());
                }

                #[test]
                fn [<test_potential_provenance_is_attackers_ $name>]() {
                    for af in scenarios() {
                        let result = match solve_or_skip(&af, $semantics) {
                            Some(r) => r,
                            None => continue,
                        };
                        for arg in af.argument_set().iter() {
                            let mut attackers = af
                                .iter_attacks_to(arg)
                                .map(|att| att.attacker().label().to_string())
                                .collect::<Vec<String>>();
                            attackers.sort();
                            let provenance = result.provenance(arg.label()).unwrap();
                            assert_eq!(attackers, labels(provenance.potential_provenance()));
                        }
                    }
                }

                #[test]
                fn [<test_rejected_have_accepted_attacker_in_tree_ $name>]() {
                    let af = framework(&["a", "b", "c"], &[("b", "a"), ("c", "b")]);
                    let result = SemanticsEngine::default().solve(&af, $semantics).unwrap();
                    for arg in result.rejected() {
                        let tree = result.provenance(arg.label()).unwrap().dispute_tree();
                        assert!(tree
                            .iter_arguments()
                            .skip(1)
                            .any(|a| {
                                result.status_of(a.label()) == Some(ArgumentStatus::Accepted)
                            }));
                    }
                }

                #[test]
                fn [<test_solve_clique_and_cycle_with_default_config_ $name>]() {
                    let af = clique_and_cycle();
                    let result = SemanticsEngine::new(EngineConfig::default())
                        .solve(&af, $semantics)
                        .unwrap();
                    assert_eq!(12, result.iter_provenance().count());
                    for arg in af.argument_set().iter() {
                        let tree = result.provenance(arg.label()).unwrap().dispute_tree();
                        assert!(tree.n_nodes() <= DEFAULT_MAX_DISPUTE_TREE_NODES);
                    }
                }

                #[test]
                fn [<test_defense_chain_ $name>]() {
                    let af = framework(&["a", "b", "c"], &[("b", "a"), ("c", "b")]);
                    let result = SemanticsEngine::default().solve(&af, $semantics).unwrap();
                    assert_eq!(vec!["a", "c"], labels(result.accepted()));
                    assert_eq!(vec!["b"], labels(result.rejected()));
                    assert!(result.undecided().is_empty());
                }
            )*
        }
    };
}

semantics_properties!(
    grounded => SemanticsKind::Grounded,
    complete => SemanticsKind::Complete,
    preferred => SemanticsKind::Preferred,
    stable => SemanticsKind::Stable,
);

macro_rules! self_attack_rejected {
    ($($name:ident => $semantics:expr),* $(,)?) => {
        paste! {
            $(
                #[test]
                fn [<test_self_attack_is_rejected_ $name>]() {
                    let af = framework(&["a"], &[("a", "a")]);
                    let result = SemanticsEngine::default().solve(&af, $semantics).unwrap();
                    assert_eq!(vec!["a"], labels(result.rejected()));
                }
            )*
        }
    };
}

self_attack_rejected!(
    grounded => SemanticsKind::Grounded,
    complete => SemanticsKind::Complete,
    preferred => SemanticsKind::Preferred,
);

#[test]
fn test_self_attack_has_no_stable_extension() {
    let af = framework(&["a"], &[("a", "a")]);
    assert_eq!(
        Some(EngineError::NoStableExtension),
        SemanticsEngine::default()
            .solve(&af, SemanticsKind::Stable)
            .err()
    );
}

#[test]
fn test_clique_and_cycle_statuses() {
    let af = clique_and_cycle();
    let engine = SemanticsEngine::default();
    let complete = engine.solve(&af, SemanticsKind::Complete).unwrap();
    assert_eq!(30, complete.n_extensions());
    assert!(complete.accepted().is_empty());
    let stable = engine.solve(&af, SemanticsKind::Stable).unwrap();
    assert_eq!(18, stable.n_extensions());
    assert!(stable.accepted().is_empty());
    assert!(stable.rejected().is_empty());
}

#[test]
fn test_odd_cycle() {
    let af = framework(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
    let engine = SemanticsEngine::default();
    assert_eq!(
        Some(EngineError::NoStableExtension),
        engine.solve(&af, SemanticsKind::Stable).err()
    );
    let result = engine.solve(&af, SemanticsKind::Grounded).unwrap();
    assert_eq!(vec!["a", "b", "c"], labels(result.undecided()));
}

#[test]
fn test_complete_accepted_is_grounded_extension() {
    let engine = SemanticsEngine::default();
    for af in scenarios() {
        let grounded = engine
            .compute_extensions(&af, SemanticsKind::Grounded)
            .unwrap();
        let complete = engine.solve(&af, SemanticsKind::Complete).unwrap();
        assert_eq!(labels(&grounded[0]), labels(complete.accepted()));
        let grounded_result = engine.solve(&af, SemanticsKind::Grounded).unwrap();
        assert_eq!(labels(&grounded[0]), labels(grounded_result.accepted()));
    }
}

#[test]
fn test_preferred_extensions_are_maximal_complete() {
    let engine = SemanticsEngine::default();
    for af in scenarios() {
        let complete = engine
            .compute_extensions(&af, SemanticsKind::Complete)
            .unwrap();
        let preferred = engine
            .compute_extensions(&af, SemanticsKind::Preferred)
            .unwrap();
        for p in preferred.iter() {
            assert!(complete.contains(p));
            assert!(!complete
                .iter()
                .any(|c| c.len() > p.len() && p.iter().all(|a| c.contains(a))));
        }
    }
}

#[test]
fn test_unknown_argument_in_attack() {
    let mut af = framework(&["a", "b"], &[]);
    assert_eq!(
        Err(EngineError::InvalidFramework(
            FrameworkDefect::UnknownArgument {
                label: "z".to_string()
            }
        )),
        af.new_attack(&"a".to_string(), &"z".to_string())
    );
    assert_eq!(0, af.n_attacks());
}

#[test]
fn test_invalid_description_is_refused() {
    let description: FrameworkDescription = serde_json::from_str(
        r#"{"arguments": [{"id": "a"}], "defeats": [{"from": "a", "to": "b"}]}"#,
    )
    .unwrap();
    assert!(matches!(
        AAFramework::try_from(description),
        Err(EngineError::InvalidFramework(
            FrameworkDefect::UnknownArgument { .. }
        ))
    ));
    let description: FrameworkDescription =
        serde_json::from_str(r#"{"arguments": [{"id": "a"}, {"id": "a"}]}"#).unwrap();
    assert!(matches!(
        AAFramework::try_from(description),
        Err(EngineError::InvalidFramework(
            FrameworkDefect::DuplicateArgument { .. }
        ))
    ));
}
