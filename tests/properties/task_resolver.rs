//! Property tests for task resolution.

use std::collections::BTreeSet;

use proptest::prelude::*;

use cosmo::{ResolveError, Server, ServerSet, StepsView, Task};

const TASK_NAMES: &[&str] = &["deploy", "build", "restart", "backup", "logs"];

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9]{0,5}").unwrap()
}

/// Server sets with unique server names and a random subset of task names.
fn server_set() -> impl Strategy<Value = ServerSet> {
    proptest::collection::btree_set(name(), 0..6)
        .prop_flat_map(|names| {
            let n = names.len();
            (
                Just(names),
                proptest::collection::vec(
                    proptest::collection::vec(any::<bool>(), TASK_NAMES.len()),
                    n,
                ),
            )
        })
        .prop_map(|(names, picks)| {
            names
                .into_iter()
                .zip(picks)
                .map(|(server, picks)| {
                    TASK_NAMES
                        .iter()
                        .zip(picks)
                        .filter(|(_, keep)| *keep)
                        .fold(Server::new(&server), |s, (task, _)| {
                            s.with_task(
                                Task::new(*task, &server)
                                    .with_local([format!("{task} on {server}")]),
                            )
                        })
                })
                .collect::<ServerSet>()
        })
}

fn definers(set: &ServerSet, task: &str) -> Vec<String> {
    set.servers()
        .iter()
        .filter(|s| s.task(task).is_some())
        .map(|s| s.name.clone())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Resolution is a pure function of its inputs.
    #[test]
    fn property_resolution_is_deterministic(
        set in server_set(),
        task in proptest::sample::select(TASK_NAMES),
        filter in proptest::option::of(name()),
    ) {
        let first = set.find_task(task, filter.as_deref());
        let second = set.find_task(task, filter.as_deref());
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: Unfiltered lookups succeed iff exactly one server defines the task.
    #[test]
    fn property_unfiltered_matches_definer_count(
        set in server_set(),
        task in proptest::sample::select(TASK_NAMES),
    ) {
        let definers = definers(&set, task);
        match set.find_task(task, None) {
            Ok(resolved) => {
                prop_assert_eq!(definers.len(), 1);
                prop_assert_eq!(resolved.server_name, definers[0].as_str());
                prop_assert_eq!(resolved.task.server_name.as_str(), resolved.server_name);
            }
            Err(ResolveError::TaskNotFound { server: None, .. }) => {
                prop_assert!(definers.is_empty());
            }
            Err(ResolveError::AmbiguousTask { servers, .. }) => {
                prop_assert!(definers.len() > 1);
                prop_assert_eq!(servers, definers);
            }
            Err(other) => prop_assert!(false, "unexpected error: {:?}", other),
        }
    }

    /// PROPERTY: An unknown filter is always ServerNotFound, whatever the task.
    #[test]
    fn property_unknown_filter_is_server_not_found(
        set in server_set(),
        task in proptest::sample::select(TASK_NAMES),
        filter in name(),
    ) {
        let known: BTreeSet<_> = set.servers().iter().map(|s| s.name.clone()).collect();
        prop_assume!(!known.contains(&filter));

        prop_assert_eq!(
            set.find_task(task, Some(&filter)),
            Err(ResolveError::ServerNotFound { server: filter.clone() })
        );
    }

    /// PROPERTY: A known filter returns that server's task or TaskNotFound.
    #[test]
    fn property_known_filter_never_ambiguous(
        set in server_set(),
        task in proptest::sample::select(TASK_NAMES),
        idx in any::<proptest::sample::Index>(),
    ) {
        prop_assume!(!set.is_empty());
        let server = &set.servers()[idx.index(set.len())];

        match set.find_task(task, Some(&server.name)) {
            Ok(resolved) => prop_assert_eq!(resolved.server_name, server.name.as_str()),
            Err(err) => {
                prop_assert!(server.task(task).is_none());
                let is_task_not_found = matches!(err, ResolveError::TaskNotFound { .. });
                prop_assert!(is_task_not_found);
            }
        }
    }

    /// PROPERTY: Rendering keeps every step in declared order.
    #[test]
    fn property_render_preserves_step_order(
        steps in proptest::collection::vec("[a-z][a-z ]{0,15}", 1..8),
    ) {
        let set = ServerSet::new(vec![
            Server::new("web1").with_task(Task::new("deploy", "web1").with_local(steps.clone())),
        ]);
        let rendered = StepsView::new(set.find_task("deploy", None).unwrap()).render();

        let expected: Vec<String> = steps.iter().map(|s| format!("  {}", s)).collect();
        let actual: Vec<String> = rendered
            .lines()
            .skip_while(|l| *l != "local")
            .skip(1)
            .map(str::to_string)
            .collect();
        prop_assert_eq!(actual, expected);
        prop_assert!(!rendered.contains("\nremote\n"));
    }
}
