use std::collections::HashSet;

use proptest::prelude::*;
use serde_json::Value;
use taskplan::PlanError;
use taskplan::order_tasks;
use taskplan_test_utils::builders::{TaskValueBuilder, task_list};
use taskplan_test_utils::{ids, position};

/// (id, priority, dependency ids), listed in declaration order.
type TaskSpec = (String, i64, Vec<String>);

// Strategy to generate a valid DAG document.
// Acyclicity comes from only letting task N depend on tasks 0..N-1; the
// declaration order is then shuffled so it is independent of the DAG shape.
fn dag_strategy(max_tasks: usize) -> impl Strategy<Value = Vec<TaskSpec>> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        let deps_strat = proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..3),
            num_tasks,
        );
        let prio_strat = proptest::collection::vec(-2i64..3, num_tasks);
        let order_strat = Just((0..num_tasks).collect::<Vec<_>>()).prop_shuffle();

        (deps_strat, prio_strat, order_strat).prop_map(|(raw_deps, prios, order)| {
            let specs: Vec<TaskSpec> = raw_deps
                .into_iter()
                .zip(prios)
                .enumerate()
                .map(|(i, (potential_deps, prio))| {
                    // Sanitize dependencies: only allow deps < i
                    let mut valid = Vec::new();
                    if i > 0 {
                        for dep_idx in potential_deps {
                            let dep = format!("t{}", dep_idx % i);
                            if !valid.contains(&dep) {
                                valid.push(dep);
                            }
                        }
                    }
                    (format!("t{i}"), prio, valid)
                })
                .collect();
            order.into_iter().map(|i| specs[i].clone()).collect()
        })
    })
}

fn document(specs: &[TaskSpec]) -> Value {
    task_list(
        specs
            .iter()
            .map(|(id, prio, deps)| {
                deps.iter()
                    .fold(TaskValueBuilder::new(id).priority(*prio), |b, d| b.after(d))
            })
            .collect(),
    )
}

proptest! {
    #[test]
    fn every_task_is_placed_once_after_its_dependencies(specs in dag_strategy(12)) {
        let out = ids(&order_tasks(&document(&specs))?);

        let expected: HashSet<&str> = specs.iter().map(|(id, _, _)| id.as_str()).collect();
        let seen: HashSet<&str> = out.iter().map(String::as_str).collect();
        prop_assert_eq!(out.len(), specs.len());
        prop_assert_eq!(seen, expected);

        for (id, _, deps) in &specs {
            for dep in deps {
                prop_assert!(
                    position(&out, dep) < position(&out, id),
                    "{} placed before its dependency {} in {:?}", id, dep, out
                );
            }
        }
    }

    #[test]
    fn roots_are_ordered_by_priority_then_declaration(specs in dag_strategy(12)) {
        let out = ids(&order_tasks(&document(&specs))?);

        let roots: Vec<(usize, &TaskSpec)> = specs
            .iter()
            .enumerate()
            .filter(|(_, (_, _, deps))| deps.is_empty())
            .collect();

        for (decl_a, a) in &roots {
            for (decl_b, b) in &roots {
                let a_first = a.1 > b.1 || (a.1 == b.1 && decl_a < decl_b);
                if a_first {
                    prop_assert!(
                        position(&out, &a.0) < position(&out, &b.0),
                        "root {} should precede root {} in {:?}", a.0, b.0, out
                    );
                }
            }
        }
    }

    #[test]
    fn scheduling_is_deterministic(specs in dag_strategy(10)) {
        let doc = document(&specs);
        prop_assert_eq!(order_tasks(&doc)?, order_tasks(&doc)?);
    }

    #[test]
    fn closing_a_dependency_chain_into_a_loop_is_rejected(specs in dag_strategy(8)) {
        // Make the first root depend on every task, itself included.
        let mut specs = specs;
        let all: Vec<String> = specs.iter().map(|(id, _, _)| id.clone()).collect();
        let Some(root) = specs.iter_mut().find(|(_, _, deps)| deps.is_empty()) else {
            return Ok(());
        };
        root.2 = all;

        let result = order_tasks(&document(&specs));
        let is_cycle = matches!(result, Err(PlanError::CyclicDependency { .. }));
        prop_assert!(is_cycle);
    }
}

#[test]
fn declared_positions_are_stable_for_an_all_equal_independent_set() {
    let specs: Vec<TaskSpec> = (0..20).map(|i| (format!("t{i}"), 1, Vec::new())).collect();
    let out = ids(&order_tasks(&document(&specs)).unwrap());

    let expected: Vec<String> = specs.into_iter().map(|(id, _, _)| id).collect();
    assert_eq!(out, expected);
}
