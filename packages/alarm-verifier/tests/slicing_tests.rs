//! Slicing and fixpoint over graphs built from programs

mod common;

use alarm_verifier::features::dataflow::WorklistFactSolver;
use alarm_verifier::features::dug::{DefUseGraphBuilder, ReachingDefBuilder};
use alarm_verifier::features::slicing::{DugSlicer, SliceConfig};
use alarm_verifier::shared::models::Node;
use alarm_verifier::{AlarmVerifier, Formula, MemoryTable, Term, VerificationReport};
use common::*;
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

#[test]
fn test_slice_from_reaching_definitions() {
    // 0: a = alloc([5])   1: j = 3   2: i = 0   3: x = a[i]
    let program = ProgramBuilder::new()
        .alloc(0, "a", int(5))
        .assign(1, "j", int(3))
        .assign(2, "i", int(0))
        .read_index(3, "x", "a", var("i"))
        .path(&[0, 1, 2, 3])
        .build();

    let base = ReachingDefBuilder::new().build(&program);
    let nodes = DugSlicer::new().slice_nodes(&base, &n(3));
    assert_eq!(nodes, BTreeSet::from([n(0), n(2), n(3)]));

    let sliced = DugSlicer::new().slice(&base, &n(3));
    let table = WorklistFactSolver::new(&sliced, &program).solve().table;
    assert_eq!(
        table.facts_at(&n(3)).iter().cloned().collect::<Vec<_>>(),
        vec![
            Formula::eq(Term::var("i"), Term::int(0)),
            Formula::eq(Term::array_size(Term::var("a")), Term::int(5)),
        ]
    );
    assert!(table.get(&n(1)).is_none(), "j = 3 is outside the slice");
}

#[test]
fn test_hand_built_graph() {
    let program = ProgramBuilder::new()
        .alloc(0, "a", int(4))
        .read_index(1, "x", "a", var("i"))
        .build();
    let alarms = vec![array_alarm(n(1), "a", var("i"))];
    let tables = MemoryTable::<()>::new();

    let never = |_: &Formula| false;
    let verifier = AlarmVerifier::default().with_decision(never);

    // No CFG edge, so only the supplied graph connects the allocation.
    let connected = graph(&[(n(0), n(1))]);
    let remaining =
        verifier.verify_all_with_graph(&connected, &program, &tables, &tables, &alarms);
    assert_eq!(remaining, alarms);

    let report: VerificationReport =
        verifier.verify_all_with_report(&program, &tables, &tables, &alarms);
    assert_eq!(report.verdicts[0].vc.as_deref(), Some("i < arrsize(a)"));
    assert_eq!(report.verdicts[0].slice_size, 1);
}

#[test]
fn test_unrestricted_slice_crosses_procedures() {
    let base = graph(&[
        (Node::new("init", 0), n(0)),
        (n(0), n(1)),
    ]);
    let local = DugSlicer::new().slice_nodes(&base, &n(1));
    let global = DugSlicer::with_config(SliceConfig {
        same_procedure_only: false,
    })
    .slice_nodes(&base, &n(1));

    assert_eq!(local, BTreeSet::from([n(0), n(1)]));
    assert_eq!(global, BTreeSet::from([Node::new("init", 0), n(0), n(1)]));
}

#[test]
fn test_report_records_solver_statistics() {
    let program = ProgramBuilder::new()
        .assign(0, "i", int(0))
        .assume(1, alarm_verifier::Exp::lt(var("i"), var("n")))
        .read_index(2, "x", "a", var("i"))
        .assign(3, "i", alarm_verifier::Exp::plus(var("i"), int(1)))
        .path(&[0, 1, 2, 3])
        .path(&[3, 1])
        .build();
    let alarms = vec![array_alarm(n(2), "a", var("i"))];
    let tables = MemoryTable::<()>::new();

    let report = AlarmVerifier::default().verify_all_with_report(&program, &tables, &tables, &alarms);
    let verdict = &report.verdicts[0];
    assert!(verdict.discharged);
    assert!(verdict.converged);
    assert_eq!(verdict.slice_size, 4);
    assert!(verdict.iterations >= 4);
    assert_eq!(report.discharged_count(), 1);

    let json = report.to_json().unwrap();
    assert!(json.contains("\"discharged\": true"));
}
