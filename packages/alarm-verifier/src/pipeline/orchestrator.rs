//! Alarm Verification Orchestrator
//!
//! Drives slicing, the fact fixpoint, VC construction and the decision
//! procedure once per unresolved alarm. Alarms are independent: each gets
//! its own sliced graph and dataflow table, dropped when its verdict is in.

use crate::config::{DecisionKind, VerifierConfig};
use crate::errors::Result;
use crate::features::dataflow::WorklistFactSolver;
use crate::features::dug::{DefUseGraph, DefUseGraphBuilder, ReachingDefBuilder};
use crate::features::slicing::{DugSlicer, SliceConfig};
use crate::features::vc::{build_vc, AssumeValid, DecisionProcedure, RejectAll};
use crate::pipeline::report::{AlarmVerdict, VerificationReport};
use crate::shared::models::{filter_unresolved, Alarm, MemoryTable, ProgramPort};
use tracing::{debug, info, warn};

/// Verifies unresolved alarms of the numeric analysis
pub struct AlarmVerifier {
    config: VerifierConfig,
    decision: Box<dyn DecisionProcedure>,
    graph_builder: Box<dyn DefUseGraphBuilder>,
}

impl AlarmVerifier {
    /// Create verifier from a validated configuration
    pub fn new(config: VerifierConfig) -> Result<Self> {
        config.validate()?;
        let decision: Box<dyn DecisionProcedure> = match config.decision {
            DecisionKind::AssumeValid => Box::new(AssumeValid),
            DecisionKind::RejectAll => Box::new(RejectAll),
        };
        Ok(Self {
            config,
            decision,
            graph_builder: Box::new(ReachingDefBuilder::new()),
        })
    }

    /// Replace the decision procedure
    pub fn with_decision(mut self, decision: impl DecisionProcedure + 'static) -> Self {
        self.decision = Box::new(decision);
        self
    }

    /// Replace the base def-use graph builder
    pub fn with_graph_builder(mut self, builder: impl DefUseGraphBuilder + 'static) -> Self {
        self.graph_builder = Box::new(builder);
        self
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Alarms still unresolved after verification
    pub fn verify_all<M>(
        &self,
        program: &dyn ProgramPort,
        input: &MemoryTable<M>,
        output: &MemoryTable<M>,
        alarms: &[Alarm],
    ) -> Vec<Alarm> {
        self.verify_all_with_report(program, input, output, alarms)
            .into_remaining()
    }

    /// Like [`AlarmVerifier::verify_all`], over a caller-supplied def-use graph
    pub fn verify_all_with_graph<M>(
        &self,
        graph: &DefUseGraph,
        program: &dyn ProgramPort,
        input: &MemoryTable<M>,
        output: &MemoryTable<M>,
        alarms: &[Alarm],
    ) -> Vec<Alarm> {
        self.report_on_graph(graph, program, input, output, alarms)
            .into_remaining()
    }

    /// Full per-alarm report
    pub fn verify_all_with_report<M>(
        &self,
        program: &dyn ProgramPort,
        input: &MemoryTable<M>,
        output: &MemoryTable<M>,
        alarms: &[Alarm],
    ) -> VerificationReport {
        if !self.config.enabled {
            return self.skip_all(alarms);
        }
        let graph = self.graph_builder.build(program);
        self.report_on_graph(&graph, program, input, output, alarms)
    }

    fn report_on_graph<M>(
        &self,
        graph: &DefUseGraph,
        program: &dyn ProgramPort,
        input: &MemoryTable<M>,
        _output: &MemoryTable<M>,
        alarms: &[Alarm],
    ) -> VerificationReport {
        if !self.config.enabled {
            return self.skip_all(alarms);
        }

        let unresolved = filter_unresolved(alarms);
        debug!(
            "verifying {} of {} alarms with {}",
            unresolved.len(),
            alarms.len(),
            self.decision.name()
        );

        let mut report = VerificationReport::new(self.decision.name());
        for alarm in unresolved {
            report.push(self.verify_alarm(graph, program, input, alarm));
        }

        info!(
            "{} alarms discharged, {} remaining",
            report.discharged_count(),
            report.remaining_count()
        );
        report
    }

    /// Verify one alarm against the base def-use graph
    pub fn verify_alarm<M>(
        &self,
        graph: &DefUseGraph,
        program: &dyn ProgramPort,
        input: &MemoryTable<M>,
        alarm: &Alarm,
    ) -> AlarmVerdict {
        info!("** verifying {}", alarm);

        let slicer = DugSlicer::with_config(SliceConfig {
            same_procedure_only: self.config.same_procedure_only,
        });
        let sliced = slicer.slice(graph, &alarm.node);

        let fixpoint = WorklistFactSolver::new(&sliced, program)
            .with_max_iterations(self.config.max_iterations)
            .solve();
        if !fixpoint.converged {
            warn!("partial fact table for {}", alarm.node);
        }

        let vc = build_vc(alarm, input, &fixpoint.table);
        if self.config.log_vc {
            info!("{}", vc);
        }

        AlarmVerdict {
            alarm: alarm.clone(),
            discharged: self.decision.is_valid(&vc),
            vc: Some(vc.to_string()),
            slice_size: sliced.node_count(),
            iterations: fixpoint.iterations,
            converged: fixpoint.converged,
        }
    }

    fn skip_all(&self, alarms: &[Alarm]) -> VerificationReport {
        debug!("alarm verification disabled");
        let mut report = VerificationReport::new(self.decision.name());
        for alarm in filter_unresolved(alarms) {
            report.push(AlarmVerdict::skipped(alarm.clone()));
        }
        report
    }
}

impl Default for AlarmVerifier {
    fn default() -> Self {
        Self {
            config: VerifierConfig::default(),
            decision: Box::new(AssumeValid),
            graph_builder: Box::new(ReachingDefBuilder::new()),
        }
    }
}

/// Verify with the default configuration: reaching-definitions def-use
/// graph and the baseline decision procedure.
pub fn verify_all<M>(
    program: &dyn ProgramPort,
    input: &MemoryTable<M>,
    output: &MemoryTable<M>,
    alarms: &[Alarm],
) -> Vec<Alarm> {
    AlarmVerifier::default().verify_all(program, input, output, alarms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::term::Formula;
    use crate::shared::models::{
        AlarmExp, AlarmStatus, Command, Exp, Location, Lval, Node, Program, VarInfo,
    };

    fn n(i: usize) -> Node {
        Node::new("main", i)
    }

    fn array_alarm(node: Node, status: AlarmStatus) -> Alarm {
        Alarm::new(
            node,
            AlarmExp::ArrayExp {
                lval: Lval::var(VarInfo::local("a")),
                index: Exp::var(VarInfo::local("i")),
                loc: Location::new("t.c", 3),
            },
            status,
        )
    }

    fn program() -> Program {
        let mut p = Program::new();
        p.add_cfg_path(&[n(0), n(1)]);
        p.add_command(
            n(1),
            Command::Set {
                lval: Lval::var(VarInfo::local("x")),
                exp: Exp::Lval(Lval::index(
                    VarInfo::local("a"),
                    Exp::var(VarInfo::local("i")),
                )),
            },
        );
        p
    }

    #[test]
    fn test_baseline_discharges_everything() {
        let alarms = vec![array_alarm(n(1), AlarmStatus::Unproven)];
        let tables = MemoryTable::<()>::new();
        assert!(verify_all(&program(), &tables, &tables, &alarms).is_empty());
    }

    #[test]
    fn test_resolved_alarms_are_not_returned() {
        let alarms = vec![
            array_alarm(n(1), AlarmStatus::Proven),
            array_alarm(n(1), AlarmStatus::BotAlarm),
            array_alarm(n(1), AlarmStatus::Unproven),
        ];
        let tables = MemoryTable::<()>::new();
        let verifier = AlarmVerifier::default().with_decision(RejectAll);
        let remaining = verifier.verify_all(&program(), &tables, &tables, &alarms);
        assert_eq!(remaining, vec![alarms[2].clone()]);
    }

    #[test]
    fn test_disabled_keeps_unresolved() {
        let alarms = vec![
            array_alarm(n(1), AlarmStatus::Unproven),
            array_alarm(n(1), AlarmStatus::Proven),
        ];
        let tables = MemoryTable::<()>::new();
        let verifier = AlarmVerifier::new(VerifierConfig::default().enabled(false)).unwrap();
        let report = verifier.verify_all_with_report(&program(), &tables, &tables, &alarms);
        assert_eq!(report.verdicts.len(), 1);
        assert_eq!(report.verdicts[0].vc, None);
        assert_eq!(report.into_remaining(), vec![alarms[0].clone()]);
    }

    #[test]
    fn test_config_selects_decision() {
        let verifier =
            AlarmVerifier::new(VerifierConfig::default().decision(DecisionKind::RejectAll))
                .unwrap();
        let alarms = vec![array_alarm(n(1), AlarmStatus::Unproven)];
        let tables = MemoryTable::<()>::new();
        let report = verifier.verify_all_with_report(&program(), &tables, &tables, &alarms);
        assert_eq!(report.decision, "reject_all");
        assert_eq!(report.remaining_count(), 1);
        assert_eq!(report.verdicts[0].vc.as_deref(), Some("i < arrsize(a)"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(AlarmVerifier::new(VerifierConfig::default().max_iterations(0)).is_err());
    }

    #[test]
    fn test_closure_decision_sees_vc() {
        let verifier = AlarmVerifier::default().with_decision(|vc: &Formula| {
            matches!(vc, Formula::Lt(..))
        });
        let alarms = vec![array_alarm(n(1), AlarmStatus::Unproven)];
        let tables = MemoryTable::<()>::new();
        assert!(verifier
            .verify_all(&program(), &tables, &tables, &alarms)
            .is_empty());
    }
}
