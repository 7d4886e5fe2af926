// Analysis Engine
//
// Evaluates call sites against the container access rule, in parallel.
// Evaluations are independent and share only the read-only project service
// map, so no coordination is needed; output order follows input order
// regardless of scheduling.

use rayon::prelude::*;

use crate::diagnostics::{AnalysisResult, Diagnostic};
use crate::reflection::{AttributeReader, TypeOracle};
use crate::rules::{CallSite, ContainerAccessRule};
use crate::symfony::ServiceMap;

use super::sink::DiagnosticSink;

/// Drives the rule over a batch of call sites.
pub struct AnalysisEngine<'a> {
    service_map: &'a ServiceMap,
    oracle: &'a (dyn TypeOracle + Sync),
    attribute_reader: &'a (dyn AttributeReader + Sync),
}

impl<'a> AnalysisEngine<'a> {
    pub fn new(
        service_map: &'a ServiceMap,
        oracle: &'a (dyn TypeOracle + Sync),
        attribute_reader: &'a (dyn AttributeReader + Sync),
    ) -> Self {
        Self {
            service_map,
            oracle,
            attribute_reader,
        }
    }

    /// Evaluates every call site; findings keep the input order. The first
    /// configuration violation aborts the run.
    pub fn analyze(&self, calls: &[CallSite]) -> AnalysisResult<Vec<Diagnostic>> {
        let per_call: Vec<Vec<Diagnostic>> = calls
            .par_iter()
            .map(|call| {
                // The rule is stateless; each evaluation gets its own view of
                // the shared collaborators.
                let rule = ContainerAccessRule::new(
                    self.service_map,
                    self.oracle,
                    self.attribute_reader,
                );
                rule.process_call(call)
            })
            .collect::<AnalysisResult<_>>()?;
        Ok(per_call.into_iter().flatten().collect())
    }

    /// Like [`analyze`](Self::analyze), reporting into a sink.
    pub fn analyze_into(
        &self,
        calls: &[CallSite],
        sink: &mut dyn DiagnosticSink,
    ) -> AnalysisResult<()> {
        for diagnostic in self.analyze(calls)? {
            sink.report(diagnostic);
        }
        Ok(())
    }
}
