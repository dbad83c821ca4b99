// SPDX-License-Identifier: Apache-2.0

/// The evaluator's one configurable knob. Partial dataset results are never
/// exposed, so `fail_fast` does not
/// change whether a statement with a row error succeeds — it only changes
/// how much diagnostic detail [`crate::Evaluator::validate`] collects
/// before reporting that failure: stop at the first offending row
/// (`true`, the default) or keep scanning the remaining rows so the
/// reported error lists every failure found in one pass (`false`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorConfig {
    pub fail_fast: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self { fail_fast: true }
    }
}
