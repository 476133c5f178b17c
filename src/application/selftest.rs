//! Live self-test against every backend with a credential.

use crate::domain::Backend;

use super::completion::Completer;

/// One canned prompt.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub label: &'static str,
    pub input: &'static str,
}

/// Prompts sent to each backend, in order.
pub const SAMPLES: [Sample; 3] = [
    Sample {
        label: "Simple completion",
        input: "find all pdf files",
    },
    Sample {
        label: "Command correction",
        input: "list files in current dir",
    },
    Sample {
        label: "Complex command",
        input: "compress all log files",
    },
];

/// Result of one sample.
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub sample: Sample,
    /// Completion text; empty on failure.
    pub output: String,
}

impl CaseResult {
    #[must_use]
    pub fn passed(&self) -> bool {
        !self.output.is_empty()
    }
}

/// All samples for one backend.
#[derive(Debug, Clone)]
pub struct BackendReport {
    pub backend: Backend,
    pub cases: Vec<CaseResult>,
}

impl BackendReport {
    /// A backend passes only if every sample produced a completion.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.cases.iter().all(CaseResult::passed)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelfTestReport {
    pub backends: Vec<BackendReport>,
}

impl SelfTestReport {
    /// False when nothing ran or any backend failed.
    #[must_use]
    pub fn passed(&self) -> bool {
        !self.backends.is_empty() && self.backends.iter().all(BackendReport::passed)
    }
}

/// Run [`SAMPLES`] against each backend in turn, one request at a time.
///
/// `on_case` sees every result as soon as it arrives.
pub async fn run(
    completer: &Completer,
    backends: &[Backend],
    mut on_case: impl FnMut(Backend, &CaseResult),
) -> SelfTestReport {
    let mut report = SelfTestReport::default();

    for &backend in backends {
        let mut cases = Vec::with_capacity(SAMPLES.len());
        for sample in SAMPLES {
            let output = completer.complete(backend, sample.input).await;
            let case = CaseResult { sample, output };
            on_case(backend, &case);
            cases.push(case);
        }
        report.backends.push(BackendReport { backend, cases });
    }

    report
}
