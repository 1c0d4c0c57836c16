use importfix_types::Verdict;
use tracing::debug;

/// The two independent outcomes of one check.
///
/// `analyzer_exit_code` says whether the analyzer itself ran cleanly; `verdict` says whether
/// actionable dependency problems remain after suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signals {
    pub analyzer_exit_code: i32,
    pub verdict: Verdict,
}

impl Signals {
    pub fn agree(self) -> bool {
        (self.analyzer_exit_code == 0) == self.verdict.is_pass()
    }

    /// Exit code for the process. On agreement the analyzer's code is kept as is; on
    /// disagreement the verdict decides between 0 and 1.
    pub fn reconcile(self) -> i32 {
        match (self.agree(), self.verdict) {
            (true, _) => self.analyzer_exit_code,
            (false, Verdict::Pass) => {
                debug!(
                    analyzer_exit_code = self.analyzer_exit_code,
                    "analyzer failed but no actionable findings remain; exiting 0"
                );
                0
            }
            (false, Verdict::Fail) => {
                debug!("analyzer succeeded but findings remain; exiting 1");
                1
            }
        }
    }
}

pub fn reconcile(analyzer_exit_code: i32, verdict: Verdict) -> i32 {
    Signals {
        analyzer_exit_code,
        verdict,
    }
    .reconcile()
}
