//! One-shot rule registration
//!
//! Installs the cost-analysis rule into the process-wide rule set exactly
//! once, however many callers race on it. Installation is configuration-time
//! work; per-document evaluation never touches the flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock, RwLock};

use crate::analysis::AnalysisOptions;
use crate::observability::{Logger, Severity as LogSeverity};

use super::rule::{CostAnalysisRule, ValidationRule};

static INSTALLED: AtomicBool = AtomicBool::new(false);

fn rule_set() -> &'static RwLock<Vec<Arc<dyn ValidationRule>>> {
    static RULES: OnceLock<RwLock<Vec<Arc<dyn ValidationRule>>>> = OnceLock::new();
    RULES.get_or_init(|| RwLock::new(Vec::new()))
}

/// Installs the cost-analysis rule into the process-wide rule set.
///
/// At most one installation happens per process; later calls (concurrent or
/// sequential) are no-ops. Returns true when this call performed the
/// installation.
pub fn install(options: AnalysisOptions) -> bool {
    if INSTALLED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        Logger::log(LogSeverity::Info, "RULE_INSTALL_SKIPPED", &[]);
        return false;
    }
    let maximum_cost = options.maximum_cost.to_string();
    rule_set()
        .write()
        .expect("rule set lock poisoned")
        .push(Arc::new(CostAnalysisRule::new(options)));
    Logger::log(
        LogSeverity::Info,
        "RULE_INSTALLED",
        &[("maximum_cost", &maximum_cost)],
    );
    true
}

/// Returns a snapshot of the process-wide rule set
pub fn specified_rules() -> Vec<Arc<dyn ValidationRule>> {
    rule_set()
        .read()
        .expect("rule set lock poisoned")
        .clone()
}

