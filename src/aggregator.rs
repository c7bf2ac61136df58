//! Overall status derivation: strict OR-escalation over the eight tools.

use crate::model::{Analyses, NoDataPolicy, OverallLevel, OverallStatus, ToolStatus};

const GOOD_MESSAGE: &str = "No critical security issues detected. Continue monitoring.";
const WARNING_MESSAGE: &str = "Security issues detected. Review and remediation recommended.";
const CRITICAL_MESSAGE: &str = "Critical security issues detected. Immediate action required.";

fn message_for(level: OverallLevel) -> &'static str {
    match level {
        OverallLevel::Good => GOOD_MESSAGE,
        OverallLevel::Warning => WARNING_MESSAGE,
        OverallLevel::Critical => CRITICAL_MESSAGE,
    }
}

/// Derive the overall status from the eight tool summaries.
///
/// The most severe effective status wins: any critical makes the overall
/// critical, else any warning makes it warning. Never a weighted score.
pub fn aggregate(analyses: &Analyses, policy: NoDataPolicy) -> OverallStatus {
    let worst = analyses
        .effective_statuses(policy)
        .into_iter()
        .max()
        .unwrap_or(ToolStatus::Good);

    let level = match worst {
        ToolStatus::Good => OverallLevel::Good,
        ToolStatus::Warning => OverallLevel::Warning,
        ToolStatus::Critical => OverallLevel::Critical,
    };

    OverallStatus {
        level,
        message: message_for(level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChartSummary, IacSummary, QualitySummary};

    /// All eight tools good, with full data where has_data applies.
    fn all_good() -> Analyses {
        let mut analyses = Analyses::default();
        analyses.quality.coverage = Some(95.0);
        analyses.quality.has_data = true;
        analyses.antivirus.threats = Some(0);
        analyses.antivirus.has_data = true;
        analyses.chart.has_data = true;
        analyses.iac.pass_rate = 100.0;
        analyses
    }

    #[test]
    fn test_all_good_yields_good_with_fixed_message() {
        let overall = aggregate(&all_good(), NoDataPolicy::Optimistic);
        assert_eq!(overall.level, OverallLevel::Good);
        assert_eq!(
            overall.message,
            "No critical security issues detected. Continue monitoring."
        );
    }

    #[test]
    fn test_any_warning_yields_warning() {
        let mut analyses = all_good();
        analyses.eol.status = ToolStatus::Warning;

        let overall = aggregate(&analyses, NoDataPolicy::Optimistic);
        assert_eq!(overall.level, OverallLevel::Warning);
        assert_eq!(
            overall.message,
            "Security issues detected. Review and remediation recommended."
        );
    }

    #[test]
    fn test_any_critical_dominates_warnings() {
        let mut analyses = all_good();
        analyses.eol.status = ToolStatus::Warning;
        analyses.secrets.status = ToolStatus::Critical;

        let overall = aggregate(&analyses, NoDataPolicy::Optimistic);
        assert_eq!(overall.level, OverallLevel::Critical);
        assert_eq!(
            overall.message,
            "Critical security issues detected. Immediate action required."
        );
    }

    #[test]
    fn test_escalation_is_monotonic() {
        // Setting any one tool to critical never downgrades the overall level.
        let base = all_good();
        let mutations: Vec<Box<dyn Fn(&mut Analyses)>> = vec![
            Box::new(|a| a.quality.status = ToolStatus::Critical),
            Box::new(|a| a.secrets.status = ToolStatus::Critical),
            Box::new(|a| a.antivirus.status = ToolStatus::Critical),
            Box::new(|a| a.chart.status = ToolStatus::Critical),
            Box::new(|a| a.iac.status = ToolStatus::Critical),
            Box::new(|a| a.container.status = ToolStatus::Critical),
            Box::new(|a| a.vulnerability.status = ToolStatus::Critical),
            Box::new(|a| a.eol.status = ToolStatus::Critical),
        ];

        for mutate in &mutations {
            let mut analyses = base.clone();
            mutate(&mut analyses);
            let overall = aggregate(&analyses, NoDataPolicy::Optimistic);
            assert_eq!(overall.level, OverallLevel::Critical);
        }
    }

    #[test]
    fn test_optimistic_policy_ignores_absent_scanners() {
        // Absence of a scan is not treated as risk under the default policy.
        let mut analyses = all_good();
        analyses.quality = QualitySummary {
            has_data: false,
            status: ToolStatus::Warning,
            ..Default::default()
        };
        analyses.chart = ChartSummary {
            has_data: false,
            status: ToolStatus::Warning,
            ..Default::default()
        };

        let overall = aggregate(&analyses, NoDataPolicy::Optimistic);
        assert_eq!(overall.level, OverallLevel::Good);
    }

    #[test]
    fn test_strict_policy_escalates_absent_scanners() {
        let mut analyses = all_good();
        analyses.quality = QualitySummary {
            has_data: false,
            status: ToolStatus::Warning,
            ..Default::default()
        };

        let overall = aggregate(&analyses, NoDataPolicy::Strict);
        assert_eq!(overall.level, OverallLevel::Warning);
    }

    #[test]
    fn test_tools_without_has_data_are_never_excused() {
        // The policy applies only to tools that expose has_data; a failing
        // IaC scan stays critical under either policy.
        let mut analyses = all_good();
        analyses.iac = IacSummary {
            pass_rate: 0.0,
            status: ToolStatus::Critical,
            ..Default::default()
        };

        for policy in [NoDataPolicy::Optimistic, NoDataPolicy::Strict] {
            let overall = aggregate(&analyses, policy);
            assert_eq!(overall.level, OverallLevel::Critical);
        }
    }
}
