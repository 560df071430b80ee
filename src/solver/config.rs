//! Solver configuration handed to the engine.

use crate::solver::strategy::{LpAlgorithm, NodeSelection, VariableSelection};

/// Time limit used when neither the command line nor the settings file sets one.
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 3600;

/// Every tunable engine parameter, with the value used when its flag is absent.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfiguration {
    /// Wall-clock limit for the engine, in seconds.
    pub time_limit_secs: u64,
    /// Branch-and-bound node limit (`None` = engine default, unlimited).
    pub node_limit: Option<u64>,
    /// Stop after this many integer solutions (`None` = unlimited).
    pub solution_limit: Option<u64>,
    /// Stop once a solution this cheap is found; `i64::MIN` means not set.
    pub target_cost: i64,
    /// Assumed upper bound on the optimum; `i64::MAX` means not set.
    pub initial_upper_bound: i64,
    /// Row dependence checking, -1 (automatic) through 3.
    pub dependence_level: i64,
    /// Feasibility vs. optimality emphasis, 0 (balanced) through 4.
    pub emphasis: i64,
    pub node_selection: NodeSelection,
    pub variable_selection: VariableSelection,
    /// Nodes between heuristic runs; -1 never, 0 automatic.
    pub heuristic_frequency: i64,
    /// Nodes between RINS runs; -1 never, 0 automatic.
    pub rins_frequency: i64,
    pub lp_algorithm: LpAlgorithm,
    /// Engine log verbosity, 0 (none) through 5.
    pub trace_level: i64,
    /// Nodes between log lines; only meaningful from trace level 2.
    pub trace_frequency: Option<i64>,
    /// Probing effort, -1 (none) through 3.
    pub probing_level: i64,
    /// Relax integrality and solve the LP only.
    pub lp_only: bool,
    pub verify: bool,
    pub print_solution: bool,
    pub aggressive_fractional_cuts: bool,
    pub aggressive_cover_cuts: bool,
}

impl Default for SolverConfiguration {
    fn default() -> Self {
        Self::with_time_limit(DEFAULT_TIME_LIMIT_SECS)
    }
}

impl SolverConfiguration {
    /// All defaults, with the given time limit.
    pub fn with_time_limit(time_limit_secs: u64) -> Self {
        Self {
            time_limit_secs,
            node_limit: None,
            solution_limit: None,
            target_cost: i64::MIN,
            initial_upper_bound: i64::MAX,
            dependence_level: 0,
            emphasis: 0,
            node_selection: NodeSelection::default(),
            variable_selection: VariableSelection::default(),
            heuristic_frequency: 0,
            rins_frequency: 0,
            lp_algorithm: LpAlgorithm::default(),
            trace_level: 0,
            trace_frequency: None,
            probing_level: 0,
            lp_only: false,
            verify: false,
            print_solution: false,
            aggressive_fractional_cuts: false,
            aggressive_cover_cuts: false,
        }
    }

    pub fn has_target_cost(&self) -> bool {
        self.target_cost != i64::MIN
    }

    pub fn has_initial_upper_bound(&self) -> bool {
        self.initial_upper_bound != i64::MAX
    }

    /// Upper cutoff for the engine: one below the assumed upper bound, so
    /// only strictly better solutions are accepted.
    pub fn cutoff(&self) -> Option<i64> {
        self.has_initial_upper_bound()
            .then(|| self.initial_upper_bound.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_default_to_not_set() {
        let config = SolverConfiguration::default();
        assert_eq!(config.time_limit_secs, 3600);
        assert!(!config.has_target_cost());
        assert!(!config.has_initial_upper_bound());
        assert_eq!(config.cutoff(), None);
    }

    #[test]
    fn cutoff_is_one_below_upper_bound() {
        let config = SolverConfiguration {
            initial_upper_bound: 40,
            ..SolverConfiguration::default()
        };
        assert_eq!(config.cutoff(), Some(39));

        let extreme = SolverConfiguration {
            initial_upper_bound: i64::MIN,
            ..SolverConfiguration::default()
        };
        assert_eq!(extreme.cutoff(), Some(i64::MIN));
    }
}
