//! Configuration mapper — flags → solver configuration.

use crate::args::error::ArgsError;
use crate::args::registry::{ChoiceParam, FlagDef, IntParam, SwitchParam, Validation};
use crate::args::store::FlagStore;
use crate::solver::{LpAlgorithm, NodeSelection, SolverConfiguration, VariableSelection};

/// A complete configuration plus the warnings produced while building it.
#[derive(Debug, Clone)]
pub struct Mapping {
    pub config: SolverConfiguration,
    /// Soft-validation warnings; each names the flag and the offending value.
    pub warnings: Vec<String>,
}

/// Build a solver configuration from the flags in `store`.
///
/// Absent flags keep the defaults of `base`. The first hard-validation
/// failure is returned and no configuration is produced.
pub fn map_configuration(
    store: &FlagStore,
    registry: &[FlagDef],
    base: SolverConfiguration,
) -> Result<Mapping, ArgsError> {
    let mut config = base;
    let mut warnings = Vec::new();

    for def in registry {
        if !store.flag_present(def.name) {
            continue;
        }

        match def.validation {
            Validation::HardRange {
                param,
                min,
                max,
                label,
                requirement,
                exit_code,
            } => {
                let raw = store.string_value(def.name)?;
                let value = store
                    .int_value(def.name)
                    .ok()
                    .filter(|v| (min..=max).contains(v))
                    .ok_or_else(|| ArgsError::BadValue {
                        flag: def.name,
                        label,
                        value: raw.to_string(),
                        requirement,
                        exit_code,
                    })?;
                set_int(&mut config, param, value);
            }
            Validation::SoftRange {
                param,
                min,
                max,
                fallback,
                label,
                requirement,
            } => {
                let value = match store.int_value(def.name) {
                    Ok(v) if (min..=max).contains(&v) => v,
                    _ => {
                        let raw = store.string_value(def.name)?;
                        warnings.push(format!(
                            "Bad {} {} -- should be {}; using {}.",
                            label, raw, requirement, fallback
                        ));
                        fallback
                    }
                };
                set_int(&mut config, param, value);
            }
            Validation::SoftChoice { param, label } => {
                let raw = store.string_value(def.name)?;
                if !set_choice(&mut config, param, raw) {
                    warnings.push(format!("Bad {} {} -- using default.", label, raw));
                }
            }
            Validation::Integer { param } => {
                let value = store.int_value(def.name)?;
                set_int(&mut config, param, value);
            }
            Validation::Presence { param } => set_switch(&mut config, param),
        }
    }

    Ok(Mapping { config, warnings })
}

fn set_int(config: &mut SolverConfiguration, param: IntParam, value: i64) {
    match param {
        // Hard ranges guarantee these three are positive.
        IntParam::TimeLimit => config.time_limit_secs = value.unsigned_abs(),
        IntParam::NodeLimit => config.node_limit = Some(value.unsigned_abs()),
        IntParam::SolutionLimit => config.solution_limit = Some(value.unsigned_abs()),
        IntParam::TargetCost => config.target_cost = value,
        IntParam::InitialUpperBound => config.initial_upper_bound = value,
        IntParam::DependenceLevel => config.dependence_level = value,
        IntParam::Emphasis => config.emphasis = value,
        IntParam::HeuristicFrequency => config.heuristic_frequency = value,
        IntParam::RinsFrequency => config.rins_frequency = value,
        IntParam::TraceLevel => config.trace_level = value,
        IntParam::TraceFrequency => config.trace_frequency = Some(value),
        IntParam::ProbingLevel => config.probing_level = value,
    }
}

/// Returns false when `raw` is not a recognized code for `param`.
fn set_choice(config: &mut SolverConfiguration, param: ChoiceParam, raw: &str) -> bool {
    match param {
        ChoiceParam::NodeSelection => NodeSelection::from_code(raw)
            .map(|v| config.node_selection = v)
            .is_some(),
        ChoiceParam::VariableSelection => VariableSelection::from_code(raw)
            .map(|v| config.variable_selection = v)
            .is_some(),
        ChoiceParam::LpAlgorithm => LpAlgorithm::from_code(raw)
            .map(|v| config.lp_algorithm = v)
            .is_some(),
    }
}

fn set_switch(config: &mut SolverConfiguration, param: SwitchParam) {
    match param {
        SwitchParam::LpOnly => config.lp_only = true,
        SwitchParam::Verify => config.verify = true,
        SwitchParam::PrintSolution => config.print_solution = true,
        SwitchParam::FractionalCuts => config.aggressive_fractional_cuts = true,
        SwitchParam::CoverCuts => config.aggressive_cover_cuts = true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{classify, flag_registry};

    fn map(args: &[&str]) -> Result<Mapping, ArgsError> {
        let mut raw = vec!["prog"];
        raw.extend_from_slice(args);
        map_configuration(
            &classify(raw),
            &flag_registry(),
            SolverConfiguration::default(),
        )
    }

    #[test]
    fn no_flags_yields_defaults() {
        let mapping = map(&[]).unwrap();
        assert_eq!(mapping.config, SolverConfiguration::default());
        assert!(mapping.warnings.is_empty());
    }

    #[test]
    fn base_time_limit_is_kept_when_flag_absent() {
        let mapping = map_configuration(
            &classify(["prog"]),
            &flag_registry(),
            SolverConfiguration::with_time_limit(60),
        )
        .unwrap();
        assert_eq!(mapping.config.time_limit_secs, 60);
    }

    #[test]
    fn bare_hard_flag_is_rejected() {
        // `-time` alone carries the presence value "0".
        let err = map(&["-time"]).unwrap_err();
        assert_eq!(err.exit_code(), 110);
    }

    #[test]
    fn malformed_soft_integer_falls_back() {
        let mapping = map(&["-heur=often"]).unwrap();
        assert_eq!(mapping.config.heuristic_frequency, 0);
        assert_eq!(mapping.warnings.len(), 1);
        assert!(mapping.warnings[0].contains("often"));
    }

    #[test]
    fn soft_range_accepts_lower_bound() {
        let mapping = map(&["-heur=-1", "-rins=-1", "-probing=-1"]).unwrap();
        assert_eq!(mapping.config.heuristic_frequency, -1);
        assert_eq!(mapping.config.rins_frequency, -1);
        assert_eq!(mapping.config.probing_level, -1);
        assert!(mapping.warnings.is_empty());
    }

    #[test]
    fn bare_strategy_flag_warns() {
        let mapping = map(&["-lp"]).unwrap();
        assert_eq!(mapping.config.lp_algorithm, LpAlgorithm::Automatic);
        assert_eq!(mapping.warnings.len(), 1);
    }
}
