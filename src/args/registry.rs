//! Flag registry — single source of truth for all flags.
//!
//! Each entry names the solver parameter a flag sets and how its value is
//! validated. The legal flag set and the usage synopsis are derived from it.

/// Integer-valued solver parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntParam {
    TimeLimit,
    NodeLimit,
    SolutionLimit,
    TargetCost,
    InitialUpperBound,
    DependenceLevel,
    Emphasis,
    HeuristicFrequency,
    RinsFrequency,
    TraceLevel,
    TraceFrequency,
    ProbingLevel,
}

/// Strategy parameter set from a single-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceParam {
    NodeSelection,
    VariableSelection,
    LpAlgorithm,
}

/// Boolean switch set by the presence of its flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchParam {
    LpOnly,
    Verify,
    PrintSolution,
    FractionalCuts,
    CoverCuts,
}

/// How a flag's raw value is turned into a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    /// Integer in `[min, max]`; anything else ends the run with `exit_code`.
    HardRange {
        param: IntParam,
        min: i64,
        max: i64,
        label: &'static str,
        requirement: &'static str,
        exit_code: u8,
    },
    /// Integer in `[min, max]`; anything else warns and uses `fallback`.
    SoftRange {
        param: IntParam,
        min: i64,
        max: i64,
        fallback: i64,
        label: &'static str,
        requirement: &'static str,
    },
    /// Single-letter strategy code; unknown letters warn and keep the default.
    SoftChoice {
        param: ChoiceParam,
        label: &'static str,
    },
    /// Any integer; a non-integer value ends the run.
    Integer { param: IntParam },
    /// True iff the flag is present, whatever its value.
    Presence { param: SwitchParam },
}

/// A single flag definition.
#[derive(Debug, Clone)]
pub struct FlagDef {
    /// Name as written after the leading `-`.
    pub name: &'static str,
    pub validation: Validation,
    /// Usage synopsis lines for this flag.
    pub help: &'static [&'static str],
}

/// Build the complete flag registry, in usage order.
pub fn flag_registry() -> Vec<FlagDef> {
    vec![
        FlagDef {
            name: "cost",
            validation: Validation::Integer {
                param: IntParam::TargetCost,
            },
            help: &["-cost=<int>        stop when solution has this cost"],
        },
        FlagDef {
            name: "UB",
            validation: Validation::Integer {
                param: IntParam::InitialUpperBound,
            },
            help: &["-UB=<int>          assume an upper bound with this value exists"],
        },
        FlagDef {
            name: "time",
            validation: Validation::HardRange {
                param: IntParam::TimeLimit,
                min: 1,
                max: i64::MAX,
                label: "timeout value",
                requirement: "int > 0",
                exit_code: 110,
            },
            help: &["-time=<int>        time out (number of seconds)"],
        },
        FlagDef {
            name: "nodes",
            validation: Validation::HardRange {
                param: IntParam::NodeLimit,
                min: 1,
                max: i64::MAX,
                label: "node limit value",
                requirement: "int > 0",
                exit_code: 120,
            },
            help: &["-nodes=<int>       stop after this number of nodes"],
        },
        FlagDef {
            name: "sols",
            validation: Validation::HardRange {
                param: IntParam::SolutionLimit,
                min: 1,
                max: i64::MAX,
                label: "solution limit value",
                requirement: "int > 0",
                exit_code: 130,
            },
            help: &["-sols=<int>        stop after this number of solutions"],
        },
        FlagDef {
            name: "dep",
            validation: Validation::HardRange {
                param: IntParam::DependenceLevel,
                min: -1,
                max: 3,
                label: "dependence indicator",
                requirement: "-1, 0, 1, 2, or 3",
                exit_code: 133,
            },
            help: &[
                "-dep=<int>         extent of checking for row dependence",
                "   -1 = automatic: let the engine choose when to check",
                "    0 = off: do not use the dependency checker (default)",
                "    1 = turn on only at the beginning of preprocessing",
                "    2 = turn on only at the end of preprocessing",
                "    3 = turn on at the beginning and at the end of preprocessing",
            ],
        },
        FlagDef {
            name: "feasible",
            validation: Validation::HardRange {
                param: IntParam::Emphasis,
                min: 0,
                max: 4,
                label: "feasibility indicator",
                requirement: "0, 1, 2, 3, or 4",
                exit_code: 135,
            },
            help: &[
                "-feasible=<int>    extent to which to emphasize feasibility/optimality",
                "    0 = balance optimality and feasibility (default)",
                "    1 = emphasize feasibility over optimality",
                "    2 = emphasize optimality over feasibility",
                "    3 = emphasize moving best bound",
                "    4 = emphasize hidden feasibility",
            ],
        },
        FlagDef {
            name: "nsel",
            validation: Validation::SoftChoice {
                param: ChoiceParam::NodeSelection,
                label: "node selection indicator",
            },
            help: &[
                "-nsel=b/d/e/f      node selection --",
                "    b = best bound (default)",
                "    d = depth-first search",
                "    e = best estimate",
                "    f = alternate best estimate",
            ],
        },
        FlagDef {
            name: "vsel",
            validation: Validation::SoftChoice {
                param: ChoiceParam::VariableSelection,
                label: "variable selection indicator",
            },
            help: &[
                "-vsel=a/x/n/p/r/s  variable selection --",
                "    a = automatic (default)",
                "    x = max infeasibility (cut off lots of branches early)",
                "    n = min infeasibility (look for feasible solution)",
                "    p = pseudo costs",
                "    r = pseudo reduced costs",
                "    s = strong branching",
            ],
        },
        FlagDef {
            name: "heur",
            validation: Validation::SoftRange {
                param: IntParam::HeuristicFrequency,
                min: -1,
                max: i64::MAX,
                fallback: 0,
                label: "heuristic frequency",
                requirement: "int >= -1 (-1 = none, 0 = automatic)",
            },
            help: &[
                "-heur=<int>        nodes between applications of the heuristic",
                "   -1 = never, 0 = automatic (default)",
            ],
        },
        FlagDef {
            name: "rins",
            validation: Validation::SoftRange {
                param: IntParam::RinsFrequency,
                min: -1,
                max: i64::MAX,
                fallback: 0,
                label: "RINS heuristic frequency",
                requirement: "int >= -1 (-1 = none, 0 = automatic)",
            },
            help: &["-rins=<int>        frequency of relaxation-induced neighborhood search"],
        },
        FlagDef {
            name: "lp",
            validation: Validation::SoftChoice {
                param: ChoiceParam::LpAlgorithm,
                label: "LP algorithm indicator",
            },
            help: &[
                "-lp=a/p/d/b/f      LP algorithm --",
                "    a = automatic (default)",
                "    p = primal simplex",
                "    d = dual simplex",
                "    b = barrier method",
                "    f = sifting",
            ],
        },
        FlagDef {
            name: "lp_only",
            validation: Validation::Presence {
                param: SwitchParam::LpOnly,
            },
            help: &["-lp_only           relax integrality and solve as a linear program"],
        },
        FlagDef {
            name: "verify",
            validation: Validation::Presence {
                param: SwitchParam::Verify,
            },
            help: &["-verify            print solution as a string of values (for verification)"],
        },
        FlagDef {
            name: "solution",
            validation: Validation::Presence {
                param: SwitchParam::PrintSolution,
            },
            help: &[
                "-solution          print one variable/value pair per line",
                "                   between lines labeled BeginSolution and EndSolution",
            ],
        },
        FlagDef {
            name: "frac_cuts",
            validation: Validation::Presence {
                param: SwitchParam::FractionalCuts,
            },
            help: &["-frac_cuts         pursue Gomory cuts aggressively"],
        },
        FlagDef {
            name: "covers",
            validation: Validation::Presence {
                param: SwitchParam::CoverCuts,
            },
            help: &["-covers            pursue cover cuts aggressively"],
        },
        FlagDef {
            name: "probing",
            validation: Validation::SoftRange {
                param: IntParam::ProbingLevel,
                min: -1,
                max: 3,
                fallback: 0,
                label: "probe level",
                requirement: "-1 to 3",
            },
            help: &["-probing=[(-1)-3]  probing level, from none to very aggressive (default 0)"],
        },
        FlagDef {
            name: "trace",
            validation: Validation::SoftRange {
                param: IntParam::TraceLevel,
                min: 0,
                max: 5,
                fallback: 0,
                label: "trace level",
                requirement: "0-5",
            },
            help: &[
                "-trace=[0-5]       trace level (default 0), each level adds more --",
                "    0 = none",
                "    1 = show integer feasible solutions",
                "    2 = give a report every t_freq nodes",
                "    3 = show node cuts",
                "    4 = show LP subproblem information at the root",
                "    5 = show LP subproblem information at every node",
            ],
        },
        FlagDef {
            name: "t_freq",
            validation: Validation::Integer {
                param: IntParam::TraceFrequency,
            },
            help: &["-t_freq=<int>      trace frequency (nodes between trace output)"],
        },
    ]
}

/// Names of every registered flag.
pub fn legal_flag_names(registry: &[FlagDef]) -> Vec<&'static str> {
    registry.iter().map(|def| def.name).collect()
}
