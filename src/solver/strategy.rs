//! Single-letter search strategy codes.
//!
//! Each strategy is chosen on the command line by one letter (only the first
//! character of the value counts, case-insensitive). Unrecognized letters map
//! to `None` and the caller keeps the `Default` variant.

/// Order in which open branch-and-bound nodes are explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeSelection {
    DepthFirst,
    #[default]
    BestBound,
    BestEstimate,
    AlternateBestEstimate,
}

/// Rule for picking the branching variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VariableSelection {
    MinInfeasibility,
    #[default]
    Automatic,
    MaxInfeasibility,
    PseudoCost,
    StrongBranching,
    PseudoReducedCost,
}

/// Algorithm used for the LP relaxation at each node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LpAlgorithm {
    #[default]
    Automatic,
    Primal,
    Dual,
    Barrier,
    Sifting,
}

const NODE_CODES: [(char, NodeSelection); 4] = [
    ('d', NodeSelection::DepthFirst),
    ('b', NodeSelection::BestBound),
    ('e', NodeSelection::BestEstimate),
    ('f', NodeSelection::AlternateBestEstimate),
];

const VARIABLE_CODES: [(char, VariableSelection); 6] = [
    ('n', VariableSelection::MinInfeasibility),
    ('a', VariableSelection::Automatic),
    ('x', VariableSelection::MaxInfeasibility),
    ('p', VariableSelection::PseudoCost),
    ('s', VariableSelection::StrongBranching),
    ('r', VariableSelection::PseudoReducedCost),
];

const LP_CODES: [(char, LpAlgorithm); 5] = [
    ('a', LpAlgorithm::Automatic),
    ('p', LpAlgorithm::Primal),
    ('d', LpAlgorithm::Dual),
    ('b', LpAlgorithm::Barrier),
    ('f', LpAlgorithm::Sifting),
];

fn lookup<T: Copy>(table: &[(char, T)], raw: &str) -> Option<T> {
    let letter = raw.chars().next()?.to_ascii_lowercase();
    table
        .iter()
        .find(|(code, _)| *code == letter)
        .map(|(_, value)| *value)
}

impl NodeSelection {
    pub fn from_code(raw: &str) -> Option<Self> {
        lookup(&NODE_CODES, raw)
    }

    /// Numeric value of the engine's node selection parameter.
    pub fn engine_value(self) -> i32 {
        match self {
            NodeSelection::DepthFirst => 0,
            NodeSelection::BestBound => 1,
            NodeSelection::BestEstimate => 2,
            NodeSelection::AlternateBestEstimate => 3,
        }
    }
}

impl VariableSelection {
    pub fn from_code(raw: &str) -> Option<Self> {
        lookup(&VARIABLE_CODES, raw)
    }

    /// Numeric value of the engine's variable selection parameter.
    pub fn engine_value(self) -> i32 {
        match self {
            VariableSelection::MinInfeasibility => -1,
            VariableSelection::Automatic => 0,
            VariableSelection::MaxInfeasibility => 1,
            VariableSelection::PseudoCost => 2,
            VariableSelection::StrongBranching => 3,
            VariableSelection::PseudoReducedCost => 4,
        }
    }
}

impl LpAlgorithm {
    pub fn from_code(raw: &str) -> Option<Self> {
        lookup(&LP_CODES, raw)
    }

    /// Numeric value of the engine's node LP algorithm parameter.
    /// Value 3 (network simplex) is not offered on the command line.
    pub fn engine_value(self) -> i32 {
        match self {
            LpAlgorithm::Automatic => 0,
            LpAlgorithm::Primal => 1,
            LpAlgorithm::Dual => 2,
            LpAlgorithm::Barrier => 4,
            LpAlgorithm::Sifting => 5,
        }
    }
}
