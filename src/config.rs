/// Which unassigned slot the search fills next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableOrder {
    /// First unassigned slot in puzzle order.
    Enumeration,
    /// Fewest remaining values, ties broken by most unassigned neighbors.
    MinimumRemainingValues,
}

/// In which order the candidates of a slot are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOrder {
    /// Domain order, i.e. word list order.
    Domain,
    /// Values ruling out the fewest neighbor values first.
    LeastConstraining,
}

/// What happens to the domains after each tentative assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inference {
    /// Domains stay as preprocessing left them.
    None,
    /// Re-run AC-3 from the assigned slot on a per-branch copy of the domains.
    MaintainArcConsistency,
}

/// How much of the assignment is re-checked after each tentative assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsistencyCheck {
    /// Every pair of assigned slots.
    Full,
    /// Only pairs involving the slot just assigned.
    Incremental,
}

/// How the backtracking search is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Recursive,
    /// Heap-allocated frames instead of the call stack.
    Iterative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub variable_order: VariableOrder,
    pub value_order: ValueOrder,
    pub inference: Inference,
    pub check: ConsistencyCheck,
    pub strategy: Strategy,
}

impl Default for SolverConfig {
    fn default() -> SolverConfig {
        SolverConfig {
            variable_order: VariableOrder::Enumeration,
            value_order: ValueOrder::Domain,
            inference: Inference::None,
            check: ConsistencyCheck::Full,
            strategy: Strategy::Recursive,
        }
    }
}

impl SolverConfig {
    /// MRV and least-constraining-value ordering with maintained arc
    /// consistency.
    pub fn heuristic() -> SolverConfig {
        SolverConfig {
            variable_order: VariableOrder::MinimumRemainingValues,
            value_order: ValueOrder::LeastConstraining,
            inference: Inference::MaintainArcConsistency,
            check: ConsistencyCheck::Incremental,
            strategy: Strategy::Recursive,
        }
    }

    pub fn with_strategy(self, strategy: Strategy) -> SolverConfig {
        SolverConfig { strategy, ..self }
    }
}
