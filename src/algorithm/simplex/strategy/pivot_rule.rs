//! # Pivot rules
//!
//! Strategies for choosing the column that enters the basis in the primal Simplex method.
use crate::algorithm::tableau::Tableau;
use crate::data::number_types::big_m::BigM;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, the row is found with the minimum ratio test. That decision
/// is made independent of the strategy.
pub trait PivotRule {
    /// Create a new instance.
    fn new(tableau: &Tableau) -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// A column with a reduced cost that improves the objective together with that reduced cost,
    /// or `None` if the tableau is optimal.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, BigM)>;
}

/// Simply pivot on the first column which has an improving reduced cost.
pub struct FirstProfitable;

impl PivotRule for FirstProfitable {
    fn new(_tableau: &Tableau) -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, BigM)> {
        let objective = tableau.objective();

        (1..tableau.nr_columns())
            .map(|column| (column, &tableau.reduced_costs()[column]))
            .find(|(_, cost)| objective.is_improving(cost))
            .map(|(column, cost)| (column, cost.clone()))
    }
}

/// Pivot on the column with the most improving reduced cost, also known as Dantzig's rule.
///
/// That is the most negative reduced cost when maximizing and the most positive one when
/// minimizing. On a tie, the leftmost column is chosen.
pub struct SteepestDescentAlongVariable;

impl PivotRule for SteepestDescentAlongVariable {
    fn new(_tableau: &Tableau) -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, BigM)> {
        let objective = tableau.objective();

        let mut best: Option<(usize, &BigM)> = None;
        for (column, cost) in tableau.reduced_costs().iter().enumerate().skip(1) {
            if !objective.is_improving(cost) {
                continue;
            }
            let better = match best {
                None => true,
                // Any improving cost has the same sign, so the largest magnitude is the most
                // negative cost when maximizing and the most positive one when minimizing.
                Some((_, current)) => objective.is_improving(&(cost.clone() - current)),
            };
            if better {
                best = Some((column, cost));
            }
        }

        best.map(|(column, cost)| (column, cost.clone()))
    }
}
