//! # Fractional cuts
//!
//! A cut is derived from a row of the tableau in which the basic variable has a fractional value.
//! Every value of the row is split into an integer part and the remaining fraction. The negated
//! fractions form a new constraint that the current solution violates, but which every integer
//! solution satisfies.
use num_traits::One;

use crate::data::number_types::rational::ExactRational;

/// The split of one value of the source row.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FractionalElement {
    name: String,
    integer_part: ExactRational,
    value: ExactRational,
}

impl FractionalElement {
    /// Name of the form `y{v}{j}`, with `xv` the basic variable of the source row and `j` the
    /// column.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The integer part that was split off.
    pub fn integer_part(&self) -> &ExactRational {
        &self.integer_part
    }

    /// The value in the source row.
    pub fn value(&self) -> &ExactRational {
        &self.value
    }

    /// What remains after removing the integer part.
    pub fn fraction(&self) -> ExactRational {
        &self.value - &self.integer_part
    }
}

/// The integer part of a value: rounded towards zero, but `-1` for a negative fraction.
pub fn integer_part(value: &ExactRational) -> ExactRational {
    if value.is_negative() && !value.is_integer() {
        -ExactRational::one()
    } else {
        value.trunc()
    }
}

/// A cut derived from one row of a tableau.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BranchCut {
    fractional_elements: Vec<FractionalElement>,
    cut_expression: Vec<ExactRational>,
}

impl BranchCut {
    /// Derive a cut.
    ///
    /// # Arguments
    ///
    /// * `variable`: Index `v` of the basic variable `xv` of the source row.
    /// * `row`: The source row, starting with the right-hand side.
    pub fn new(variable: usize, row: &[ExactRational]) -> Self {
        let fractional_elements = row.iter()
            .enumerate()
            .map(|(j, value)| FractionalElement {
                name: format!("y{variable}{j}"),
                integer_part: integer_part(value),
                value: value.clone(),
            })
            .collect::<Vec<_>>();
        let cut_expression = fractional_elements.iter()
            .map(|element| -element.fraction())
            .chain(std::iter::once(ExactRational::one()))
            .collect();

        Self { fractional_elements, cut_expression }
    }

    /// How each value of the source row was split.
    pub fn fractional_elements(&self) -> &[FractionalElement] {
        &self.fractional_elements
    }

    /// The new row, starting with its right-hand side and ending with the coefficient `1` of its
    /// own basic variable.
    pub fn cut_expression(&self) -> &[ExactRational] {
        &self.cut_expression
    }
}
