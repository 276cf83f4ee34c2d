use crate::domain::model::{Operand, PairPositions, Solution};
use crate::utils::error::PairSumError;

impl<T: Operand> Solution<T> {
    /// Collects the values at `positions`, or `None` when either position is
    /// outside `1..=sequence.len()`.
    pub fn new(sequence: &[T], positions: PairPositions, target: T) -> Option<Self> {
        let value_at = |position: usize| {
            position
                .checked_sub(1)
                .and_then(|index| sequence.get(index))
                .copied()
        };

        Some(Self {
            positions,
            values: [value_at(positions.first)?, value_at(positions.second)?],
            target,
        })
    }
}

pub fn format_positions(positions: &PairPositions) -> String {
    format!("[{}, {}]", positions.first, positions.second)
}

pub fn explain<T: Operand>(solution: &Solution<T>) -> String {
    let [first_value, second_value] = solution.values;
    let PairPositions { first, second } = solution.positions;
    format!(
        "The sum of {} and {} is {}. Therefore, index₁ = {}, index₂ = {}. We return {}.",
        first_value,
        second_value,
        solution.target,
        first,
        second,
        format_positions(&solution.positions)
    )
}

pub fn explain_error(error: &PairSumError) -> String {
    format!("Error: {}", error.user_friendly_message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::finder::{find_pair, find_solution};

    #[test]
    fn test_explain_found_pair() {
        let numbers = [2.0, 7.0, 11.0, 15.0];
        let positions = find_pair(&numbers, 9.0).unwrap();
        let solution = Solution::new(&numbers, positions, 9.0).unwrap();

        assert_eq!(solution.values, [2.0, 7.0]);
        assert_eq!(format_positions(&positions), "[1, 2]");
        assert_eq!(
            explain(&solution),
            "The sum of 2 and 7 is 9. Therefore, index₁ = 1, index₂ = 2. We return [1, 2]."
        );
    }

    #[test]
    fn test_explain_fractional_values() {
        let numbers = [0.5, 1.25];
        let text = explain(&find_solution(&numbers, 1.75).unwrap());
        assert!(text.starts_with("The sum of 0.5 and 1.25 is 1.75."));
    }

    #[test]
    fn test_solution_rejects_out_of_range_positions() {
        let numbers = [2, 7, 11];

        let zero = PairPositions { first: 0, second: 2 };
        assert!(Solution::new(&numbers, zero, 9).is_none());

        let past_end = PairPositions { first: 1, second: 4 };
        assert!(Solution::new(&numbers, past_end, 9).is_none());

        let last = PairPositions { first: 2, second: 3 };
        assert_eq!(Solution::new(&numbers, last, 18).unwrap().values, [7, 11]);
    }

    #[test]
    fn test_explain_error() {
        let err = find_pair(&[1, 2], 10).unwrap_err();
        assert_eq!(explain_error(&err), "Error: No two numbers add up to 10");

        let err = find_pair(&[5], 5).unwrap_err();
        assert_eq!(explain_error(&err), "Error: Please enter at least two numbers");
    }
}
