use crate::core::explain::{explain, explain_error};
use crate::core::finder::find_solution;
use crate::domain::model::PairPositions;
use crate::utils::error::{PairSumError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_unique_names, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named collection of problems loaded from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemSet {
    pub problem_set: ProblemSetInfo,
    #[serde(default)]
    pub problems: Vec<Problem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemSetInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub name: String,
    pub numbers: Vec<f64>,
    pub target: f64,
    /// 1-based positions the solver is expected to return.
    pub expected: Option<Vec<usize>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Solved and no expectation was given.
    Solved,
    Matched,
    Mismatched,
    /// Failed to solve and no expectation was given.
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProblemReport {
    pub name: String,
    pub positions: Option<PairPositions>,
    pub message: String,
    pub verdict: Verdict,
}

impl ProblemSet {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PairSumError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("problem_set.name", &self.problem_set.name)?;

        if self.problems.is_empty() {
            return Err(PairSumError::ConfigError {
                message: format!("Problem set '{}' has no problems", self.problem_set.name),
            });
        }

        for problem in &self.problems {
            validate_non_empty_string("problems.name", &problem.name)?;

            if let Some(expected) = &problem.expected {
                if expected.len() != 2 {
                    return Err(PairSumError::InvalidConfigValueError {
                        field: format!("problems.{}.expected", problem.name),
                        value: format!("{:?}", expected),
                        reason: "Expected exactly two positions".to_string(),
                    });
                }
            }
        }

        validate_unique_names("problems.name", self.problems.iter().map(|p| p.name.as_str()))
    }

    pub fn solve_all(&self) -> Vec<ProblemReport> {
        self.problems.iter().map(Problem::solve).collect()
    }
}

impl Problem {
    pub fn solve(&self) -> ProblemReport {
        let outcome = find_solution(&self.numbers, self.target);

        let verdict = match (&outcome, &self.expected) {
            (Ok(_), None) => Verdict::Solved,
            (Err(_), None) => Verdict::Failed,
            (Ok(solution), Some(expected)) if solution.positions.as_array()[..] == expected[..] => {
                Verdict::Matched
            }
            _ => Verdict::Mismatched,
        };

        match outcome {
            Ok(solution) => {
                let positions = solution.positions;
                tracing::debug!("Problem '{}' solved: {:?}", self.name, positions.as_array());
                ProblemReport {
                    name: self.name.clone(),
                    positions: Some(positions),
                    message: explain(&solution),
                    verdict,
                }
            }
            Err(e) => {
                tracing::debug!("Problem '{}' not solved: {}", self.name, e);
                ProblemReport {
                    name: self.name.clone(),
                    positions: None,
                    message: explain_error(&e),
                    verdict,
                }
            }
        }
    }
}

impl Validate for ProblemSet {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
[problem_set]
name = "samples"
description = "Worked examples"

[[problems]]
name = "classic"
numbers = [2, 7, 11, 15]
target = 9
expected = [1, 2]

[[problems]]
name = "duplicates"
numbers = [1, 2, 3, 4, 4, 9, 56, 90]
target = 8

[[problems]]
name = "unreachable"
numbers = [1, 2]
target = 10
"#;

    #[test]
    fn test_parse_problem_set() {
        let set = ProblemSet::from_toml_str(SAMPLE).unwrap();

        assert_eq!(set.problem_set.name, "samples");
        assert_eq!(set.problems.len(), 3);
        assert_eq!(set.problems[0].numbers, vec![2.0, 7.0, 11.0, 15.0]);
        assert_eq!(set.problems[0].expected, Some(vec![1, 2]));
        assert!(set.problems[1].expected.is_none());
        assert!(set.validate().is_ok());
    }

    #[test]
    fn test_solve_all() {
        let reports = ProblemSet::from_toml_str(SAMPLE).unwrap().solve_all();

        assert_eq!(reports[0].verdict, Verdict::Matched);
        assert_eq!(reports[1].verdict, Verdict::Solved);
        assert_eq!(reports[1].positions, Some(PairPositions { first: 4, second: 5 }));
        assert_eq!(reports[2].verdict, Verdict::Failed);
        assert!(reports[2].message.starts_with("Error:"));
    }

    #[test]
    fn test_mismatch_is_reported() {
        let set = ProblemSet::from_toml_str(
            r#"
[problem_set]
name = "wrong"

[[problems]]
name = "off-by-one"
numbers = [2, 3, 4]
target = 6
expected = [0, 2]
"#,
        )
        .unwrap();

        assert_eq!(set.solve_all()[0].verdict, Verdict::Mismatched);
    }

    #[test]
    fn test_validation_rejects_bad_sets() {
        let empty = ProblemSet::from_toml_str("[problem_set]\nname = \"empty\"\n").unwrap();
        assert!(matches!(empty.validate(), Err(PairSumError::ConfigError { .. })));

        let duplicated = ProblemSet::from_toml_str(
            r#"
[problem_set]
name = "dup"

[[problems]]
name = "a"
numbers = [1, 2]
target = 3

[[problems]]
name = "a"
numbers = [1, 2]
target = 3
"#,
        )
        .unwrap();
        assert!(duplicated.validate().is_err());

        let bad_expected = ProblemSet::from_toml_str(
            r#"
[problem_set]
name = "bad"

[[problems]]
name = "a"
numbers = [1, 2]
target = 3
expected = [1]
"#,
        )
        .unwrap();
        assert!(bad_expected.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            ProblemSet::from_toml_str("problem_set = ["),
            Err(PairSumError::TomlError(_))
        ));
    }

    #[test]
    fn test_problem_set_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(SAMPLE.as_bytes()).unwrap();

        let set = ProblemSet::from_file(temp_file.path()).unwrap();
        assert_eq!(set.problem_set.name, "samples");
    }
}
