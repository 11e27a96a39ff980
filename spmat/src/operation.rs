//! The three arithmetic operations selectable from the shell

use std::fmt;
use std::str::FromStr;

use spmat_core::{Matrix, MultiplyConfig, ProgressObserver};

use crate::{Error, Result};

/// Operation applied to a pair of matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// Apply the operation to `a` and `b`
    ///
    /// `config` and `observer` only affect multiplication.
    pub fn apply(
        self,
        a: &Matrix,
        b: &Matrix,
        config: &MultiplyConfig,
        observer: Option<&mut dyn ProgressObserver>,
    ) -> Result<Matrix> {
        let result = match self {
            Operation::Add => spmat_core::add(a, b)?,
            Operation::Subtract => spmat_core::subtract(a, b)?,
            Operation::Multiply => spmat_core::multiply_with_config(a, b, config, observer)?,
        };
        Ok(result)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    /// Case-insensitive; surrounding whitespace is ignored
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownOperation(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spmat_core::MatrixError;

    #[test]
    fn test_parse_operation() {
        assert_eq!("add".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!(" Subtract\n".parse::<Operation>().unwrap(), Operation::Subtract);
        assert_eq!("MULTIPLY".parse::<Operation>().unwrap(), Operation::Multiply);

        let err = "divide".parse::<Operation>().unwrap_err();
        assert!(matches!(err, Error::UnknownOperation(ref name) if name == "divide"));
    }

    #[test]
    fn test_display_round_trips() {
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_apply() {
        let a = Matrix::from_entries(2, 2, [(0, 0, 1), (0, 1, 2), (1, 1, 3)]);
        let b = Matrix::from_entries(2, 2, [(0, 0, 4), (1, 0, 5)]);
        let config = MultiplyConfig::default();

        let sum = Operation::Add.apply(&a, &b, &config, None).unwrap();
        assert_eq!(sum.get(1, 0), 5);

        let diff = Operation::Subtract.apply(&a, &b, &config, None).unwrap();
        assert_eq!(diff.get(0, 0), -3);

        let product = Operation::Multiply.apply(&a, &b, &config, None).unwrap();
        assert_eq!(
            product,
            Matrix::from_entries(2, 2, [(0, 0, 14), (1, 0, 15)])
        );
    }

    #[test]
    fn test_apply_propagates_core_errors() {
        let a = Matrix::new(2, 3);
        let config = MultiplyConfig::default();
        let err = Operation::Multiply.apply(&a, &a, &config, None).unwrap_err();
        assert_eq!(
            err.matrix_error(),
            Some(MatrixError::DimensionIncompatible {
                left_cols: 3,
                right_rows: 2
            })
        );
    }
}
