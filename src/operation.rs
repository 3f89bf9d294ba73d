use std::{fmt::Display, str::FromStr};

use crate::Error;

/// The boolean combination to compute between a subject and a clip polygon.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// The area covered by either polygon.
    Union,
    /// The area covered by both polygons.
    Intersection,
    /// The area of the subject not covered by the clip.
    #[default]
    Difference,
    /// The area of the clip not covered by the subject.
    ReversedDifference,
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "union" => Ok(Self::Union),
            "intersection" => Ok(Self::Intersection),
            "difference" => Ok(Self::Difference),
            "reversed-diff" => Ok(Self::ReversedDifference),
            other => Err(Error::UnsupportedOperation(other.to_string())),
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Union => "union",
            Self::Intersection => "intersection",
            Self::Difference => "difference",
            Self::ReversedDifference => "reversed-diff",
        };

        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Operation};

    #[test]
    fn operation_from_str() {
        struct Test {
            name: &'static str,
            input: &'static str,
            want: Result<Operation, Error>,
        }

        vec![
            Test {
                name: "union",
                input: "union",
                want: Ok(Operation::Union),
            },
            Test {
                name: "intersection",
                input: "intersection",
                want: Ok(Operation::Intersection),
            },
            Test {
                name: "difference",
                input: "difference",
                want: Ok(Operation::Difference),
            },
            Test {
                name: "reversed difference",
                input: "reversed-diff",
                want: Ok(Operation::ReversedDifference),
            },
            Test {
                name: "unknown name",
                input: "xor",
                want: Err(Error::UnsupportedOperation("xor".to_string())),
            },
            Test {
                name: "names are case sensitive",
                input: "Union",
                want: Err(Error::UnsupportedOperation("Union".to_string())),
            },
        ]
        .into_iter()
        .for_each(|test| {
            let got = test.input.parse::<Operation>();
            assert_eq!(got, test.want, "{}", test.name);

            if let Ok(operation) = got {
                assert_eq!(operation.to_string(), test.input, "{}", test.name);
            }
        });
    }

    #[test]
    fn default_operation_is_difference() {
        assert_eq!(Operation::default(), Operation::Difference);
    }

    #[test]
    fn unsupported_operation_message() {
        let err = "xor".parse::<Operation>().unwrap_err();
        assert_eq!(err.to_string(), r#"unsupported operation: "xor""#);
    }
}
