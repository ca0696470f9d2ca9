use crate::consts::{ARG_COUNT, ARG_TOTAL, PARAM_PRETTY};
use crate::errors::{AppErrors, AppResult};
use std::collections::{HashMap, HashSet};
use std::fmt::{Display, Formatter};

/// The kind of value an argument accepts. Each kind knows how to validate
/// a raw token against itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Float,
    Int,
}

impl ValueKind {
    /// Validates the supplied raw value against this kind.
    ///
    /// # Arguments
    /// * `argument` - The argument name the value was supplied for, used in the error.
    /// * `value` - The raw token to validate.
    ///
    /// # Returns
    /// * `AppResult<()>` - Returns `Ok(())` if the value parses as this kind,
    ///   or `AppErrors::InvalidValue` otherwise.
    fn validate(self, argument: &'static str, value: &str) -> AppResult<()> {
        let valid = match self {
            ValueKind::Float => value.parse::<f64>().is_ok(),
            ValueKind::Int => value.parse::<i64>().is_ok(),
        };
        if valid {
            Ok(())
        } else {
            Err(AppErrors::InvalidValue {
                argument,
                kind: self,
                value: value.to_string(),
            })
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Float => write!(f, "float"),
            ValueKind::Int => write!(f, "integer"),
        }
    }
}

/// One row of the argument allow-list: a recognized key and the kind of
/// value it accepts.
struct ArgSpec {
    name: &'static str,
    kind: ValueKind,
}

const POSSIBLE_ARGUMENTS: &[ArgSpec] = &[
    ArgSpec {
        name: ARG_TOTAL,
        kind: ValueKind::Float,
    },
    ArgSpec {
        name: ARG_COUNT,
        kind: ValueKind::Int,
    },
];

const POSSIBLE_PARAMETERS: &[&str] = &[PARAM_PRETTY];

const REQUIRED_ARGUMENTS: &[&str] = &[ARG_TOTAL, ARG_COUNT];

/// Responsible for parsing arguments and parameters passed to the application.
///
/// In the context of this app, parameters are double-dashed, no-value flags,
/// such as `--pretty`; arguments are key-value pairs sent in succession, such
/// as `-t 1200`, which means the total amount is 1200.
#[derive(Debug)]
pub struct ArgumentResolver {
    arguments: HashMap<&'static str, String>,
    parameters: HashSet<&'static str>,
}

impl ArgumentResolver {
    /// Creates a new argument resolver from the raw command-line tokens.
    ///
    /// Tokens are scanned left to right: a `--` token is matched against the
    /// parameter allow-list, a `-` token against the argument allow-list with
    /// the following token consumed as its value, and anything else is
    /// skipped. After the scan, every required argument must be populated.
    ///
    /// # Arguments
    /// * `tokens` - The raw tokens, typically `std::env::args().skip(1)`.
    ///
    /// # Returns
    /// * `AppResult<ArgumentResolver>` - Returns the populated resolver, or
    ///   an `AppErrors` variant if any token fails validation or a required
    ///   argument is missing.
    pub fn from_tokens<I>(tokens: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let tokens: Vec<String> = tokens.into_iter().collect();
        let mut arguments: HashMap<&'static str, String> = HashMap::new();
        let mut parameters: HashSet<&'static str> = HashSet::new();

        let mut i = 0;
        while i < tokens.len() {
            let token = &tokens[i];
            if token.starts_with("--") {
                let name = POSSIBLE_PARAMETERS
                    .iter()
                    .copied()
                    .find(|&p| p == token.as_str())
                    .ok_or_else(|| AppErrors::UnknownParameter(token.clone()))?;
                parameters.insert(name);
                i += 1;
            } else if token.starts_with('-') {
                let spec = POSSIBLE_ARGUMENTS
                    .iter()
                    .find(|s| s.name == token.as_str())
                    .ok_or_else(|| AppErrors::UnknownArgument(token.clone()))?;
                // The next token is the value, even if it looks like a flag.
                let value = tokens
                    .get(i + 1)
                    .ok_or(AppErrors::MissingValue(spec.name))?;
                spec.kind.validate(spec.name, value)?;
                arguments.insert(spec.name, value.clone());
                i += 2;
            } else {
                // Tokens without a dash prefix are ignored.
                i += 1;
            }
        }

        for &required in REQUIRED_ARGUMENTS {
            if !arguments.contains_key(required) {
                return Err(AppErrors::MissingArgument(required));
            }
        }

        Ok(ArgumentResolver {
            arguments,
            parameters,
        })
    }

    /// Returns the raw string value of the given argument, or `None` if it
    /// was not supplied.
    pub fn argument_value(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).map(String::as_str)
    }

    /// Returns whether the given parameter was present on the command line.
    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameters.contains(name)
    }

    /// Looks up the given argument and parses it as a floating-point value.
    pub fn float_argument(&self, name: &'static str) -> AppResult<f64> {
        let value = self
            .argument_value(name)
            .ok_or(AppErrors::MissingArgument(name))?;
        value.parse().map_err(|_| AppErrors::InvalidValue {
            argument: name,
            kind: ValueKind::Float,
            value: value.to_string(),
        })
    }

    /// Looks up the given argument and parses it as an integer value.
    pub fn int_argument(&self, name: &'static str) -> AppResult<i64> {
        let value = self
            .argument_value(name)
            .ok_or(AppErrors::MissingArgument(name))?;
        value.parse().map_err(|_| AppErrors::InvalidValue {
            argument: name,
            kind: ValueKind::Int,
            value: value.to_string(),
        })
    }
}
