//! Construction error types and diagnostics.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::core::{ShapeKind, ValidationError};
use crate::resolver::path::Arity;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Coarse classification of a [`ConstructionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionErrorKind {
    UnknownVariant,
    NoCompatibleConstructor,
    Validation,
}

/// Error while resolving and invoking a construction path.
#[derive(Debug, Clone, PartialEq, Error, MietteDiagnostic)]
pub enum ConstructionError {
    #[error("unknown shape variant `{name}`")]
    #[diagnostic(code(shape3d::construct::unknown_variant))]
    UnknownVariant { name: String },

    #[error(
        "no compatible constructor for `{kind}` with {requested} dimension(s) (accepts: {})",
        join_arities(.available)
    )]
    #[diagnostic(code(shape3d::construct::no_compatible_constructor))]
    NoCompatibleConstructor {
        kind: ShapeKind,
        requested: usize,
        available: Vec<Arity>,
    },

    /// The selected path rejected its input. Passed through unchanged.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),
}

impl ConstructionError {
    pub fn kind(&self) -> ConstructionErrorKind {
        match self {
            ConstructionError::UnknownVariant { .. } => ConstructionErrorKind::UnknownVariant,
            ConstructionError::NoCompatibleConstructor { .. } => {
                ConstructionErrorKind::NoCompatibleConstructor
            }
            ConstructionError::Validation(_) => ConstructionErrorKind::Validation,
        }
    }

    /// The validation failure behind this error, if that is what it is.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            ConstructionError::Validation(e) => Some(e),
            _ => None,
        }
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ConstructionError::UnknownVariant { name } => {
                Diagnostic::error(format!("unknown shape variant `{}`", name))
                    .with_context(format!(
                        "known variants: {}",
                        ShapeKind::ALL
                            .iter()
                            .map(|k| k.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ))
                    .with_suggestion(suggestions::UNKNOWN_KIND)
            }

            ConstructionError::NoCompatibleConstructor {
                kind,
                requested,
                available,
            } => {
                let mut diag = Diagnostic::error(format!(
                    "no constructor for `{}` takes {} dimension(s)",
                    kind, requested
                ));

                if available.is_empty() {
                    diag = diag.with_context(format!(
                        "`{}` has no construction path for this request",
                        kind
                    ));
                } else {
                    diag = diag.with_context(format!(
                        "`{}` accepts {} dimension(s)",
                        kind,
                        join_arities(available)
                    ));
                }

                diag.with_suggestion(format!(
                    "Run `shape3d kinds` to see the dimensions `{}` expects",
                    kind
                ))
            }

            ConstructionError::Validation(e) => {
                let diag = Diagnostic::error(e.to_string());
                match e {
                    ValidationError::InvalidName { .. } => {
                        diag.with_suggestion("Pass a non-blank `--name`")
                    }
                    ValidationError::InvalidDimension { field, .. } => diag.with_suggestion(
                        format!("Use a finite, non-negative value for `{}`", field),
                    ),
                    _ => diag,
                }
            }
        }
    }
}

fn join_arities(arities: &[Arity]) -> String {
    if arities.is_empty() {
        return "none".to_string();
    }
    arities
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(" or ")
}
