// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use thiserror::Error;
use ticketbooth::{CoreError, RegistryError};
use ticketbooth_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// The `Display` output is the message a front end shows to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A required field was blank.
    #[error("{message}")]
    EmptyInput {
        /// The blank field.
        field: String,
        /// A human-readable prompt.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A registry rule refused the operation.
    #[error("{message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
}

impl ApiError {
    /// Returns the status discriminant reported to callers.
    #[must_use]
    pub fn status(&self) -> &str {
        match self {
            Self::EmptyInput { .. } => "empty_input",
            Self::InvalidInput { .. } => "invalid_input",
            Self::ResourceNotFound { .. } => "not_found",
            Self::DomainRuleViolation { rule, .. } => rule,
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::EmptyUser => ApiError::EmptyInput {
            field: String::from("user"),
            message: err.to_string(),
        },
        DomainError::EmptyReference => ApiError::EmptyInput {
            field: String::from("reference"),
            message: err.to_string(),
        },
        DomainError::InvalidCapacity { .. } => ApiError::InvalidInput {
            field: String::from("capacity"),
            message: err.to_string(),
        },
        DomainError::InvalidExpiryWindow { .. } => ApiError::InvalidInput {
            field: String::from("expiry_window"),
            message: err.to_string(),
        },
        DomainError::InvalidReferenceStrategy(_) => ApiError::InvalidInput {
            field: String::from("reference_strategy"),
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a registry error into an API error.
///
/// Messages follow the wording the booth has always shown at the counter.
#[must_use]
pub fn translate_registry_error(err: RegistryError) -> ApiError {
    match err {
        RegistryError::NotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Ticket"),
            message: String::from("Reference number not found"),
        },
        RegistryError::AlreadyValid { .. } => ApiError::DomainRuleViolation {
            rule: String::from("already_valid"),
            message: String::from("Ticket already validated."),
        },
        RegistryError::Expired { .. } => ApiError::DomainRuleViolation {
            rule: String::from("expired"),
            message: String::from("The ticket has expired"),
        },
        RegistryError::Conflict { .. } => ApiError::DomainRuleViolation {
            rule: String::from("conflict"),
            message: err.to_string(),
        },
        RegistryError::NoAction => ApiError::DomainRuleViolation {
            rule: String::from("no_action"),
            message: String::from("There are no actions to undo."),
        },
    }
}
