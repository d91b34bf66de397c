// Centralized error handling for the portal

use thiserror::Error;

/// Errors raised by UI actions.
///
/// Every variant is non-fatal: the handler renders it as a transient notice
/// and leaves all state untouched. Nothing here ever propagates as a fault
/// that ends the session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Blank name or roll number after trimming.
    #[error("Enter both name and number")]
    Validation,

    /// Auth-gated action attempted while logged out.
    #[error("Login first to {action}")]
    AuthRequired { action: &'static str },

    /// The user already holds a club in this category.
    #[error("You already joined \"{club_name}\" in this category.")]
    AlreadyJoined { club_name: String },

    /// The requested club id is not in the roster.
    #[error("No club with id {0}")]
    ClubNotFound(u32),
}
