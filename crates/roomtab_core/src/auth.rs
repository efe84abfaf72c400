//! Request-scoped authentication context.
//!
//! # Responsibility
//! - Carry caller identity and a correlation id through one resource-layer
//!   call.
//!
//! # Invariants
//! - Context is constructed per request and never stored in shared state.
//! - Core logic reads it for attribution and log correlation only; catalog
//!   API operations do not gate on authentication.

use uuid::Uuid;

/// Identity and correlation data for one resource-layer call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    request_id: Uuid,
    principal: Option<String>,
}

impl RequestContext {
    /// Context for a caller with a verified identity.
    pub fn authenticated(principal: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            principal: Some(principal.into()),
        }
    }

    /// Context for an unauthenticated caller.
    pub fn anonymous() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            principal: None,
        }
    }

    /// Correlation id stamped on log events for this call.
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn principal(&self) -> Option<&str> {
        self.principal.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }
}
