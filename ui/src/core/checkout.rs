//! State behind the hero's "add to cart" button.
//!
//! `Checkout` is a plain value kept in a `Signal` by the view. The view calls
//! `begin()` on click, awaits `submit()` in a spawned task, then feeds the
//! outcome back through `settle()` and performs the side effect (navigate or
//! alert).

use super::cart::{CartAddRequest, CartApi, CartError};
use super::catalog::Edition;
use super::config::StoreConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checkout {
    selected: Edition,
    submitting: bool,
}

/// What the call-to-action button should currently show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaState {
    Adding,
    Ready,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// Item is in the cart; send the browser to this path.
    Redirect(String),
    /// Item was not added; tell the user and let them click again.
    Retry(AlertKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Rejected,
    Network,
}

impl AlertKind {
    pub fn from_error(err: &CartError) -> Self {
        if err.is_rejection() {
            AlertKind::Rejected
        } else {
            AlertKind::Network
        }
    }

    /// Localized alert text.
    pub fn message(self) -> String {
        match self {
            AlertKind::Rejected => crate::t!("cart-error-rejected"),
            AlertKind::Network => crate::t!("cart-error-network"),
        }
    }
}

impl Checkout {
    pub fn new(selected: Edition) -> Self {
        Self {
            selected,
            submitting: false,
        }
    }

    pub fn selected(&self) -> Edition {
        self.selected
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn select(&mut self, edition: Edition) {
        self.selected = edition;
    }

    /// Mark a submission in flight and build its request. Returns `None` while
    /// a previous submission is still pending.
    pub fn begin(&mut self, config: &StoreConfig) -> Option<CartAddRequest> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(CartAddRequest::for_edition(self.selected, config.quantity))
    }

    /// Apply a finished submission. A redirect keeps the button disabled
    /// since the page is about to unload.
    pub fn settle(&mut self, outcome: &CheckoutOutcome) {
        if let CheckoutOutcome::Retry(_) = outcome {
            self.submitting = false;
        }
    }

    pub fn cta(&self) -> CtaState {
        if self.submitting {
            CtaState::Adding
        } else {
            CtaState::Ready
        }
    }
}

/// Issue exactly one cart-add request and classify the result.
pub async fn submit<A: CartApi>(
    api: &A,
    request: &CartAddRequest,
    cart_page: &str,
) -> CheckoutOutcome {
    match api.add(request).await {
        Ok(line) => {
            tracing::info!(
                variant = %request.id,
                line = %line.id,
                edition = ?Edition::from_variant_id(&request.id),
                "added to cart"
            );
            CheckoutOutcome::Redirect(cart_page.to_string())
        }
        Err(err) => {
            tracing::error!(variant = %request.id, error = %err, "cart add failed");
            CheckoutOutcome::Retry(AlertKind::from_error(&err))
        }
    }
}
