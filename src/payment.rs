//! Payment stub for plan upgrades.
//!
//! No provider is contacted. A request is validated, then accepted after a
//! fixed processing delay.

use std::time::Duration;

use thiserror::Error;

use crate::domain::{BillingPeriod, Plan, SubscriptionTier};

/// Simulated processing time of a payment.
pub const PROCESSING_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    Stripe,
    PayPal,
}

impl PaymentMethod {
    pub fn label(self) -> &'static str {
        match self {
            Self::Stripe => "Credit Card (Stripe)",
            Self::PayPal => "PayPal",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Stripe => Self::PayPal,
            Self::PayPal => Self::Stripe,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PaymentError {
    #[error("The free plan does not require payment")]
    FreePlan,

    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),
}

/// A plan purchase awaiting confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub tier: SubscriptionTier,
    pub plan_name: &'static str,
    pub amount: f64,
    pub period: BillingPeriod,
    pub method: PaymentMethod,
}

impl PaymentRequest {
    pub fn for_plan(plan: &Plan, period: BillingPeriod, method: PaymentMethod) -> Self {
        Self {
            tier: plan.tier,
            plan_name: plan.name,
            amount: plan.price(period),
            period,
            method,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    pub tier: SubscriptionTier,
    pub plan_name: &'static str,
    pub amount: f64,
    pub method: PaymentMethod,
}

/// Process `request` after `delay`. Always succeeds for paid plans.
pub async fn process_payment(
    request: PaymentRequest,
    delay: Duration,
) -> Result<PaymentReceipt, PaymentError> {
    if request.tier == SubscriptionTier::Free {
        return Err(PaymentError::FreePlan);
    }
    if !request.amount.is_finite() || request.amount <= 0.0 {
        return Err(PaymentError::InvalidAmount(request.amount));
    }

    tracing::info!(
        plan = request.plan_name,
        amount = request.amount,
        method = ?request.method,
        "Processing payment"
    );
    tokio::time::sleep(delay).await;

    Ok(PaymentReceipt {
        tier: request.tier,
        plan_name: request.plan_name,
        amount: request.amount,
        method: request.method,
    })
}
