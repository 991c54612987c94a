use crate::domain::{BillingPeriod, Plan, SubscriptionTier};
use crate::payment::{PaymentMethod, PaymentRequest};

/// Outcome of choosing a plan card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanChoice {
    /// The free plan has nothing to buy.
    Free,
    /// Already on this plan.
    Current,
    /// Payment dialog opened.
    Checkout,
}

/// Payment dialog state.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkout {
    pub plan: Plan,
    pub method: PaymentMethod,
    pub processing: bool,
}

#[derive(Debug, Default)]
pub struct SubscriptionView {
    pub period: BillingPeriod,
    /// Highlighted plan card.
    pub cursor: usize,
    pub checkout: Option<Checkout>,
}

impl SubscriptionView {
    /// Open the payment dialog for `plan` unless it is free or already held.
    pub fn choose(&mut self, plan: &Plan, current: SubscriptionTier) -> PlanChoice {
        if plan.is_free() {
            return PlanChoice::Free;
        }
        if plan.tier == current {
            return PlanChoice::Current;
        }
        self.checkout = Some(Checkout {
            plan: plan.clone(),
            method: PaymentMethod::default(),
            processing: false,
        });
        PlanChoice::Checkout
    }

    /// Mark the open checkout as processing and build its payment request.
    ///
    /// Returns `None` when no dialog is open or a payment is already running.
    pub fn begin_payment(&mut self) -> Option<PaymentRequest> {
        let period = self.period;
        let checkout = self.checkout.as_mut().filter(|c| !c.processing)?;
        checkout.processing = true;
        Some(PaymentRequest::for_plan(
            &checkout.plan,
            period,
            checkout.method,
        ))
    }

    /// Close the dialog. A running payment keeps its dialog open.
    pub fn cancel(&mut self) -> bool {
        match &self.checkout {
            Some(c) if c.processing => false,
            Some(_) => {
                self.checkout = None;
                true
            }
            None => false,
        }
    }

    pub fn finish(&mut self) {
        self.checkout = None;
    }

    pub fn reset_transient(&mut self) {
        self.checkout = None;
    }
}

/// The plan the user currently holds: their tier, or free when signed out.
pub fn current_tier(user_tier: Option<SubscriptionTier>) -> SubscriptionTier {
    user_tier.unwrap_or_default()
}
