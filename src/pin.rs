//! PIN validation collaborators

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;

use crate::Pin;

/// Secret accepted by [`FixedPin::default`]
pub const DEFAULT_PIN: Pin = 1234;

/// Decide whether a presented PIN is authentic
///
/// Implementations may be slow or remote. The card never trusts them to return in time and bounds
/// every call with its own timeout, see [`validate_within`].
#[async_trait]
pub trait PinValidator: Send + Sync {
    /// `true` when `pin` authorizes the operation
    async fn validate(&self, pin: Pin) -> bool;
}

#[async_trait]
impl<V: PinValidator + ?Sized> PinValidator for Arc<V> {
    async fn validate(&self, pin: Pin) -> bool {
        (**self).validate(pin).await
    }
}

#[async_trait]
impl<'a, V: PinValidator + ?Sized> PinValidator for &'a V {
    async fn validate(&self, pin: Pin) -> bool {
        (**self).validate(pin).await
    }
}

/// Accept exactly one secret PIN.
///
/// Stand-in for a real authentication backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPin {
    secret: Pin,
}

impl FixedPin {
    /// validator accepting only `secret`
    pub fn new(secret: Pin) -> Self {
        Self { secret }
    }
}

impl Default for FixedPin {
    fn default() -> Self {
        Self::new(DEFAULT_PIN)
    }
}

#[async_trait]
impl PinValidator for FixedPin {
    async fn validate(&self, pin: Pin) -> bool {
        pin == self.secret
    }
}

/// Run `validator` for at most `timeout`. Running out of time counts as a denial.
pub async fn validate_within<V: PinValidator + ?Sized>(
    validator: &V,
    pin: Pin,
    timeout: Duration,
) -> bool {
    match tokio::time::timeout(timeout, validator.validate(pin)).await {
        Ok(valid) => valid,
        Err(_elapsed) => {
            tracing::warn!(?timeout, "pin validation timed out");
            false
        }
    }
}

#[cfg(test)]
mod test {
    use super::{validate_within, FixedPin, PinValidator, DEFAULT_PIN};
    use crate::Pin;
    use async_trait::async_trait;
    use std::{sync::Arc, time::Duration};

    struct Hung;

    #[async_trait]
    impl PinValidator for Hung {
        async fn validate(&self, _pin: Pin) -> bool {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn fixed_pin_accepts_only_secret() {
        let v = FixedPin::default();
        assert!(v.validate(DEFAULT_PIN).await);
        assert!(!v.validate(4321).await);

        let v = FixedPin::new(7);
        assert!(v.validate(7).await);
        assert!(!v.validate(DEFAULT_PIN).await);
    }

    async fn check(validator: impl PinValidator, pin: Pin) -> bool {
        validator.validate(pin).await
    }

    #[tokio::test]
    async fn shared_validator_delegates() {
        let v: Arc<dyn PinValidator> = Arc::new(FixedPin::default());
        assert!(check(&v, DEFAULT_PIN).await);
        assert!(!check(v.clone(), 1).await);
        assert!(check(&FixedPin::default(), DEFAULT_PIN).await);
    }

    #[tokio::test(start_paused = true)]
    async fn hung_validator_is_denied_after_timeout() {
        let valid = validate_within(&Hung, DEFAULT_PIN, Duration::from_secs(10)).await;
        assert!(!valid);
    }

    #[tokio::test(start_paused = true)]
    async fn fast_validator_is_not_cut_short() {
        let valid = validate_within(&FixedPin::default(), DEFAULT_PIN, Duration::ZERO).await;
        assert!(valid);
    }
}
