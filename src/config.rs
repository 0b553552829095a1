//! Runtime configuration read from environment variables
//!
//! | variable                   | default | meaning                                   |
//! |----------------------------|---------|-------------------------------------------|
//! | `CASH_CARD_PIN`            | `1234`  | secret accepted by [`FixedPin`]           |
//! | `CASH_CARD_PIN_TIMEOUT_MS` | `10000` | time budget for one PIN validation        |
//! | `CASH_CARD_CONCURRENCY`    | `1`     | operations replayed concurrently          |

use std::{env, num::NonZeroUsize, str::FromStr, time::Duration};

use crate::{
    card::{CashCard, DEFAULT_PIN_TIMEOUT},
    errors::ConfigErr,
    pin::{FixedPin, DEFAULT_PIN},
    Pin,
};

const PIN_KEY: &str = "CASH_CARD_PIN";
const PIN_TIMEOUT_KEY: &str = "CASH_CARD_PIN_TIMEOUT_MS";
const CONCURRENCY_KEY: &str = "CASH_CARD_CONCURRENCY";

/// Settings of the replay binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardConfig {
    /// secret PIN of the card validator
    pub pin: Pin,
    /// how long a PIN validation may take before it counts as denied
    pub pin_timeout: Duration,
    /// maximum number of operations in flight
    pub concurrency: NonZeroUsize,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            pin: DEFAULT_PIN,
            pin_timeout: DEFAULT_PIN_TIMEOUT,
            concurrency: NonZeroUsize::MIN,
        }
    }
}

impl CardConfig {
    /// Read configuration from process environment. Unset variables take their default.
    pub fn from_env() -> Result<Self, ConfigErr> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration using `lookup` to resolve variable names
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigErr> {
        let default = Self::default();

        let pin = parse_or(&lookup, PIN_KEY, default.pin)?;
        let pin_timeout = parse_or(&lookup, PIN_TIMEOUT_KEY, default.pin_timeout.as_millis() as u64)
            .map(Duration::from_millis)?;
        let concurrency = parse_or(&lookup, CONCURRENCY_KEY, default.concurrency)?;

        Ok(Self {
            pin,
            pin_timeout,
            concurrency,
        })
    }

    /// Empty card guarded by the configured PIN and timeout
    pub fn card(&self) -> CashCard<FixedPin> {
        CashCard::new(FixedPin::new(self.pin)).with_pin_timeout(self.pin_timeout)
    }
}

fn parse_or<T>(
    lookup: impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigErr>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = match lookup(key) {
        Some(value) => value,
        None => return Ok(default),
    };

    value.trim().parse().map_err(|e: T::Err| ConfigErr {
        key,
        reason: e.to_string(),
        value,
    })
}
