//! Analytic European option prices (Black-Scholes).
//!
//! Closed-form prices for European vanilla options on a non-dividend-paying
//! underlying:
//!
//! $$C = S N(d_1) - K e^{-rT} N(d_2)$$
//! $$P = K e^{-rT} N(-d_2) - S N(-d_1)$$
//!
//! where $d_{1,2} = \frac{\ln(S/K) + (r \pm \sigma^2/2)T}{\sigma\sqrt{T}}$.

use bsfd_core::{Rate, Real, Time, Volatility};
use bsfd_math::distributions::normal_cdf;
use std::fmt;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// A call option (right to buy).
    Call,
    /// A put option (right to sell).
    Put,
}

impl OptionType {
    /// +1 for Call, −1 for Put.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Exercise value `max(φ·(S − K), 0)`.
    pub fn intrinsic(self, spot: Real, strike: Real) -> Real {
        (self.sign() * (spot - strike)).max(0.0)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// Black-Scholes price of a European option.
///
/// Returns the intrinsic value when `maturity <= 0`, and the discounted
/// forward intrinsic value when the total standard deviation vanishes.
pub fn black_scholes_price(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    rate: Rate,
    volatility: Volatility,
    maturity: Time,
) -> Real {
    let t = maturity;
    if t <= 0.0 {
        return option_type.intrinsic(spot, strike);
    }

    let df = (-rate * t).exp();
    let std_dev = volatility * t.sqrt();
    if std_dev <= 1e-15 {
        return option_type.intrinsic(spot, strike * df);
    }

    let d1 = ((spot / strike).ln() + (rate + 0.5 * volatility * volatility) * t) / std_dev;
    let d2 = d1 - std_dev;

    let phi = option_type.sign();
    phi * (spot * normal_cdf(phi * d1) - strike * df * normal_cdf(phi * d2))
}
