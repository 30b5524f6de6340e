use super::*;

use core::ops::Mul;

/// One basis point is 1/100th of a percent; 10000 basis points are 100%.
pub const MAX_BASIS_POINTS: u64 = 10_000;

/// A fee rate expressed in basis points, guaranteed to lie in [0, 10000].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, SchemaType)]
pub struct BasisPoints(u64);

impl BasisPoints {
    /// Returns `None` for rates above 100%.
    pub fn new(rate: u64) -> Option<Self> {
        if rate <= MAX_BASIS_POINTS {
            Some(Self(rate))
        } else {
            None
        }
    }

    pub fn rate(self) -> u64 {
        self.0
    }
}

impl Mul<Amount> for BasisPoints {
    type Output = Amount;

    /// `floor(amount * rate / 10000)`. The multiplication is widened to
    /// `u128` so an amount near `u64::MAX` cannot overflow; the result always
    /// fits back into `u64` because the rate never exceeds 10000.
    fn mul(self, rhs: Amount) -> Self::Output {
        Amount::from_micro_ccd(
            (rhs.micro_ccd as u128 * self.0 as u128 / MAX_BASIS_POINTS as u128) as u64,
        )
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_std::test_infrastructure::*;

    #[concordium_test]
    fn test_domain_boundaries() {
        claim!(BasisPoints::new(0).is_some());
        claim!(BasisPoints::new(MAX_BASIS_POINTS).is_some());
        claim_eq!(BasisPoints::new(MAX_BASIS_POINTS + 1), None);
        claim_eq!(BasisPoints::new(u64::MAX), None);
    }

    #[concordium_test]
    fn test_zero_rate_always_yields_zero() {
        let rate = BasisPoints::new(0).expect_report("0 bps is valid");
        claim_eq!(rate * Amount::from_micro_ccd(0), Amount::zero());
        claim_eq!(rate * Amount::from_ccd(1_000_000), Amount::zero());
        claim_eq!(rate * Amount::from_micro_ccd(u64::MAX), Amount::zero());
    }

    #[concordium_test]
    fn test_full_rate_is_exact() {
        let rate = BasisPoints::new(MAX_BASIS_POINTS).expect_report("10000 bps is valid");
        claim_eq!(rate * Amount::zero(), Amount::zero());
        claim_eq!(rate * Amount::from_ccd(3), Amount::from_ccd(3));
        // No rounding loss and no overflow even at the maximum representable
        // amount.
        claim_eq!(
            rate * Amount::from_micro_ccd(u64::MAX),
            Amount::from_micro_ccd(u64::MAX)
        );
    }

    #[concordium_test]
    fn test_rounds_down() {
        let rate = BasisPoints::new(250).expect_report("250 bps is valid");
        // 999 * 250 / 10000 = 24.975
        claim_eq!(
            rate * Amount::from_micro_ccd(999),
            Amount::from_micro_ccd(24)
        );
        claim_eq!(rate * Amount::from_micro_ccd(39), Amount::zero());
    }

    #[concordium_test]
    fn test_monotonic_in_rate_and_amount() {
        let low = BasisPoints::new(100).expect_report("100 bps is valid");
        let high = BasisPoints::new(101).expect_report("101 bps is valid");
        let amount = Amount::from_ccd(1_000);

        claim!(low * amount < high * amount);
        claim!(low * amount <= low * Amount::from_ccd(1_001));
    }
}
