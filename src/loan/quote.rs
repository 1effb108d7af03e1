use rand::Rng;
use serde::Serialize;

use super::tiers::{LOAN_TIERS, LoanTier};

/// Flat interest charged on every tier, in percent.
pub const INTEREST_RATE_PERCENT: u64 = 10;

/// Figures shown in the loan summary for one tier.
///
/// Money is carried in cents so that the 10% interest stays exact for any
/// whole-shilling amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoanQuote {
    pub amount: u64,
    pub savings_deposit: u64,
    pub interest_cents: u64,
    pub total_repayment_cents: u64,
}

impl LoanQuote {
    pub fn for_tier(tier: LoanTier) -> Self {
        let amount_cents = tier.amount * 100;
        let interest_cents = amount_cents * INTEREST_RATE_PERCENT / 100;
        Self {
            amount: tier.amount,
            savings_deposit: tier.savings_deposit,
            interest_cents,
            total_repayment_cents: amount_cents + interest_cents,
        }
    }

    /// Quote for a menu amount. `None` when the amount is not a tier.
    pub fn for_amount(amount: u64) -> Option<Self> {
        LoanTier::find(amount).map(Self::for_tier)
    }
}

/// Pick the cosmetic "qualifying amount" shown after the offer screen's
/// loading sequence. Uniform over the tier menu.
pub fn sample_qualifying_amount<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    let index = rng.gen_range(0..LOAN_TIERS.len());
    LOAN_TIERS[index].amount
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_interest_is_ten_percent_for_every_tier() {
        for tier in LOAN_TIERS {
            let quote = LoanQuote::for_tier(tier);
            assert_eq!(quote.interest_cents, tier.amount * 10);
            assert_eq!(quote.total_repayment_cents, tier.amount * 110);
        }
    }

    #[test]
    fn test_ten_thousand_tier() {
        let quote = LoanQuote::for_amount(10_000).unwrap();
        assert_eq!(quote.interest_cents, 1_000 * 100);
        assert_eq!(quote.total_repayment_cents, 11_000 * 100);
        assert_eq!(quote.savings_deposit, 300);
    }

    #[test]
    fn test_unknown_amount_has_no_quote() {
        assert!(LoanQuote::for_amount(12_345).is_none());
    }

    #[test]
    fn test_qualifying_amount_covers_whole_menu() {
        let mut rng = StdRng::seed_from_u64(7);
        let menu: HashSet<u64> = LOAN_TIERS.iter().map(|t| t.amount).collect();
        let mut seen = HashSet::new();

        for _ in 0..2_000 {
            let amount = sample_qualifying_amount(&mut rng);
            assert!(menu.contains(&amount), "sampled {} outside the menu", amount);
            seen.insert(amount);
        }

        assert_eq!(seen, menu);
    }
}
