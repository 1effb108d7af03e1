use serde::Serialize;

/// One entry of the loan menu: an amount and the savings deposit required for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoanTier {
    /// Loan amount in whole shillings
    pub amount: u64,
    /// Savings deposit due before disbursement, in whole shillings
    pub savings_deposit: u64,
}

/// The loan menu, ordered by strictly increasing amount.
pub const LOAN_TIERS: [LoanTier; 9] = [
    LoanTier { amount: 3_000, savings_deposit: 150 },
    LoanTier { amount: 5_000, savings_deposit: 200 },
    LoanTier { amount: 7_000, savings_deposit: 250 },
    LoanTier { amount: 10_000, savings_deposit: 300 },
    LoanTier { amount: 14_000, savings_deposit: 350 },
    LoanTier { amount: 16_000, savings_deposit: 400 },
    LoanTier { amount: 19_000, savings_deposit: 450 },
    LoanTier { amount: 22_000, savings_deposit: 500 },
    LoanTier { amount: 25_000, savings_deposit: 550 },
];

impl LoanTier {
    /// The tier selected when nothing else has been chosen.
    pub fn first() -> LoanTier {
        LOAN_TIERS[0]
    }

    /// Exact-amount lookup. Returns `None` for amounts that are not on the menu.
    pub fn find(amount: u64) -> Option<LoanTier> {
        LOAN_TIERS.iter().copied().find(|tier| tier.amount == amount)
    }

    /// Position of the tier with this amount in [`LOAN_TIERS`].
    pub fn index_of(amount: u64) -> Option<usize> {
        LOAN_TIERS.iter().position(|tier| tier.amount == amount)
    }

    /// Lookup used by the UI, where every selectable amount comes from the menu.
    ///
    /// A miss means the caller holds an amount that never came from
    /// [`LOAN_TIERS`]; debug builds panic, release builds log and fall back
    /// to the first tier.
    pub fn resolve(amount: u64) -> LoanTier {
        match Self::find(amount) {
            Some(tier) => tier,
            None => {
                debug_assert!(false, "loan amount {} is not on the tier menu", amount);
                log::warn!("Loan amount {} not found on tier menu, using first tier", amount);
                Self::first()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amounts_strictly_increasing() {
        for pair in LOAN_TIERS.windows(2) {
            assert!(pair[0].amount < pair[1].amount);
        }
    }

    #[test]
    fn test_find_exact_amount() {
        let tier = LoanTier::find(10_000).unwrap();
        assert_eq!(tier.savings_deposit, 300);
        assert_eq!(LoanTier::find(10_001), None);
        assert_eq!(LoanTier::index_of(25_000), Some(8));
    }

    #[test]
    fn test_resolve_known_amount() {
        assert_eq!(LoanTier::resolve(22_000).savings_deposit, 500);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not on the tier menu")]
    fn test_resolve_unknown_amount_fails_loudly_in_debug() {
        LoanTier::resolve(4_000);
    }
}
