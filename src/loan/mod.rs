//! Loan domain: the fixed tier menu, quotes, currency display and the
//! wizard step state machine.

pub mod currency;
pub mod quote;
pub mod tiers;
pub mod wizard;

pub use currency::format_kes;
pub use quote::{INTEREST_RATE_PERCENT, LoanQuote, sample_qualifying_amount};
pub use tiers::{LOAN_TIERS, LoanTier};
pub use wizard::{WizardState, WizardStep};
