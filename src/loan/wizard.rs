//! Step sequencing for the loan application.

/// The six stages of the application, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardStep {
    #[default]
    PersonalDetails,
    AdditionalInfo,
    Guarantors,
    LoanOffer,
    Payment,
    Confirmation,
}

impl WizardStep {
    pub const ALL: [WizardStep; 6] = [
        WizardStep::PersonalDetails,
        WizardStep::AdditionalInfo,
        WizardStep::Guarantors,
        WizardStep::LoanOffer,
        WizardStep::Payment,
        WizardStep::Confirmation,
    ];

    pub const LAST_INDEX: usize = Self::ALL.len() - 1;

    pub fn index(self) -> usize {
        self as usize
    }

    /// Step at `index`, clamped into `0..=LAST_INDEX`.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::LAST_INDEX)]
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::PersonalDetails => "Personal Details",
            WizardStep::AdditionalInfo => "Additional Info",
            WizardStep::Guarantors => "Guarantors",
            WizardStep::LoanOffer => "Loan Offer",
            WizardStep::Payment => "Payment",
            WizardStep::Confirmation => "Confirmation",
        }
    }

    pub fn titles() -> Vec<&'static str> {
        Self::ALL.iter().map(|step| step.title()).collect()
    }
}

/// State carried across the whole application.
///
/// The amount and fee are set when the loan offer is accepted and read by
/// the payment and confirmation steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    step: WizardStep,
    selected_amount: u64,
    savings_fee: u64,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn step_index(&self) -> usize {
        self.step.index()
    }

    pub fn selected_amount(&self) -> u64 {
        self.selected_amount
    }

    pub fn savings_fee(&self) -> u64 {
        self.savings_fee
    }

    /// Move one step forward. Returns false when already on the last step.
    pub fn advance(&mut self) -> bool {
        let next = WizardStep::from_index(self.step.index() + 1);
        self.move_to(next)
    }

    /// Move one step back. Returns false when already on the first step.
    pub fn retreat(&mut self) -> bool {
        let previous = WizardStep::from_index(self.step.index().saturating_sub(1));
        self.move_to(previous)
    }

    /// Record the accepted offer and advance in one operation.
    pub fn complete_offer(&mut self, amount: u64, savings_fee: u64) -> bool {
        self.selected_amount = amount;
        self.savings_fee = savings_fee;
        self.advance()
    }

    fn move_to(&mut self, step: WizardStep) -> bool {
        if step == self.step {
            return false;
        }
        log::info!("Wizard step {:?} -> {:?}", self.step, step);
        self.step = step;
        true
    }
}
