pub mod loan_application;
pub mod screens;

pub use loan_application::LoanApplication;
