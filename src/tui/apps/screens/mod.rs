//! Child screens of the loan application. Each screen is a plain
//! state/update/view/subscriptions module; the orchestrator lifts their
//! messages into its own and reacts to the events they return.

pub mod confirmation;
pub mod form;
pub mod loading_screen;
pub mod loan_offer;
pub mod stepper;

pub use form::Event as StepEvent;
pub use loading_screen::Event as LoadingEvent;
pub use loan_offer::Event as OfferEvent;
