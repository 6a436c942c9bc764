//! Fixed-rate mortgage math: payments, balances and interest

mod amortization;
mod schedule;

pub use amortization::{interest_paid_through, monthly_payment, remaining_balance, Mortgage};
pub use schedule::{amortization_schedule, AmortizationYear};
