use anyhow::{Result, bail};
use clap::Args;
use colored::*;

use crate::loan::currency::format_kes_cents;
use crate::loan::{INTEREST_RATE_PERCENT, LOAN_TIERS, LoanQuote, format_kes};

#[derive(Args, Debug)]
pub struct OffersArgs {
    /// Only show the quote for this tier amount (KES)
    #[arg(short, long)]
    pub amount: Option<u64>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn offers_command(args: OffersArgs) -> Result<()> {
    let quotes = match args.amount {
        Some(amount) => match LoanQuote::for_amount(amount) {
            Some(quote) => vec![quote],
            None => bail!(
                "{} is not a loan tier; choose one of: {}",
                format_kes(amount),
                LOAN_TIERS
                    .iter()
                    .map(|tier| tier.amount.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        },
        None => LOAN_TIERS.iter().copied().map(LoanQuote::for_tier).collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quotes)?);
        return Ok(());
    }

    print_table(&quotes);
    Ok(())
}

fn print_table(quotes: &[LoanQuote]) {
    let interest_header = format!("Interest ({}%)", INTEREST_RATE_PERCENT);

    println!();
    println!("  {}", "Loan Offers".bright_blue().bold());
    println!("  {}", "═══════════".bright_blue());
    println!(
        "  {:<14} {:<18} {:<18} {}",
        "Amount".bright_white().bold(),
        "Savings Deposit".bright_white().bold(),
        interest_header.bright_white().bold(),
        "Total to Repay".bright_white().bold()
    );

    for quote in quotes {
        println!(
            "  {:<14} {:<18} {:<18} {}",
            format_kes(quote.amount).bright_green(),
            format_kes(quote.savings_deposit).bright_yellow(),
            format_kes_cents(quote.interest_cents).dimmed(),
            format_kes_cents(quote.total_repayment_cents).cyan().bold()
        );
    }
    println!();
}
