//! KES display formatting.

/// Format whole shillings as `KES 10,000`.
pub fn format_kes(amount: u64) -> String {
    format!("KES {}", group_thousands(amount))
}

/// Format an amount held in cents. Cents are shown only when non-zero.
pub fn format_kes_cents(cents: u64) -> String {
    let whole = cents / 100;
    let fraction = cents % 100;
    if fraction == 0 {
        format_kes(whole)
    } else {
        format!("KES {}.{:02}", group_thousands(whole), fraction)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_kes() {
        assert_eq!(format_kes(0), "KES 0");
        assert_eq!(format_kes(150), "KES 150");
        assert_eq!(format_kes(3_000), "KES 3,000");
        assert_eq!(format_kes(1_250_000), "KES 1,250,000");
    }

    #[test]
    fn test_format_kes_cents() {
        assert_eq!(format_kes_cents(1_100_000), "KES 11,000");
        assert_eq!(format_kes_cents(100_050), "KES 1,000.50");
        assert_eq!(format_kes_cents(7), "KES 0.07");
    }
}
