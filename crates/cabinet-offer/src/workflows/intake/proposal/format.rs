const THOUSANDS_SEPARATOR: char = ' ';

/// Whole-euro amount with space-grouped thousands, e.g. `1 200 €`.
pub fn format_euros(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped.push_str(" €");
    grouped
}

#[cfg(test)]
mod tests {
    use super::format_euros;

    #[test]
    fn small_amounts_have_no_separator() {
        assert_eq!(format_euros(0), "0 €");
        assert_eq!(format_euros(940), "940 €");
    }

    #[test]
    fn thousands_are_space_separated() {
        assert_eq!(format_euros(1200), "1 200 €");
        assert_eq!(format_euros(12345), "12 345 €");
        assert_eq!(format_euros(1_234_567), "1 234 567 €");
    }
}
