use crate::state::dataset::Dataset;

/// Parse a block of newline-delimited numeric text into a dataset.
///
/// Each line is trimmed, thousands separators (",") are removed, and the rest
/// is read as a floating-point number. Lines that are empty or fail to read
/// as a finite number are silently dropped; this is not an error condition.
/// Input line order is preserved, nothing is sorted or deduplicated, and `0`
/// is a legitimate retained value.
///
/// Non-finite results (`"NaN"`, `"inf"`, overflowing exponents) are dropped
/// as well, so every element of the returned dataset is a finite number.
/// Empty or whitespace-only input yields the empty dataset; substituting a
/// default dataset in that case is the caller's choice, not the parser's.
pub fn parse_numbers(raw_text: &str) -> Dataset {
    let mut values = Vec::new();

    for line in raw_text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let clean = trimmed.replace(',', "");
        match clean.parse::<f64>() {
            Ok(v) if v.is_finite() => values.push(v),
            _ => continue,
        }
    }

    Dataset::from_values(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_input_yield_the_empty_dataset() {
        assert!(parse_numbers("").is_empty());
        assert!(parse_numbers("   \n  \n").is_empty());
    }

    #[test]
    fn thousands_separators_are_stripped() {
        assert_eq!(parse_numbers("1,234\n5").values(), &[1234.0, 5.0]);
    }

    #[test]
    fn unparseable_lines_are_dropped() {
        assert_eq!(parse_numbers("abc\n5\n").values(), &[5.0]);
        assert_eq!(parse_numbers(".\n-\n+\n7").values(), &[7.0]);
    }

    #[test]
    fn non_finite_values_are_dropped() {
        assert!(parse_numbers("NaN\ninf\n-inf\n1e999").is_empty());
    }

    #[test]
    fn order_is_preserved_and_zero_is_kept() {
        assert_eq!(parse_numbers("3\n0\n-1.5").values(), &[3.0, 0.0, -1.5]);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse_numbers("  42  \r\n\t7\n").values(), &[42.0, 7.0]);
    }

    #[test]
    fn scientific_notation_in_range_is_a_plain_number() {
        assert_eq!(parse_numbers("1e2\n2.5e-1").values(), &[100.0, 0.25]);
    }
}
