use crate::domain::model::{Amount, Record};

/// 記錄金額 = 標題字元數 + 內文字元數（以 Unicode 字元計，非位元組）
pub fn amount(record: &Record) -> Amount {
    (record.title.chars().count() + record.body.chars().count()) as Amount
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_sums_both_fields() {
        assert_eq!(amount(&Record::new("ab", "cd")), 4);
        assert_eq!(amount(&Record::new("x", "")), 1);
    }

    #[test]
    fn test_amount_of_empty_record_is_zero() {
        assert_eq!(amount(&Record::default()), 0);
    }

    #[test]
    fn test_amount_counts_characters_not_bytes() {
        assert_eq!(amount(&Record::new("銷售", "é")), 3);
    }
}
