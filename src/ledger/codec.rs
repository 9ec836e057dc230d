//! JSON encoding of the transaction sequence stored under [`STORAGE_KEY`].
//!
//! [`STORAGE_KEY`]: super::STORAGE_KEY

use serde_json::Value;

use crate::domain::transaction::Transaction;

/// Outcome of decoding a stored payload.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub transactions: Vec<Transaction>,
    pub warnings: Vec<String>,
}

impl LoadReport {
    pub fn dropped(&self) -> usize {
        self.warnings.len()
    }
}

pub fn encode_transactions(transactions: &[Transaction]) -> serde_json::Result<String> {
    serde_json::to_string(transactions)
}

/// Decodes a stored sequence.
///
/// The payload must be a JSON array, otherwise the whole thing is rejected.
/// Records that do not decode as a transaction are dropped one by one and
/// reported in [`LoadReport::warnings`]; the rest keep their order.
pub fn decode_transactions(payload: &str) -> serde_json::Result<LoadReport> {
    let records: Vec<Value> = serde_json::from_str(payload)?;
    let mut report = LoadReport::default();
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Transaction>(record) {
            Ok(txn) => report.transactions.push(txn),
            Err(err) => report
                .warnings
                .push(format!("record {index} dropped: {err}")),
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::{TransactionCategory, TransactionKind};

    #[test]
    fn encoded_sequence_decodes_unchanged() {
        let txns = vec![
            Transaction::new(
                1,
                "Salary",
                2500.0,
                TransactionKind::Income,
                TransactionCategory::Fixed,
            ),
            Transaction::new(
                2,
                "Cinema",
                32.9,
                TransactionKind::Expense,
                TransactionCategory::Occasional,
            ),
        ];
        let json = encode_transactions(&txns).unwrap();
        assert!(json.contains("\"kind\":\"income\""));
        let report = decode_transactions(&json).unwrap();
        assert_eq!(report.transactions, txns);
        assert_eq!(report.dropped(), 0);
    }

    #[test]
    fn malformed_records_are_dropped_individually() {
        let json = r#"[
            {"id":1,"description":"ok","amount":5,"kind":"income","category":"fixed"},
            {"id":2,"description":"no kind","amount":5},
            "not an object",
            {"id":3,"description":"also ok","amount":2,"kind":"expense","category":"occasional"}
        ]"#;
        let report = decode_transactions(json).unwrap();
        let ids: Vec<u64> = report.transactions.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(report.dropped(), 2);
        assert!(report.warnings[0].starts_with("record 1 dropped"));
    }

    #[test]
    fn non_array_payload_is_rejected_wholesale() {
        assert!(decode_transactions(r#"{"id":1}"#).is_err());
        assert!(decode_transactions("not json").is_err());
    }
}
