use crate::domain::transaction::Transaction;
use crate::ledger::{
    compute_balance, expense_total, income_total, recent_transactions, BalanceTone,
};

/// Snapshot rendered by the overview screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub balance: f64,
    pub tone: BalanceTone,
    pub income: f64,
    pub expenses: f64,
    pub recent: Vec<Transaction>,
    pub total_count: usize,
}

pub struct SummaryService;

impl SummaryService {
    pub fn overview(transactions: &[Transaction], recent_limit: usize) -> Overview {
        let balance = compute_balance(transactions);
        Overview {
            balance,
            tone: BalanceTone::of(balance),
            income: income_total(transactions),
            expenses: expense_total(transactions),
            recent: recent_transactions(transactions, recent_limit)
                .into_iter()
                .cloned()
                .collect(),
            total_count: transactions.len(),
        }
    }
}
