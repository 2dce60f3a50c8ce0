//! Transactions module - registrar transaction records, classification and repository contract.

mod classifier;
mod transactions_constants;
mod transactions_model;
mod transactions_traits;


pub use classifier::{classify, classify_code, ClassifierError, TransactionDirection};
pub use transactions_constants::*;
pub use transactions_model::{chronological_cmp, sort_chronologically, Transaction};
pub use transactions_traits::TransactionRepositoryTrait;
