//! Statement import - parsing registrar statements and upserting them into storage.

mod import_model;
mod import_service;
mod statement_parser;

pub use import_model::{ImportError, ImportSummary};
pub use import_service::{StatementImportService, StatementImportServiceTrait};
pub use statement_parser::{
    holding_columns, parse_holdings_statement, parse_transactions_statement, transaction_columns,
};
