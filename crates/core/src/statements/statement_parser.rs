//! Registrar statement parsing.
//!
//! Statements are delimited text exports of the registrar's holdings and
//! transaction feeds, with a header row naming the registrar columns. The
//! delimiter is auto-detected and header names are matched case-insensitively.

use chrono::NaiveDate;
use csv::{ReaderBuilder, Terminator};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

use super::import_model::ImportError;
use crate::holdings::Holding;
use crate::transactions::Transaction;

/// Holdings statement columns.
pub mod holding_columns {
    pub const FOLIO: &str = "FOLIOCHK";
    pub const SCHEME: &str = "SCH_NAME";
    pub const PAN: &str = "PAN_NO";
    pub const HOLDER_NAME: &str = "HOLDING_NA";
    pub const CLOSING_UNITS: &str = "CLOS_BAL";
    pub const CURRENT_VALUE: &str = "RUPEE_BAL";
    pub const EMAIL: &str = "EMAIL";
    pub const MOBILE: &str = "MOBILE_NO";
}

/// Transaction statement columns.
pub mod transaction_columns {
    pub const TRXN_NO: &str = "TRXNNO";
    pub const FOLIO: &str = "FOLIO_NO";
    pub const SCHEME: &str = "SCHEME";
    pub const TYPE: &str = "TRXNTYPE";
    pub const TRADE_DATE: &str = "TRADDATE";
    pub const POST_DATE: &str = "POSTDATE";
    pub const UNITS: &str = "UNITS";
    pub const AMOUNT: &str = "AMOUNT";
    pub const NAV: &str = "PURPRICE";
    pub const STAMP_DUTY: &str = "STAMP_DUTY";
    pub const PAN: &str = "PAN";
    pub const INVESTOR_NAME: &str = "INV_NAME";
    pub const BROKER_CODE: &str = "BROKCODE";
    pub const AMC_CODE: &str = "AMC_CODE";
    pub const PRODUCT_CODE: &str = "PRODCODE";
    pub const SCHEME_TYPE: &str = "SCHEME_TYP";
    pub const NATURE: &str = "TRXN_NATUR";
    pub const SEQ_NO: &str = "SEQ_NO";
    pub const SIP_TRXN_NO: &str = "SIPTRXNNO";
    pub const REPORT_DATE: &str = "REP_DATE";
}

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%d-%b-%Y"];

/// One data row and the file line it came from.
struct StatementRow {
    line: u64,
    cells: Vec<String>,
}

/// Header-indexed view over a parsed statement.
struct StatementTable {
    columns: HashMap<String, usize>,
    rows: Vec<StatementRow>,
    /// Only comma-delimited files may carry `,` thousands separators in
    /// (quoted) numeric cells.
    grouped_thousands: bool,
}

impl StatementTable {
    fn require(&self, names: &[&str]) -> Result<(), ImportError> {
        match names.iter().find(|n| !self.columns.contains_key(**n)) {
            Some(missing) => Err(ImportError::MissingColumn((*missing).to_string())),
            None => Ok(()),
        }
    }
}

/// Reads one row through the table's header index.
struct RowReader<'a> {
    table: &'a StatementTable,
    row: &'a StatementRow,
}

impl<'a> RowReader<'a> {
    fn invalid(&self, reason: String) -> ImportError {
        ImportError::InvalidRow {
            line: self.row.line,
            reason,
        }
    }

    /// Trimmed cell value; empty cells and absent columns are `None`.
    fn text(&self, column: &str) -> Option<String> {
        let idx = *self.table.columns.get(column)?;
        let value = self.row.cells.get(idx)?.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    fn required_text(&self, column: &str) -> Result<String, ImportError> {
        self.text(column)
            .ok_or_else(|| self.invalid(format!("{} is empty", column)))
    }

    fn decimal(&self, column: &str) -> Result<Option<Decimal>, ImportError> {
        self.text(column)
            .map(|raw| {
                parse_decimal(&raw, self.table.grouped_thousands)
                    .ok_or_else(|| self.invalid(format!("{} '{}' is not a number", column, raw)))
            })
            .transpose()
    }

    fn date(&self, column: &str) -> Result<Option<NaiveDate>, ImportError> {
        self.text(column)
            .map(|raw| {
                parse_date(&raw)
                    .ok_or_else(|| self.invalid(format!("{} '{}' is not a date", column, raw)))
            })
            .transpose()
    }

    fn integer(&self, column: &str) -> Result<Option<i64>, ImportError> {
        self.text(column)
            .map(|raw| {
                let parsed = raw.parse::<i64>().ok().or_else(|| {
                    parse_decimal(&raw, self.table.grouped_thousands)
                        .filter(|d| d.fract().is_zero())
                        .and_then(|d| i64::try_from(d).ok())
                });
                parsed.ok_or_else(|| {
                    self.invalid(format!("{} '{}' is not an integer", column, raw))
                })
            })
            .transpose()
    }
}

/// Parses a numeric cell with `.` as the decimal point. Spaces are dropped,
/// and so are commas when `grouped_thousands` is set; otherwise a comma makes
/// the cell invalid.
fn parse_decimal(raw: &str, grouped_thousands: bool) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != ' ' && !(grouped_thousands && *c == ','))
        .collect();
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Strips a UTF-8 BOM; invalid UTF-8 is replaced rather than rejected.
fn decode_content(content: &[u8]) -> String {
    let bytes = content.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(content);
    String::from_utf8_lossy(bytes).into_owned()
}

/// Picks the candidate delimiter appearing most often in the header line.
fn detect_delimiter(content: &str) -> u8 {
    let header = content.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    [b',', b';', b'\t']
        .into_iter()
        .map(|d| (d, header.matches(d as char).count()))
        .fold((b',', 0), |best, candidate| {
            if candidate.1 > best.1 {
                candidate
            } else {
                best
            }
        })
        .0
}

fn read_table(content: &[u8]) -> Result<StatementTable, ImportError> {
    let text = decode_content(content);
    let delimiter = detect_delimiter(&text);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(text.as_bytes());

    let mut header: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let cells: Vec<String> = record
            .iter()
            .map(|c| c.trim_end_matches('\r').to_string())
            .collect();
        if cells.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        if header.is_none() {
            header = Some(cells);
            continue;
        }
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        rows.push(StatementRow { line, cells });
    }

    let header = header.ok_or(ImportError::EmptyStatement)?;
    if rows.is_empty() {
        return Err(ImportError::EmptyStatement);
    }

    let columns = header
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.trim().to_ascii_uppercase(), idx))
        .collect();

    Ok(StatementTable {
        columns,
        rows,
        grouped_thousands: delimiter == b',',
    })
}

/// Parses a holdings statement into holdings.
pub fn parse_holdings_statement(content: &[u8]) -> Result<Vec<Holding>, ImportError> {
    use holding_columns::*;

    let table = read_table(content)?;
    table.require(&[FOLIO, SCHEME, PAN])?;

    table
        .rows
        .iter()
        .map(|row| {
            let r = RowReader { table: &table, row };
            Ok(Holding {
                folio_no: r.required_text(FOLIO)?,
                scheme: r.required_text(SCHEME)?,
                pan_no: r.required_text(PAN)?,
                holder_name: r.text(HOLDER_NAME),
                closing_units: r.decimal(CLOSING_UNITS)?,
                current_value: r.decimal(CURRENT_VALUE)?,
                email: r.text(EMAIL),
                mobile_no: r.text(MOBILE),
            })
        })
        .collect()
}

/// Parses a transaction statement into transactions.
pub fn parse_transactions_statement(content: &[u8]) -> Result<Vec<Transaction>, ImportError> {
    use transaction_columns::*;

    let table = read_table(content)?;
    table.require(&[TRXN_NO, FOLIO, SCHEME])?;

    table
        .rows
        .iter()
        .map(|row| {
            let r = RowReader { table: &table, row };
            Ok(Transaction {
                trxn_no: r.required_text(TRXN_NO)?,
                folio_no: r.required_text(FOLIO)?,
                scheme: r.required_text(SCHEME)?,
                transaction_type: r.text(TYPE),
                trade_date: r.date(TRADE_DATE)?,
                post_date: r.date(POST_DATE)?,
                units: r.decimal(UNITS)?,
                amount: r.decimal(AMOUNT)?,
                nav: r.decimal(NAV)?,
                stamp_duty: r.decimal(STAMP_DUTY)?,
                pan: r.text(PAN),
                investor_name: r.text(INVESTOR_NAME),
                broker_code: r.text(BROKER_CODE),
                amc_code: r.text(AMC_CODE),
                product_code: r.text(PRODUCT_CODE),
                scheme_type: r.text(SCHEME_TYPE),
                transaction_nature: r.text(NATURE),
                seq_no: r.integer(SEQ_NO)?,
                sip_trxn_no: r.text(SIP_TRXN_NO),
                report_date: r.date(REPORT_DATE)?,
            })
        })
        .collect()
}
