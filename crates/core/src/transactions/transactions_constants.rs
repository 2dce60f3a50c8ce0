/// Purchase (fresh, additional, SIP).
pub const TRXN_PREFIX_PURCHASE: &str = "P";
/// Switch-in from another scheme.
pub const TRXN_PREFIX_SWITCH_IN: &str = "SI";
/// Transfer-in from another folio.
pub const TRXN_PREFIX_TRANSFER_IN: &str = "TI";
/// Dividend reinvestment.
pub const TRXN_PREFIX_DIVIDEND_REINVEST: &str = "DR";

/// Redemption (full, partial, SWP).
pub const TRXN_PREFIX_REDEMPTION: &str = "R";
/// Switch-out to another scheme.
pub const TRXN_PREFIX_SWITCH_OUT: &str = "SO";
/// Transfer-out to another folio.
pub const TRXN_PREFIX_TRANSFER_OUT: &str = "TO";

/// Type-code prefixes that add units to a position.
pub const ACCUMULATING_PREFIXES: [&str; 4] = [
    TRXN_PREFIX_PURCHASE,
    TRXN_PREFIX_SWITCH_IN,
    TRXN_PREFIX_TRANSFER_IN,
    TRXN_PREFIX_DIVIDEND_REINVEST,
];

/// Type-code prefixes that take units out of a position.
pub const CONSUMING_PREFIXES: [&str; 3] = [
    TRXN_PREFIX_REDEMPTION,
    TRXN_PREFIX_SWITCH_OUT,
    TRXN_PREFIX_TRANSFER_OUT,
];
