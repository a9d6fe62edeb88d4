// The export target is fixed; the tab has to exist in the spreadsheet.

pub mod balances {
    pub const RW_HISTORY: &str = "Balances!A:E";
}
