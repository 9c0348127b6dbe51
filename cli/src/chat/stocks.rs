//! # StockChat Symbol Table
//!
//! File: cli/src/chat/stocks.rs
//! Author: Christi Mahu
//!
//! The fixed table of ticker symbols the assistant knows about. Entries are
//! compiled into the binary and never change at runtime.
//!
/// Canned data for one ticker symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockRecord {
    pub price: f64,
    pub outlook: &'static str,
    pub company: &'static str,
}

/// Known symbols, in display order.
static STOCKS: [(&str, StockRecord); 4] = [
    (
        "AAPL",
        StockRecord {
            price: 175.12,
            outlook: "steady growth with consistent earnings",
            company: "Apple Inc.",
        },
    ),
    (
        "TSLA",
        StockRecord {
            price: 210.73,
            outlook: "volatile but long‑term potential remains high",
            company: "Tesla, Inc.",
        },
    ),
    (
        "MSFT",
        StockRecord {
            price: 329.65,
            outlook: "strong fundamentals and diversified revenue streams",
            company: "Microsoft Corporation",
        },
    ),
    (
        "GOOGL",
        StockRecord {
            price: 131.29,
            outlook: "solid performance with continued advertising dominance",
            company: "Alphabet Inc.",
        },
    ),
];

/// Read-only view over the symbol table.
#[derive(Debug, Clone, Copy)]
pub struct StockTable {
    entries: &'static [(&'static str, StockRecord)],
}

impl StockTable {
    /// The built-in table of four symbols.
    pub fn builtin() -> Self {
        Self { entries: &STOCKS }
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, symbol: &str) -> Option<&'static StockRecord> {
        self.entries
            .iter()
            .find(|(key, _)| *key == symbol)
            .map(|(_, record)| record)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static StockRecord)> {
        self.entries.iter().map(|(symbol, record)| (*symbol, record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for StockTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_has_four_symbols_in_order() {
        let table = StockTable::builtin();
        let symbols: Vec<&str> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, ["AAPL", "TSLA", "MSFT", "GOOGL"]);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_symbols_are_well_formed_tickers() {
        for (symbol, _) in StockTable::builtin().iter() {
            assert!((2..=5).contains(&symbol.len()), "{symbol}");
            assert!(symbol.chars().all(|c| c.is_ascii_uppercase()), "{symbol}");
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = StockTable::builtin();
        assert_eq!(table.lookup("MSFT").unwrap().company, "Microsoft Corporation");
        assert!(table.lookup("msft").is_none());
        assert!(table.lookup("ZZZZ").is_none());
    }
}
