//! Currency pairs the provider can quote, and how each one is named on the wire.

use clap::ValueEnum;
use strum_macros::{Display, EnumString};

/// Set of supported currency pairs.
///
/// The `Display` form (`USDBRL`) is the key the provider uses in its JSON payload.
#[derive(Debug, Clone, Copy, ValueEnum, Display, EnumString, Hash, Eq, PartialEq, Default)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive)]
pub enum CurrencyPair {
    /// US dollar in Brazilian real.
    #[default]
    USDBRL,
    /// Euro in Brazilian real.
    EURBRL,
    /// Pound sterling in Brazilian real.
    GBPBRL,
}

impl CurrencyPair {
    /// Key of the pair object in the provider payload (`USDBRL`).
    pub fn code(&self) -> String {
        self.to_string()
    }

    /// URL segment the provider expects (`USD-BRL`).
    pub fn path(&self) -> String {
        let code = self.code();
        let (base, counter) = code.split_at(3);
        format!("{}-{}", base, counter)
    }

    /// Fixed label key used in the server reply.
    pub fn label(&self) -> &'static str {
        match self {
            CurrencyPair::USDBRL => "Dólar",
            CurrencyPair::EURBRL => "Euro",
            CurrencyPair::GBPBRL => "Libra",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("usdbrl".parse::<CurrencyPair>().ok(), Some(CurrencyPair::USDBRL));
        assert_eq!("EurBrl".parse::<CurrencyPair>().ok(), Some(CurrencyPair::EURBRL));
        assert!("USD-BRL".parse::<CurrencyPair>().is_err());
    }

    #[test]
    fn default_pair_matches_provider_naming() {
        let pair = CurrencyPair::default();
        assert_eq!(pair.code(), "USDBRL");
        assert_eq!(pair.path(), "USD-BRL");
        assert_eq!(pair.label(), "Dólar");
    }
}
