//! Quote data model and JSON encoding helpers.
//!
//! A `Quote` carries the bid of one currency pair as the provider reports it: a decimal
//! string, never reparsed into a number. This module decodes the provider payload
//! (`{"USDBRL": {"bid": "5.42", ...}}`) and encodes the reply the server hands to its
//! clients (`{"Dólar": "5.42"}`).

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::error::QuoteError;
use crate::pair::CurrencyPair;
use crate::result::Result;

/// Current quote for a single currency pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    /// Price of one unit of the base currency in the counter currency.
    pub bid: String,
}

impl Quote {
    /// Decode the provider payload and extract the quote for `pair`.
    ///
    /// Only the `bid` field of the pair object is read; other fields and other pairs
    /// are ignored.
    pub fn from_provider_json(body: &[u8], pair: CurrencyPair) -> Result<Quote> {
        let mut payload: HashMap<String, serde_json::Value> = serde_json::from_slice(body)?;
        let entry = payload
            .remove(&pair.code())
            .ok_or_else(|| QuoteError::MissingPair(pair.code()))?;
        let quote = serde_json::from_value(entry)?;
        Ok(quote)
    }

    /// Encode the reply body `{"<label>": "<bid>"}` to JSON bytes.
    pub fn to_json_bytes(&self, label: &str) -> Result<Vec<u8>> {
        let reply = BTreeMap::from([(label, self.bid.as_str())]);
        let json = serde_json::to_vec(&reply)?;
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_bid_and_ignores_other_fields() {
        let body = br#"{"USDBRL":{"code":"USD","codein":"BRL","bid":"5.42","ask":"5.43"}}"#;
        let quote = Quote::from_provider_json(body, CurrencyPair::USDBRL).unwrap();
        assert_eq!(quote.bid, "5.42");
    }

    #[test]
    fn missing_pair_is_reported() {
        let body = br#"{"EURBRL":{"bid":"6.10"}}"#;
        let err = Quote::from_provider_json(body, CurrencyPair::USDBRL).unwrap_err();
        assert!(matches!(err, QuoteError::MissingPair(code) if code == "USDBRL"));
    }

    #[test]
    fn non_string_bid_is_a_decode_error() {
        let body = br#"{"USDBRL":{"bid":5.42}}"#;
        let err = Quote::from_provider_json(body, CurrencyPair::USDBRL).unwrap_err();
        assert!(matches!(err, QuoteError::SerdeJson(_)));
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        let err = Quote::from_provider_json(b"<html>", CurrencyPair::USDBRL).unwrap_err();
        assert!(matches!(err, QuoteError::SerdeJson(_)));
    }

    #[test]
    fn reply_uses_label_as_only_key() {
        let quote = Quote {
            bid: "5.42".to_string(),
        };
        let bytes = quote.to_json_bytes(CurrencyPair::USDBRL.label()).unwrap();
        assert_eq!(bytes, "{\"Dólar\":\"5.42\"}".as_bytes());
    }
}
