//! Blocking exchangerate-api v6 client
//!
//! Called only from the presentation layer when composing a conversion
//! reply; ledger mutations never wait on it.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{LedgerError, LedgerResult};

use super::{Conversion, RateProvider};

const API_BASE: &str = "https://v6.exchangerate-api.com/v6";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the exchangerate-api pair endpoint
pub struct ExchangeRateApi {
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct PairResponse {
    conversion_rate: f64,
    #[serde(default)]
    conversion_result: Option<f64>,
}

impl ExchangeRateApi {
    /// Create a client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

impl RateProvider for ExchangeRateApi {
    fn pair_rate(&self, from: &str, to: &str, amount: Option<f64>) -> LedgerResult<Conversion> {
        let mut url = format!(
            "{}/{}/pair/{}/{}",
            API_BASE,
            self.api_key,
            from.to_uppercase(),
            to.to_uppercase()
        );
        if let Some(amount) = amount {
            url.push_str(&format!("/{}", amount));
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| LedgerError::ExchangeUnavailable(e.to_string()))?;

        let response = client
            .get(&url)
            .send()
            .map_err(|e| LedgerError::ExchangeUnavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| LedgerError::ExchangeUnavailable(e.to_string()))?;

        let body: PairResponse = response
            .json()
            .map_err(|e| LedgerError::ExchangeUnavailable(e.to_string()))?;

        Ok(Conversion {
            rate: body.conversion_rate,
            converted: body.conversion_result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_response_parsing() {
        let body: PairResponse =
            serde_json::from_str(r#"{"conversion_rate": 41.2, "conversion_result": 412.0}"#)
                .unwrap();
        assert_eq!(body.conversion_rate, 41.2);
        assert_eq!(body.conversion_result, Some(412.0));

        let rate_only: PairResponse =
            serde_json::from_str(r#"{"conversion_rate": 41.2}"#).unwrap();
        assert!(rate_only.conversion_result.is_none());
    }
}
