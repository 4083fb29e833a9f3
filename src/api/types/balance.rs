//! Wallet balance types.

use serde::{Deserialize, Serialize};

use super::{serialize_chains, serialize_risk_filter};
use crate::shared::TokenRef;

/// Query parameters for the total portfolio value of an address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalValueParams {
    pub address: String,
    /// Chains to include (joined with commas)
    #[serde(serialize_with = "serialize_chains")]
    pub chains: Vec<String>,
    /// 0 all assets (default), 1 tokens only, 2 DeFi positions only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    /// Drop flagged risk tokens from the total
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_risk_filter"
    )]
    pub exclude_risk_token: Option<bool>,
}

impl TotalValueParams {
    pub fn new<S: Into<String>>(
        address: impl Into<String>,
        chains: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            address: address.into(),
            chains: chains.into_iter().map(Into::into).collect(),
            asset_type: None,
            exclude_risk_token: None,
        }
    }

    pub fn with_asset_type(mut self, asset_type: impl Into<String>) -> Self {
        self.asset_type = Some(asset_type.into());
        self
    }

    pub fn with_exclude_risk_token(mut self, exclude: bool) -> Self {
        self.exclude_risk_token = Some(exclude);
        self
    }
}

/// Total value of an address, in USD.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TotalValue {
    pub total_value: String,
}

/// Query parameters for all token balances of an address.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AllTokenBalancesQuery {
    pub address: String,
    #[serde(serialize_with = "serialize_chains")]
    pub chains: Vec<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_risk_filter"
    )]
    pub exclude_risk_token: Option<bool>,
}

/// Body for balances of specific tokens.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SpecificTokenBalancesRequest<'a> {
    pub address: &'a str,
    pub token_contract_addresses: &'a [TokenRef],
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_risk_filter"
    )]
    pub exclude_risk_token: Option<bool>,
}

/// A token balance held by an address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenAsset {
    pub chain_index: String,
    pub token_contract_address: String,
    pub address: String,
    pub symbol: String,
    /// Balance in token units
    pub balance: String,
    /// Balance in base units
    pub raw_balance: String,
    /// USD price per token
    pub token_price: String,
    pub token_type: String,
    pub is_risk_token: bool,
}

/// Balance list wrapper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenAssets {
    pub token_assets: Vec<TokenAsset>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::QueryParams;

    #[test]
    fn test_total_value_params_query() {
        let params = TotalValueParams::new("0xwallet", ["1", "56"]).with_exclude_risk_token(true);
        let query = QueryParams::from_serialize(&params).unwrap();
        assert_eq!(
            query.to_query_string().unwrap(),
            "?address=0xwallet&chains=1%2C56&excludeRiskToken=0"
        );
    }

    #[test]
    fn test_specific_balances_body() {
        let tokens = vec![TokenRef::new("1", "0xabc")];
        let body = SpecificTokenBalancesRequest {
            address: "0xwallet",
            token_contract_addresses: &tokens,
            exclude_risk_token: Some(false),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"address":"0xwallet","tokenContractAddresses":[{"chainIndex":"1","tokenContractAddress":"0xabc"}],"excludeRiskToken":"1"}"#
        );
    }

    #[test]
    fn test_token_assets_deserialize() {
        let json = r#"{"tokenAssets":[{
            "chainIndex":"1",
            "tokenContractAddress":"",
            "address":"0xwallet",
            "symbol":"ETH",
            "balance":"0.5",
            "rawBalance":"500000000000000000",
            "tokenPrice":"3000",
            "isRiskToken":false
        }]}"#;
        let assets: TokenAssets = serde_json::from_str(json).unwrap();
        assert_eq!(assets.token_assets.len(), 1);
        assert_eq!(assets.token_assets[0].symbol, "ETH");
        assert!(!assets.token_assets[0].is_risk_token);
    }
}
