//! Transaction history types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::serialize_chains;

/// Query parameters for the transaction history of an address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsParams {
    pub address: String,
    /// Chains to include (joined with commas)
    #[serde(serialize_with = "serialize_chains")]
    pub chains: Vec<String>,
    /// Restrict to one token; empty string selects the native token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_contract_address: Option<String>,
    /// Start time (ms)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin: Option<i64>,
    /// End time (ms)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Max results, defaults to 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl TransactionsParams {
    pub fn new<S: Into<String>>(
        address: impl Into<String>,
        chains: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            address: address.into(),
            chains: chains.into_iter().map(Into::into).collect(),
            token_contract_address: None,
            begin: None,
            end: None,
            cursor: None,
            limit: None,
        }
    }

    pub fn with_token(mut self, token_contract_address: impl Into<String>) -> Self {
        self.token_contract_address = Some(token_contract_address.into());
        self
    }

    pub fn with_time_range(mut self, begin: i64, end: i64) -> Self {
        self.begin = Some(begin);
        self.end = Some(end);
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Sender or receiver of a transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionParty {
    pub address: String,
    pub amount: String,
}

/// A transaction in an address history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    pub chain_index: String,
    pub tx_hash: String,
    pub method_id: String,
    pub nonce: String,
    /// Transaction time (ms, as string)
    pub tx_time: String,
    pub from: Vec<TransactionParty>,
    pub to: Vec<TransactionParty>,
    pub token_contract_address: String,
    pub amount: String,
    pub symbol: String,
    pub tx_fee: String,
    /// "success", "fail" or "pending"
    pub tx_status: String,
    pub hit_blacklist: bool,
    /// 0 outer main-chain transfer, 1 internal transfer, 2 token transfer
    pub itype: String,
}

/// A page of transaction history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionsPage {
    /// Cursor for the next page
    pub cursor: String,
    pub transaction_list: Vec<Transaction>,
}

/// Input or output of a transaction detail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionDetailParty {
    pub address: String,
    pub vin_index: String,
    pub vout_index: String,
    pub is_contract: bool,
    pub amount: String,
}

/// Full detail of one transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionDetail {
    pub chain_index: String,
    pub height: String,
    pub tx_time: String,
    pub tx_hash: String,
    pub tx_status: String,
    pub gas_limit: String,
    pub gas_used: String,
    pub gas_price: String,
    pub tx_fee: String,
    pub nonce: String,
    pub amount: String,
    pub symbol: String,
    pub method_id: String,
    pub from_details: Vec<TransactionDetailParty>,
    pub to_details: Vec<TransactionDetailParty>,
    /// Internal transfers, passed through as returned
    pub internal_transaction_details: Vec<Value>,
    /// Token transfers, passed through as returned
    pub token_transfer_details: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transactions_params_builder() {
        let params = TransactionsParams::new("0xwallet", ["1"])
            .with_token("0xabc")
            .with_time_range(1000, 2000)
            .with_cursor("c1")
            .with_limit(10);

        assert_eq!(params.chains, vec!["1".to_string()]);
        assert_eq!(params.token_contract_address.as_deref(), Some("0xabc"));
        assert_eq!(params.begin, Some(1000));
        assert_eq!(params.cursor.as_deref(), Some("c1"));
        assert_eq!(params.limit, Some(10));
    }

    #[test]
    fn test_transactions_page_deserialize() {
        let json = r#"{
            "cursor": "1706197403",
            "transactionList": [{
                "chainIndex": "1",
                "txHash": "0x963c",
                "methodId": "",
                "nonce": "",
                "txTime": "1706197403000",
                "from": [{"address": "0xfrom", "amount": ""}],
                "to": [{"address": "0xto", "amount": ""}],
                "tokenContractAddress": "0xabc",
                "amount": "1.5",
                "symbol": "USDT",
                "txFee": "",
                "txStatus": "success",
                "hitBlacklist": false,
                "itype": "2"
            }]
        }"#;
        let page: TransactionsPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.cursor, "1706197403");
        assert_eq!(page.transaction_list[0].from[0].address, "0xfrom");
        assert_eq!(page.transaction_list[0].tx_status, "success");
    }

    #[test]
    fn test_transaction_detail_passthrough_lists() {
        let json = r#"{
            "chainIndex": "1",
            "txHash": "0xabc",
            "fromDetails": [{"address": "0xfrom", "isContract": false, "amount": ""}],
            "tokenTransferDetails": [{"symbol": "USDC", "amount": "10"}]
        }"#;
        let detail: TransactionDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.from_details.len(), 1);
        assert_eq!(detail.token_transfer_details[0]["symbol"], "USDC");
        assert!(detail.internal_transaction_details.is_empty());
    }
}
