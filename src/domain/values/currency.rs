use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A loyalty currency a traveler can hold a balance in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Amex Membership Rewards
    #[serde(rename = "MR")]
    Mr,
    /// Chase Ultimate Rewards
    #[serde(rename = "CHASE")]
    Chase,
    /// Capital One Miles
    #[serde(rename = "CAP1")]
    Cap1,
    /// Citi ThankYou Points
    #[serde(rename = "CITI")]
    Citi,
    /// Bilt Rewards
    #[serde(rename = "BILT")]
    Bilt,
    /// Wells Fargo Rewards
    #[serde(rename = "WF")]
    Wf,
    /// Marriott Bonvoy points (hotel redemptions only)
    #[serde(rename = "MARRIOTT")]
    Marriott,
}

impl Currency {
    pub const ALL: [Currency; 7] = [
        Currency::Mr,
        Currency::Chase,
        Currency::Cap1,
        Currency::Citi,
        Currency::Bilt,
        Currency::Wf,
        Currency::Marriott,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Mr => "MR",
            Currency::Chase => "CHASE",
            Currency::Cap1 => "CAP1",
            Currency::Citi => "CITI",
            Currency::Bilt => "BILT",
            Currency::Wf => "WF",
            Currency::Marriott => "MARRIOTT",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MR" | "AMEX" => Ok(Currency::Mr),
            "CHASE" | "UR" => Ok(Currency::Chase),
            "CAP1" | "CAPITAL_ONE" => Ok(Currency::Cap1),
            "CITI" | "TYP" => Ok(Currency::Citi),
            "BILT" => Ok(Currency::Bilt),
            "WF" | "WELLS_FARGO" => Ok(Currency::Wf),
            "MARRIOTT" | "BONVOY" => Ok(Currency::Marriott),
            _ => Err(format!("Unknown loyalty currency: {s}")),
        }
    }
}

/// Point balances keyed by currency. Balances are unsigned, so a negative
/// balance cannot be represented.
pub type Wallet = BTreeMap<Currency, u64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("amex".parse::<Currency>().unwrap(), Currency::Mr);
        assert_eq!("cap1".parse::<Currency>().unwrap(), Currency::Cap1);
        assert!("bitcoin".parse::<Currency>().is_err());
    }

    #[test]
    fn test_wallet_json_keys() {
        let mut wallet = Wallet::new();
        wallet.insert(Currency::Mr, 100_000);
        let json = serde_json::to_string(&wallet).unwrap();
        assert_eq!(json, r#"{"MR":100000}"#);
    }
}
