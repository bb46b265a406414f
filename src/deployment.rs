//! Live network configuration for deploying the loan manager
//!
//! The seven protocol addresses come from `LOAN_MANAGER_*` variables. With
//! none of them set the mock protocols are deployed instead; a partial set is
//! an error so a live deployment never silently falls back to mocks.
use core::fmt;
use core::str::FromStr;
use odra::prelude::*;
use crate::loan_manager::ProtocolAddresses;

pub const LENDING_POOL_PROVIDER: &str = "LOAN_MANAGER_LENDING_POOL_PROVIDER";
pub const CURVE_POOL: &str = "LOAN_MANAGER_CURVE_POOL";
pub const CURVE_DEPOSIT: &str = "LOAN_MANAGER_CURVE_DEPOSIT";
pub const CURVE_LP_TOKEN: &str = "LOAN_MANAGER_CURVE_LP_TOKEN";
pub const DAI: &str = "LOAN_MANAGER_DAI";
pub const USDC: &str = "LOAN_MANAGER_USDC";
pub const USDT: &str = "LOAN_MANAGER_USDT";

/// Variables in constructor order
pub const VARIABLES: [&str; 7] = [
    LENDING_POOL_PROVIDER,
    CURVE_POOL,
    CURVE_DEPOSIT,
    CURVE_LP_TOKEN,
    DAI,
    USDC,
    USDT,
];

/// Why the live configuration could not be loaded
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Some but not all variables are set
    Incomplete { missing: Vec<&'static str> },
    /// Variable set but not a formatted Casper address
    Malformed { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Incomplete { missing } => {
                write!(f, "missing {}", missing.join(", "))
            }
            ConfigError::Malformed { var, value } => {
                write!(f, "{}={} is not a valid address", var, value)
            }
        }
    }
}

impl ProtocolAddresses {
    /// Read the addresses through `lookup`. Blank values count as unset.
    ///
    /// Returns `Ok(None)` when no variable is set at all.
    pub fn from_lookup<F>(lookup: F) -> Result<Option<Self>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let values: Vec<(&'static str, Option<String>)> = VARIABLES
            .iter()
            .map(|var| (*var, lookup(var).filter(|value| !value.trim().is_empty())))
            .collect();

        let missing: Vec<&'static str> = values
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(var, _)| *var)
            .collect();
        if missing.len() == VARIABLES.len() {
            return Ok(None);
        }
        if !missing.is_empty() {
            return Err(ConfigError::Incomplete { missing });
        }

        let mut addresses = Vec::with_capacity(VARIABLES.len());
        for (var, value) in values {
            let value = value.unwrap_or_default();
            let address = Address::from_str(value.trim())
                .map_err(|_| ConfigError::Malformed { var, value: value.clone() })?;
            addresses.push(address);
        }

        Ok(Some(Self {
            lending_pool_address_provider: addresses[0],
            curve_pool: addresses[1],
            curve_deposit: addresses[2],
            curve_lp_token: addresses[3],
            dai: addresses[4],
            usdc: addresses[5],
            usdt: addresses[6],
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odra::casper_types::account::AccountHash;

    fn account_hash(byte: u8) -> String {
        format!("account-hash-{}", format!("{:02x}", byte).repeat(32))
    }

    fn lookup_from(pairs: Vec<(&'static str, String)>) -> impl Fn(&str) -> Option<String> {
        move |var| {
            pairs
                .iter()
                .find(|(name, _)| *name == var)
                .map(|(_, value)| value.clone())
        }
    }

    fn full_config() -> Vec<(&'static str, String)> {
        VARIABLES
            .iter()
            .enumerate()
            .map(|(index, var)| (*var, account_hash(index as u8 + 1)))
            .collect()
    }

    #[test]
    fn test_no_variables_selects_mocks() {
        assert_eq!(ProtocolAddresses::from_lookup(|_| None), Ok(None));
    }

    #[test]
    fn test_blank_variables_select_mocks() {
        assert_eq!(
            ProtocolAddresses::from_lookup(|_| Some(String::from("  "))),
            Ok(None)
        );
    }

    #[test]
    fn test_partial_config_is_rejected() {
        let pairs: Vec<_> = full_config()
            .into_iter()
            .filter(|(var, _)| *var != USDT)
            .collect();

        assert_eq!(
            ProtocolAddresses::from_lookup(lookup_from(pairs)),
            Err(ConfigError::Incomplete { missing: vec![USDT] })
        );
    }

    #[test]
    fn test_single_variable_is_rejected() {
        let pairs = vec![(DAI, account_hash(4))];
        let result = ProtocolAddresses::from_lookup(lookup_from(pairs));

        match result {
            Err(ConfigError::Incomplete { missing }) => {
                assert_eq!(missing.len(), VARIABLES.len() - 1);
                assert!(!missing.contains(&DAI));
            }
            other => panic!("expected incomplete config, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_address_is_rejected() {
        let pairs: Vec<_> = full_config()
            .into_iter()
            .map(|(var, value)| {
                if var == CURVE_POOL {
                    (var, String::from("0x445FE580eF8d70FF569aB36e80c647af338db351"))
                } else {
                    (var, value)
                }
            })
            .collect();

        assert_eq!(
            ProtocolAddresses::from_lookup(lookup_from(pairs)),
            Err(ConfigError::Malformed {
                var: CURVE_POOL,
                value: String::from("0x445FE580eF8d70FF569aB36e80c647af338db351"),
            })
        );
    }

    #[test]
    fn test_full_config_in_constructor_order() {
        let addresses = ProtocolAddresses::from_lookup(lookup_from(full_config()))
            .unwrap()
            .unwrap();

        let account = |byte: u8| Address::Account(AccountHash::new([byte; 32]));
        assert_eq!(addresses.lending_pool_address_provider, account(1));
        assert_eq!(addresses.curve_pool, account(2));
        assert_eq!(addresses.curve_deposit, account(3));
        assert_eq!(addresses.curve_lp_token, account(4));
        assert_eq!(addresses.dai, account(5));
        assert_eq!(addresses.usdc, account(6));
        assert_eq!(addresses.usdt, account(7));
    }
}
