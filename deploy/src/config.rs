use std::{fmt, path::PathBuf};

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use ethers::types::H160;

use crate::utils::parse_address;

/// Treasury account receiving staking fees.
pub const TREASURY_ADDRESS: &str = "0x0aca7c8998cb357a74a879f5b665ef4aec306448";
/// BEP-20 USDT contract on BSC mainnet.
pub const USDT_ADDRESS: &str = "0x55d398326f99059fF775485246999027B3197955";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Network {
    Bsc,
    BscTestnet,
}

#[derive(Clone, Copy, Debug)]
pub struct NetworkParams {
    pub url: &'static str,
    pub chain_id: u64,
    pub gas: u64,
    pub gas_price: u64,
}

impl Network {
    pub fn params(&self) -> NetworkParams {
        match self {
            Network::Bsc => NetworkParams {
                url: "https://bsc-dataseed.binance.org/",
                chain_id: 56,
                gas: 3_000_000,
                gas_price: 5_000_000_000,
            },
            Network::BscTestnet => NetworkParams {
                url: "https://data-seed-prebsc-1-s1.binance.org:8545/",
                chain_id: 97,
                gas: 3_000_000,
                gas_price: 10_000_000_000,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Network::Bsc => "BSC Mainnet",
            Network::BscTestnet => "BSC Testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Network::Bsc => "bsc",
            Network::BscTestnet => "bsc-testnet",
        })
    }
}

/// Toolchain the contract artifacts were compiled with.
#[derive(Clone, Copy, Debug)]
pub struct CompilerSettings {
    pub version: &'static str,
    pub optimizer_enabled: bool,
    pub optimizer_runs: u32,
}

pub const SOLC: CompilerSettings = CompilerSettings {
    version: "0.8.19",
    optimizer_enabled: true,
    optimizer_runs: 200,
};

#[derive(Clone, Debug)]
pub struct ProjectPaths {
    pub sources: PathBuf,
    pub tests: PathBuf,
    pub cache: PathBuf,
    pub artifacts: PathBuf,
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self {
            sources: "./contracts".into(),
            tests: "./test".into(),
            cache: "./cache".into(),
            artifacts: "./artifacts".into(),
        }
    }
}

/// Fully resolved settings for one deployment run. Built once at startup,
/// never reloaded.
#[derive(Clone, Debug)]
pub struct DeployConfig {
    pub network: Network,
    pub url: String,
    pub chain_id: u64,
    pub gas: u64,
    pub gas_price: u64,
    pub sk: String,
    pub treasury: H160,
    pub token: H160,
    pub compiler: CompilerSettings,
    pub paths: ProjectPaths,
}

impl DeployConfig {
    /// Resolution fails before any provider or wallet is constructed, so a
    /// missing key or malformed address never reaches the network.
    pub fn resolve(
        network: Network,
        rpc: Option<String>,
        sk: Option<String>,
        treasury: Option<String>,
        token: Option<String>,
        artifacts: Option<String>,
    ) -> Result<Self> {
        let sk = sk.ok_or_else(|| anyhow!("no signer key provided, set PRIVATE_KEY"))?;
        let treasury = parse_address(treasury.as_deref().unwrap_or(TREASURY_ADDRESS))?;
        let token = parse_address(token.as_deref().unwrap_or(USDT_ADDRESS))?;

        let mut paths = ProjectPaths::default();
        if let Some(dir) = artifacts {
            paths.artifacts = dir.into();
        }

        let params = network.params();
        Ok(Self {
            network,
            url: rpc.unwrap_or_else(|| params.url.to_string()),
            chain_id: params.chain_id,
            gas: params.gas,
            gas_price: params.gas_price,
            sk,
            treasury,
            token,
            compiler: SOLC,
            paths,
        })
    }
}
