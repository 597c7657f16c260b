use anyhow::Result;
use clap::Parser;

use crate::{
    config::{DeployConfig, Network},
    contracts::ChainDeployer,
    deploy::Deploy,
};

#[derive(Debug, Parser)]
pub struct CommandLine {
    /// Target network.
    #[clap(short, long, value_enum, default_value_t = Network::Bsc)]
    network: Network,

    /// RPC endpoint, overrides the network default.
    #[clap(short, long, env = "BSC_RPC_URL")]
    rpc: Option<String>,

    /// Deployer private key.
    #[clap(long, env = "PRIVATE_KEY", hide_env_values = true)]
    sk: Option<String>,

    /// Treasury address receiving staking fees.
    #[clap(short, long)]
    treasury: Option<String>,

    /// USDT token contract address.
    #[clap(long)]
    token: Option<String>,

    /// Directory holding the compiled contract artifacts.
    #[clap(short, long)]
    artifacts: Option<String>,
}

impl CommandLine {
    pub async fn execute(self) -> Result<()> {
        let config = DeployConfig::resolve(
            self.network,
            self.rpc,
            self.sk,
            self.treasury,
            self.token,
            self.artifacts,
        )?;
        log::info!(
            "network: {} (chain id {}), solc {}, optimizer enabled: {}, runs {}",
            config.network.label(),
            config.chain_id,
            config.compiler.version,
            config.compiler.optimizer_enabled,
            config.compiler.optimizer_runs,
        );
        log::debug!(
            "paths: sources {}, tests {}, cache {}, artifacts {}",
            config.paths.sources.display(),
            config.paths.tests.display(),
            config.paths.cache.display(),
            config.paths.artifacts.display(),
        );

        let deployer = ChainDeployer::connect(&config)?;
        let summary = Deploy::new(deployer, config).run().await?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }
}
