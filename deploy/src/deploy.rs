use anyhow::Result;
use async_trait::async_trait;
use ethers::types::{H160, U256};
use serde::Serialize;

use crate::{config::DeployConfig, utils::format_bnb};

/// Seam between the driver and the chain. The production implementation is
/// `contracts::ChainDeployer`; tests substitute a recording mock.
#[async_trait]
pub trait StakingDeployer: Send + Sync {
    fn signer_address(&self) -> H160;

    async fn balance(&self) -> Result<U256>;

    async fn deploy_usdt_staking(&self, token: H160, treasury: H160) -> Result<H160>;

    async fn deploy_bnb_staking(&self, treasury: H160) -> Result<H160>;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct DeploymentSummary {
    pub usdt_staking: H160,
    pub bnb_staking: H160,
    pub treasury: H160,
    pub deployer: H160,
    pub network: String,
}

pub struct Deploy<D> {
    deployer: D,
    config: DeployConfig,
}

impl<D: StakingDeployer> Deploy<D> {
    pub fn new(deployer: D, config: DeployConfig) -> Self {
        Self { deployer, config }
    }

    /// Runs the two deployments in fixed order. Sequential submission keeps
    /// the signer's nonce serialized; any error aborts before the next step.
    pub async fn run(&self) -> Result<DeploymentSummary> {
        let deployer_address = self.deployer.signer_address();
        let balance = self.deployer.balance().await?;
        log::info!("deployer address: {deployer_address:?}");
        log::info!("deployer balance: {} BNB", format_bnb(balance));
        log::info!("treasury address: {:?}", self.config.treasury);
        log::info!("usdt address: {:?}", self.config.token);

        let usdt_staking = self
            .deployer
            .deploy_usdt_staking(self.config.token, self.config.treasury)
            .await?;
        println!("YPSUSDTStaking address:{usdt_staking:?}");

        let bnb_staking = self
            .deployer
            .deploy_bnb_staking(self.config.treasury)
            .await?;
        println!("YPSBNBStaking address:{bnb_staking:?}");

        Ok(DeploymentSummary {
            usdt_staking,
            bnb_staking,
            treasury: self.config.treasury,
            deployer: deployer_address,
            network: self.config.network.label().to_string(),
        })
    }
}
