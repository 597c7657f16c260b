use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use async_trait::async_trait;
use ethers::{
    abi::{Abi, Token},
    contract::ContractFactory,
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::{Bytes, H160, U256},
};
use serde::Deserialize;

use crate::{config::DeployConfig, deploy::StakingDeployer, utils::parse_wallet};

pub const USDT_STAKING: &str = "YPSUSDTStaking";
pub const BNB_STAKING: &str = "YPSBNBStaking";

pub type Client = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Compiled contract artifact, hardhat layout: `abi` plus creation `bytecode`.
#[derive(Debug, Deserialize)]
pub struct ContractArtifact {
    pub abi: Abi,
    pub bytecode: Bytes,
}

impl ContractArtifact {
    pub fn load(artifacts: &Path, contract: &str) -> Result<Self> {
        let path = artifacts.join(format!("{contract}.json"));
        let file =
            File::open(&path).with_context(|| format!("artifact not found: {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("malformed artifact: {}", path.display()))
    }
}

/// Chain-backed deployer. Holds the only signing client in the process;
/// everything downstream receives it by injection.
pub struct ChainDeployer {
    client: Arc<Client>,
    gas: U256,
    gas_price: U256,
    artifacts: PathBuf,
}

impl ChainDeployer {
    pub fn connect(config: &DeployConfig) -> Result<Self> {
        let wallet = parse_wallet(&config.sk, config.chain_id)?;
        let provider = Provider::<Http>::try_from(config.url.as_str())?;
        let client = Arc::new(SignerMiddleware::new(provider, wallet));

        Ok(Self {
            client,
            gas: U256::from(config.gas),
            gas_price: U256::from(config.gas_price),
            artifacts: config.paths.artifacts.clone(),
        })
    }

    async fn deploy_contract(&self, contract: &str, args: Vec<Token>) -> Result<H160> {
        let artifact = ContractArtifact::load(&self.artifacts, contract)?;
        let factory = ContractFactory::new(artifact.abi, artifact.bytecode, self.client.clone());

        let mut deployer = factory
            .deploy(args)
            .with_context(|| format!("constructor arguments rejected for {contract}"))?
            .legacy();
        deployer.tx.set_gas(self.gas);
        deployer.tx.set_gas_price(self.gas_price);

        let deployed = deployer
            .send()
            .await
            .with_context(|| format!("deployment of {contract} failed"))?;
        Ok(deployed.address())
    }
}

#[async_trait]
impl StakingDeployer for ChainDeployer {
    fn signer_address(&self) -> H160 {
        self.client.signer().address()
    }

    async fn balance(&self) -> Result<U256> {
        let address = self.signer_address();
        Ok(self.client.get_balance(address, None).await?)
    }

    async fn deploy_usdt_staking(&self, token: H160, treasury: H160) -> Result<H160> {
        self.deploy_contract(
            USDT_STAKING,
            vec![Token::Address(token), Token::Address(treasury)],
        )
        .await
    }

    async fn deploy_bnb_staking(&self, treasury: H160) -> Result<H160> {
        self.deploy_contract(BNB_STAKING, vec![Token::Address(treasury)])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hardhat_artifact() {
        let raw = r#"{
            "contractName": "YPSBNBStaking",
            "abi": [
                {
                    "inputs": [
                        { "internalType": "address", "name": "treasury", "type": "address" }
                    ],
                    "stateMutability": "nonpayable",
                    "type": "constructor"
                }
            ],
            "bytecode": "0x6080604052"
        }"#;
        let artifact: ContractArtifact = serde_json::from_str(raw).unwrap();
        assert_eq!(artifact.bytecode.to_vec(), vec![0x60, 0x80, 0x60, 0x40, 0x52]);
        let constructor = artifact.abi.constructor.unwrap();
        assert_eq!(constructor.inputs.len(), 1);
    }

    #[test]
    fn missing_artifact_is_reported() {
        let err = ContractArtifact::load(Path::new("./no-such-dir"), BNB_STAKING).unwrap_err();
        assert!(err.to_string().contains("artifact not found"));
    }
}
