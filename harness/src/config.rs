use anchor_client::solana_sdk::{
    commitment_config::CommitmentConfig,
    pubkey::Pubkey,
    signature::{read_keypair_file, Signer},
};
use anchor_client::{Client, Cluster};
use anyhow::{anyhow, Error};
use fehler::throws;
use log::info;
use std::{env, iter, path::PathBuf};
use structopt::StructOpt;

/// Everything needed to talk to a cluster. Built once at start and passed around by reference.
#[derive(Debug, StructOpt)]
#[structopt(
    name = "sol-swap-harness",
    about = "Calls initialize on the sol-swap program"
)]
pub struct ConnectionConfig {
    /// Cluster moniker (localnet, devnet, ...) or RPC url
    #[structopt(long, env = "ANCHOR_PROVIDER_URL", default_value = "localnet")]
    pub provider_url: Cluster,

    /// Path to the keypair paying for and signing the transactions
    #[structopt(long, env = "ANCHOR_WALLET")]
    pub wallet: String,

    #[structopt(
        long,
        env,
        default_value = "processed",
        parse(try_from_str = parse_commitment)
    )]
    pub commitment: CommitmentConfig,

    #[structopt(long, env, short = "p")]
    pub program_id: Option<Pubkey>,
}

impl ConnectionConfig {
    /// Parses the configuration from environment variables only, ignoring argv.
    #[throws(Error)]
    pub fn from_env() -> Self {
        Self::from_iter_safe(iter::once("sol-swap-harness"))?
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id.unwrap_or(sol_swap::ID)
    }

    pub fn wallet_path(&self) -> PathBuf {
        match (self.wallet.strip_prefix("~/"), env::var_os("HOME")) {
            (Some(rest), Some(home)) => PathBuf::from(home).join(rest),
            _ => PathBuf::from(&self.wallet),
        }
    }

    #[throws(Error)]
    pub fn connect(&self) -> Client {
        let path = self.wallet_path();
        let payer = read_keypair_file(&path)
            .map_err(|e| anyhow!("cannot read wallet {}: {}", path.display(), e))?;

        info!(
            "Connecting to {} as {}",
            self.provider_url.url(),
            payer.pubkey()
        );

        Client::new_with_options(self.provider_url.clone(), payer, self.commitment)
    }
}

fn parse_commitment(level: &str) -> Result<CommitmentConfig, String> {
    match level {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        other => Err(format!("unknown commitment level `{}`", other)),
    }
}
