use crate::{ExternalCallError, ProgramHandle};
use anchor_client::solana_sdk::signature::Signature;
use anchor_client::Cluster;
use fehler::throws;
use log::{debug, warn};
use std::io::{self, Write};

/// Calls `initialize` once and reports the signature on stdout.
///
/// Failures are returned as they are; there is no retry.
#[throws(ExternalCallError)]
pub fn run_initialize_case<H>(handle: &H) -> Signature
where
    H: ProgramHandle + ?Sized,
{
    run_initialize_case_to(handle, &mut io::stdout())?
}

/// Same as [`run_initialize_case`], reporting to `out` instead of stdout.
///
/// The signature is only written once the call succeeded. A failing writer does not
/// turn a landed transaction into an error.
#[throws(ExternalCallError)]
pub fn run_initialize_case_to<H, W>(handle: &H, out: &mut W) -> Signature
where
    H: ProgramHandle + ?Sized,
    W: Write,
{
    debug!("Calling initialize on {}", handle.program_id());

    let tx = handle.initialize()?;
    if let Err(e) = report(out, &tx) {
        warn!("Cannot report signature {}: {}", tx, e);
    }

    tx
}

pub fn report<W: Write>(out: &mut W, tx: &Signature) -> io::Result<()> {
    writeln!(out, "Your transaction signature {}", tx)?;
    out.flush()
}

pub fn explorer_url(cluster: &Cluster, tx: &Signature) -> String {
    let query = match cluster {
        Cluster::Mainnet => String::new(),
        Cluster::Devnet => "?cluster=devnet".to_string(),
        Cluster::Testnet => "?cluster=testnet".to_string(),
        other => format!("?cluster=custom&customUrl={}", other.url()),
    };

    format!("https://explorer.solana.com/tx/{}{}", tx, query)
}
