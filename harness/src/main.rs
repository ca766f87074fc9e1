use anyhow::Result;
use log::info;
use sol_swap_harness::{
    explorer_url, run_initialize_case, ConnectionConfig, SolSwapProgram, Workspace,
};
use structopt::StructOpt;

fn main() -> Result<()> {
    env_logger::init();

    let opt = ConnectionConfig::from_args();
    let program_id = opt.program_id();
    info!("program_id: {}", program_id);

    let client = opt.connect()?;
    let workspace = Workspace::new(client).with_program("solSwap", program_id);
    let sol_swap = SolSwapProgram::new(workspace.resolve("solSwap")?);

    let tx = run_initialize_case(&sol_swap)?;
    info!("Explorer: {}", explorer_url(&opt.provider_url, &tx));

    Ok(())
}
