use crate::ExternalCallError;
use anchor_client::solana_sdk::{pubkey::Pubkey, signature::Signature};
use anchor_client::Program;
use fehler::throws;

/// The calls the harness makes on a deployed program.
pub trait ProgramHandle {
    fn program_id(&self) -> Pubkey;

    /// Sends `initialize` and blocks until the cluster answers.
    fn initialize(&self) -> Result<Signature, ExternalCallError>;
}

pub struct SolSwapProgram {
    program: Program,
}

impl SolSwapProgram {
    pub fn new(program: Program) -> Self {
        Self { program }
    }
}

impl ProgramHandle for SolSwapProgram {
    fn program_id(&self) -> Pubkey {
        self.program.id()
    }

    #[throws(ExternalCallError)]
    fn initialize(&self) -> Signature {
        self.program
            .request()
            .accounts(sol_swap::accounts::Initialize {})
            .args(sol_swap::instruction::Initialize {})
            .send()?
    }
}
