// # Accounts
//
// The program currently exposes a single `initialize` instruction which takes no accounts.
// The escrow account types below are declared so that they are part of the IDL, but no
// instruction creates or consumes them yet.

mod contexts;
mod states;

pub use contexts::*;
pub use states::{Asset, Escrow};

use anchor_lang::prelude::*;
use fehler::throws;

declare_id!("2cESwGJN1TtkYENEYqQFJNAjDnkyhHjCUUeRmibP8RuP");

#[program]
pub mod sol_swap {
    use super::*;

    #[throws(ProgramError)]
    pub fn initialize(ctx: Context<Initialize>) {
        msg!("Greetings from: {:?}", ctx.program_id);
        ctx.accounts.process()?
    }
}
