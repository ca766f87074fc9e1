use anchor_lang::prelude::*;
use fehler::throws;

#[derive(Accounts)]
pub struct Initialize {}

impl Initialize {
    // Nothing is persisted, so repeated calls all succeed.
    #[throws(ProgramError)]
    pub fn process(&mut self) {}
}
