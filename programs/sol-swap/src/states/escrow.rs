use anchor_lang::prelude::*;

#[account]
#[derive(Debug)]
pub struct Escrow {
    pub maker: Pubkey,
    pub offered_asset: Asset,
    pub wanted_asset: Asset,
    pub bump: u8,
}

impl Escrow {
    // discriminator + maker + two assets at their widest + bump
    pub const LEN: usize = 8 + 32 + Asset::MAX_LEN * 2 + 1;
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub enum Asset {
    Sol { amount: u64 },
    Token { mint: Pubkey, amount: u64 },
}

impl Asset {
    /// Borsh size of the widest variant: tag + mint + amount.
    pub const MAX_LEN: usize = 1 + 32 + 8;

    pub fn amount(&self) -> u64 {
        match self {
            Asset::Sol { amount } | Asset::Token { amount, .. } => *amount,
        }
    }

    pub fn mint(&self) -> Option<Pubkey> {
        match self {
            Asset::Sol { .. } => None,
            Asset::Token { mint, .. } => Some(*mint),
        }
    }
}
