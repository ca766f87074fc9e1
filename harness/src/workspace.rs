use anchor_client::solana_sdk::pubkey::Pubkey;
use anchor_client::{Client, Program};
use anyhow::{anyhow, Error};
use fehler::throws;
use log::debug;
use std::collections::BTreeMap;

/// Name to program lookup for the programs built in this workspace.
///
/// The table is owned by whoever builds it; there is no process-wide registry. Names
/// are compared after [`normalize_program_name`], so `solSwap`, `SolSwap`, `sol-swap`
/// and `sol_swap` all denote the same program.
pub struct Workspace {
    client: Client,
    programs: BTreeMap<String, Pubkey>,
}

impl Workspace {
    pub fn new(client: Client) -> Self {
        let mut programs = BTreeMap::new();
        programs.insert(normalize_program_name("sol_swap"), sol_swap::ID);

        Self { client, programs }
    }

    /// Registers `name`, replacing the program id it was previously bound to.
    pub fn with_program(mut self, name: &str, program_id: Pubkey) -> Self {
        self.programs
            .insert(normalize_program_name(name), program_id);
        self
    }

    pub fn program_id(&self, name: &str) -> Option<Pubkey> {
        self.programs.get(&normalize_program_name(name)).copied()
    }

    #[throws(Error)]
    pub fn resolve(&self, name: &str) -> Program {
        let program_id = self
            .program_id(name)
            .ok_or_else(|| anyhow!("program `{}` is not part of the workspace", name))?;
        debug!("Resolved {} to {}", name, program_id);

        self.client.program(program_id)
    }
}

/// Converts camelCase, PascalCase and kebab-case program names to snake_case.
///
/// A run of capitals stays one word, so `HTTPServer` becomes `http_server`.
pub fn normalize_program_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' {
            out.push('_');
        } else if c.is_ascii_uppercase() {
            let prev = if i > 0 { Some(chars[i - 1]) } else { None };
            let next = chars.get(i + 1).copied();
            let starts_word = match prev {
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                // last capital of a run followed by a lowercase letter: `HTTPServer`
                Some(p) if p.is_ascii_uppercase() => {
                    next.map_or(false, |n| n.is_ascii_lowercase())
                }
                _ => false,
            };
            if starts_word && !out.ends_with('_') {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}
