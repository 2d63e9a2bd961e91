use clap::Parser;

use crate::{input::prompt_cups, prelude::*, quantity::cups::Cups};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Number of cups consumed. Asked for on the standard input when omitted.
    #[clap(long, env = "CUPS", allow_negative_numbers = true)]
    pub cups: Option<Cups>,
}

impl Args {
    pub fn cups(&self) -> Result<Cups> {
        self.cups.map_or_else(prompt_cups, Ok)
    }
}
