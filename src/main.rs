use std::io::{stdout, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use divisor_parity::CLIArgs;
use tracing::info;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    divisor_parity::init_logger(args.verbose);

    info!(upper_bound = args.upper_bound, "counting odd and even divisors");
    let mut writer = BufWriter::new(stdout().lock());
    let test_count = divisor_parity::write_report(&mut writer, args.upper_bound)
        .with_context(|| {
            format!(
                "Failed to report divisor counts for numbers 1 to {}.",
                args.upper_bound
            )
        })?;
    info!(test_count, "finished");

    Ok(())
}
