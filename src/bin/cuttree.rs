//! Reads a capacitated edge list from stdin and writes its Gomory-Hu tree to stdout.
//!
//! ```text
//! $ printf '3 2\n0 1 5\n1 2 3\n' | cuttree
//! 1 0 5
//! 2 1 3
//! ```
//!
//! Set `RUST_LOG=debug` to follow the individual cut computations on stderr.

use std::{
    io::{self, BufWriter},
    process::ExitCode,
};

use cuttree::{Result, algo::GomoryHu, io::*, repr::ResidualNetwork};

fn run() -> Result<()> {
    let mut network: ResidualNetwork =
        CapacitatedEdgeListReader::new().try_read_network(io::stdin().lock())?;
    let tree = GomoryHu::new().compute(&mut network)?;
    CutTreeWriter::new().try_write_tree(&tree, BufWriter::new(io::stdout().lock()))
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("cuttree: {err}");
            ExitCode::FAILURE
        }
    }
}
