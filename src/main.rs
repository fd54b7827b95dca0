use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

use huffman_codec::{codec, logging, storage, CodeTable, Error, FrequencyTable, HuffmanTree};

mod cli;

use cli::{ArtifactPaths, Cli, Command};

fn compress(paths: &ArtifactPaths) -> Result<(), Error> {
    let text = storage::read_text(&paths.text)?;
    let compressed = codec::compress(&text)?;

    storage::write_packed(&paths.packed, &compressed.packed)?;
    storage::write_tree(&paths.tree, &compressed.tree)?;

    info!(
        input = %paths.text.display(),
        packed = %paths.packed.display(),
        tree = %paths.tree.display(),
        "compressed {} bytes into {}",
        text.len(),
        compressed.packed.len()
    );
    Ok(())
}

fn decompress(paths: &ArtifactPaths) -> Result<String, Error> {
    let packed = storage::read_packed(&paths.packed)?;
    let tree = storage::read_tree(&paths.tree)?;

    codec::decompress(&packed, &tree)
}

/// Writes the decoded text byte for byte, with no trailing newline added.
fn write_output(out: &mut impl Write, text: &str) -> Result<(), Error> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| Error::Io(e, PathBuf::from("<stdout>")))
}

fn table(path: &Path) -> Result<String, Error> {
    let text = storage::read_text(path)?;
    let tree = HuffmanTree::build(&FrequencyTable::analyze(text.chars()))?;

    Ok(serde_json::to_string_pretty(&CodeTable::from_tree(&tree))?)
}

fn run(command: Command) -> Result<(), Error> {
    match command {
        Command::Compress { paths } => compress(&paths),
        Command::Decompress { paths, output } => {
            let text = decompress(&paths)?;
            match output {
                Some(path) => storage::write_text(&path, &text),
                None => write_output(&mut std::io::stdout().lock(), &text),
            }
        }
        Command::Roundtrip { paths } => {
            compress(&paths)?;
            println!("{}", decompress(&paths)?);
            Ok(())
        }
        Command::Table { text } => {
            println!("{}", table(&text)?);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup_logging(cli.pretty);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "huffman failed");
            ExitCode::FAILURE
        }
    }
}
