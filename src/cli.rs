use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Huffman compression of text files.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Log in a human readable format instead of JSON.
    #[arg(long, global = true, env = "HUFFMAN_LOG_PRETTY")]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compress a text file into packed bytes and a tree document.
    Compress {
        #[command(flatten)]
        paths: ArtifactPaths,
    },
    /// Restore the text from packed bytes and their tree document.
    Decompress {
        #[command(flatten)]
        paths: ArtifactPaths,

        /// Write the text here instead of printing it.
        #[arg(short, long, env = "HUFFMAN_OUTPUT")]
        output: Option<PathBuf>,
    },
    /// Compress, then decompress and print the recovered text.
    Roundtrip {
        #[command(flatten)]
        paths: ArtifactPaths,
    },
    /// Print the code table of a text file as JSON.
    Table {
        #[arg(short, long, env = "HUFFMAN_TEXT", default_value = "text.txt")]
        text: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct ArtifactPaths {
    /// Plain text input.
    #[arg(short, long, env = "HUFFMAN_TEXT", default_value = "text.txt")]
    pub text: PathBuf,

    /// Packed bytes: one padding header byte then the payload.
    #[arg(short, long, env = "HUFFMAN_PACKED", default_value = "out.bin")]
    pub packed: PathBuf,

    /// JSON document of the huffman tree.
    #[arg(long, env = "HUFFMAN_TREE", default_value = "tree.json")]
    pub tree: PathBuf,
}
