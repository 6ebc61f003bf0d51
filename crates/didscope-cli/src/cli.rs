use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "didscope",
    about = "Inspect DID document history in a hash-linked transaction DAG",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the node's REST API
    #[arg(long, global = true, default_value = "http://127.0.0.1:1323")]
    pub node_url: String,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the causal graph of one or more DID documents as Graphviz dot
    Analyze(AnalyzeArgs),
    /// Fetch and pretty-print a single transaction
    Show(ShowArgs),
    /// List transactions in a Lamport clock range
    List(ListArgs),
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// DIDs and/or hex transaction references
    #[arg(required = true)]
    pub seeds: Vec<String>,

    /// Abort the analysis after this many seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Write the dot output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Hex transaction reference
    pub tx: String,

    /// Also fetch and print the payload
    #[arg(long)]
    pub payload: bool,
}

#[derive(Args)]
pub struct ListArgs {
    /// Start of the Lamport clock range (inclusive)
    pub start: u64,

    /// End of the range (exclusive; defaults to start + 1)
    pub end: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_analyze() {
        let cli = Cli::try_parse_from(["didscope", "analyze", "did:example:alice"]).unwrap();
        if let Command::Analyze(args) = cli.command {
            assert_eq!(args.seeds, vec!["did:example:alice"]);
            assert!(args.timeout.is_none());
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn analyze_requires_a_seed() {
        assert!(Cli::try_parse_from(["didscope", "analyze"]).is_err());
    }

    #[test]
    fn parse_analyze_with_timeout_and_output() {
        let cli = Cli::try_parse_from([
            "didscope", "analyze", "--timeout", "30", "-o", "graph.dot", "did:example:alice",
        ])
        .unwrap();
        if let Command::Analyze(args) = cli.command {
            assert_eq!(args.timeout, Some(30));
            assert_eq!(args.output, Some(PathBuf::from("graph.dot")));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_multiple_seeds() {
        let tx_ref = "ab".repeat(32);
        let cli = Cli::try_parse_from([
            "didscope",
            "analyze",
            "did:example:alice",
            tx_ref.as_str(),
        ])
        .unwrap();
        if let Command::Analyze(args) = cli.command {
            assert_eq!(args.seeds.len(), 2);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_show_with_payload() {
        let tx_ref = "ab".repeat(32);
        let cli =
            Cli::try_parse_from(["didscope", "show", "--payload", tx_ref.as_str()]).unwrap();
        if let Command::Show(args) = cli.command {
            assert!(args.payload);
            assert_eq!(args.tx, tx_ref);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_list_range() {
        let cli = Cli::try_parse_from(["didscope", "list", "3", "7"]).unwrap();
        if let Command::List(args) = cli.command {
            assert_eq!(args.start, 3);
            assert_eq!(args.end, Some(7));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_node_url_global() {
        let cli = Cli::try_parse_from([
            "didscope", "--node-url", "http://node:8081", "list", "0",
        ])
        .unwrap();
        assert_eq!(cli.node_url, "http://node:8081");
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["didscope", "--verbose", "list", "0"]).unwrap();
        assert!(cli.verbose);
    }
}
