use std::time::Duration;

use anyhow::Context;
use colored::Colorize;
use tokio_util::sync::CancellationToken;

use didscope_client::{HttpClient, TransactionStore};
use didscope_graph::GraphAnalyzer;
use didscope_types::{Transaction, TxHash};

use crate::cli::{AnalyzeArgs, Cli, Command, ListArgs, ShowArgs};

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let client = HttpClient::new(&cli.node_url);
    match cli.command {
        Command::Analyze(args) => cmd_analyze(client, args).await,
        Command::Show(args) => cmd_show(client, args).await,
        Command::List(args) => cmd_list(client, args).await,
    }
}

async fn cmd_analyze(client: HttpClient, args: AnalyzeArgs) -> anyhow::Result<()> {
    let cancel = CancellationToken::new();

    // Ctrl-C aborts the analysis; the in-flight fetch is abandoned.
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });
    if let Some(secs) = args.timeout {
        let on_deadline = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(secs)).await;
            on_deadline.cancel();
        });
    }

    let analyzer = GraphAnalyzer::new(client.clone(), client);
    let dot = analyzer.analyze(&args.seeds, &cancel).await?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &dot)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("{} wrote {}", "✓".green().bold(), path.display().to_string().bold());
        }
        None => print!("{dot}"),
    }
    Ok(())
}

async fn cmd_show(client: HttpClient, args: ShowArgs) -> anyhow::Result<()> {
    let tx_ref = TxHash::from_hex(&args.tx)
        .with_context(|| format!("invalid transaction reference {:?}", args.tx))?;
    let tx = client.fetch_transaction(&tx_ref).await?;

    println!("{} {}", "transaction:".cyan(), tx.hash);
    println!("{} {}", "payload type:".cyan(), tx.payload_type);
    println!("{} {}", "payload hash:".cyan(), tx.payload);
    println!("{} {}", "lamport clock:".cyan(), tx.lamport_clock);
    for prev in &tx.prevs {
        println!("{} {}", "prev:".cyan(), prev);
    }
    if let Some(key) = &tx.signing_key {
        println!("{} {}", "signing key:".cyan(), key);
    }
    if let Some(key_id) = &tx.signing_key_id {
        println!("{} {}", "signing key id:".cyan(), key_id);
    }

    if args.payload {
        let payload = client.fetch_payload(&tx.payload).await?;
        println!("{}", "payload:".cyan());
        println!("{}", format_payload(&payload));
    }
    Ok(())
}

async fn cmd_list(client: HttpClient, args: ListArgs) -> anyhow::Result<()> {
    let end = args.end.unwrap_or(args.start + 1);
    let txs = client.list_transactions(args.start, end).await?;
    if txs.is_empty() {
        println!("No transactions in range {}..{}.", args.start, end);
        return Ok(());
    }
    for tx in &txs {
        println!("{}", summary_line(tx));
    }
    Ok(())
}

/// Payloads are usually JSON; indent them for reading, otherwise fall back
/// to a lossy string.
fn format_payload(payload: &[u8]) -> String {
    match serde_json::from_slice::<serde_json::Value>(payload) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_default(),
        Err(_) => String::from_utf8_lossy(payload).into_owned(),
    }
}

fn summary_line(tx: &Transaction) -> String {
    format!(
        "{:>6}  {}  {}",
        tx.lamport_clock,
        tx.hash.short_hex().yellow(),
        tx.payload_type
    )
}
