use std::path::PathBuf;

use asm6502_lsp::{create_service, logging, InstructionTable};
use clap::Parser;
use tower_lsp::Server;

/// Language server for 6502 assembly.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Log file path; logs go to stderr when unset or unopenable.
    #[arg(long)]
    logs: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.logs.as_deref());

    let instructions = InstructionTable::bundled()?;
    tracing::info!(instructions = instructions.len(), "starting 6502 language server");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = create_service(instructions);
    Server::new(stdin, stdout, socket).serve(service).await;

    tracing::info!("6502 language server stopped");
    Ok(())
}
