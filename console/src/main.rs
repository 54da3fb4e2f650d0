use std::io::{BufRead, Write};

use clap::Parser;
use item_console::{command::HELP, view, Command, CommandError, Session, UreqTransport, DEFAULT_BASE_URL};
use item_core::ItemClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "item-manager")]
#[command(about = "List, add, rename and delete items stored behind a REST collection")]
struct Args {
    /// Collection URL of the remote item store
    #[arg(long, env = "ITEM_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("item_console=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(base_url = %args.base_url, "starting item manager");

    let mut session = Session::new(ItemClient::new(&args.base_url), UreqTransport::new());
    session.refresh();

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut line = String::new();
    loop {
        write!(stdout, "\n{}\n> ", view::render(session.state()))?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match line.trim_end().parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(stdout, "{HELP}")?,
            Ok(command) => {
                if let Err(e) = session.apply(command) {
                    writeln!(stdout, "{e}")?;
                }
            }
            Err(CommandError::Empty) => {}
            Err(e) => writeln!(stdout, "{e}\n{HELP}")?,
        }
    }
    Ok(())
}
