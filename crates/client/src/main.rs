//! Terminal entry point for the skirmish client.

use anyhow::Result;
use runtime::{RuntimeConfig, Session};
use skirmish_client::{DisplayConfig, Shell};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let runtime_config = RuntimeConfig::from_env();
    let display = DisplayConfig::from_env();

    tracing::info!("Starting skirmish with scenario {:?}", runtime_config.scenario);
    let session = Session::from_config(&runtime_config)?;
    let mut shell = Shell::new(session, display);

    let mut stdout = tokio::io::stdout();
    write_lines(&mut stdout, &shell.greeting()).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let reply = shell.run_line(&line);
        write_lines(&mut stdout, &reply.lines).await?;
        if reply.quit {
            break;
        }
    }

    tracing::info!("Leaving after turn {}", shell.session().engine().turn());
    Ok(())
}

async fn write_lines(stdout: &mut tokio::io::Stdout, lines: &[String]) -> Result<()> {
    for line in lines {
        stdout.write_all(line.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await?;
    Ok(())
}
