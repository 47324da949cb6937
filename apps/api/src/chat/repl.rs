//! Terminal front-end: reads one message per line and prints each reply.

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::catalog::CourseCatalog;
use crate::chat::session::{ChatRole, ChatSession};
use crate::llm_client::TextGenerator;

const PROMPT: &str = "> ";
const FAREWELL: &str = "Goodbye! Good luck on your learning journey.";
const UNFINISHED: &str = "Your profile was not finished; start a new chat to begin again.";

/// Drives `session` from `reader` until EOF or an `exit`/`quit` line.
/// Blank lines are skipped; every other line is passed through verbatim.
pub async fn run_chat<R, W>(
    reader: R,
    mut writer: W,
    session: &mut ChatSession,
    catalog: &CourseCatalog,
    generator: &dyn TextGenerator,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let replayed = session
        .transcript()
        .iter()
        .filter(|m| m.role == ChatRole::Assistant);
    for message in replayed {
        writer.write_all(format!("{}\n\n", message.content).as_bytes()).await?;
    }

    let mut lines = reader.lines();
    loop {
        writer.write_all(PROMPT.as_bytes()).await?;
        writer.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            break;
        }

        let reply = session.handle_message(&line, catalog, generator).await;
        writer.write_all(format!("{reply}\n\n").as_bytes()).await?;
    }

    if !session.draft().is_empty() {
        writer.write_all(format!("\n{UNFINISHED}").as_bytes()).await?;
    }
    writer.write_all(format!("\n{FAREWELL}\n").as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
