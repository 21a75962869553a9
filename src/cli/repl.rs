//! Line-by-line read/respond loop.

use super::session::Session;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

/// Read commands from `input` until `exit` or end of input, writing the
/// prompt and every response to `output`.
///
/// Each line is fully handled before the next one is read.
pub async fn run<R, W>(session: &mut Session, input: R, mut output: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let prompt = session.config().prompt.clone();
    let mut lines = input.lines();

    info!("session started");
    loop {
        output.write_all(prompt.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            info!("end of input");
            break;
        };

        let Some(response) = session.respond(&line) else {
            continue;
        };

        output.write_all(response.text.as_bytes()).await?;
        output.write_all(b"\n").await?;

        if response.exit {
            break;
        }
    }
    output.flush().await?;
    info!(records = session.book().len(), "session finished");

    Ok(())
}

/// Run the loop on the process's stdin and stdout.
pub async fn run_stdio(session: &mut Session) -> std::io::Result<()> {
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    run(session, stdin, tokio::io::stdout()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn test_run_stops_on_exit() {
        let mut session = Session::new(Config {
            prompt: "> ".to_string(),
            ..Config::default()
        });
        let input: &[u8] = b"add alice 0501234567\n\nexit\nadd bob\n";
        let mut output = Vec::new();

        run(&mut session, input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("alice: phones [0501234567], birthday not set has been added"));
        assert!(text.ends_with("Good bye!\n"));
        assert!(!session.book().contains("bob"));
    }

    #[tokio::test]
    async fn test_run_stops_on_eof() {
        let mut session = Session::new(Config::default());
        let input: &[u8] = b"add alice\nwhat";
        let mut output = Vec::new();

        run(&mut session, input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Wrong command: what"));
        assert!(session.book().contains("alice"));
    }
}
