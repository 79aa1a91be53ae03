//! Interactive question/answer loop.
//!
//! Each input line is handled to completion, including the awaited
//! advice fetch, before the next line is read.

mod command;
mod render;


pub use command::Command;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};
use yukang_ai::{presets, AdviceFetcher, Session};
use yukang_common::YukangError;

/// Run the loop until `/quit` or end of input.
pub async fn run<R, W>(
    session: &mut Session,
    fetcher: &AdviceFetcher,
    input: R,
    out: &mut W,
) -> Result<(), YukangError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    info!(session = %session.id().short(), "interactive session started");
    render::greeting(out)?;
    prompt(out)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = Command::parse(&line) else {
            prompt(out)?;
            continue;
        };
        debug!(?command, "input");

        match command {
            Command::Ask(question) => ask(session, fetcher, question, out).await?,
            Command::Preset(number) => {
                if let Some(preset) = presets::by_number(number) {
                    ask(session, fetcher, preset.question, out).await?;
                }
            }
            Command::ListPresets => render::presets(out)?,
            Command::History => render::transcript(out, session.transcript())?,
            Command::Reset => {
                session.reset();
                writeln!(out, "会话已重置。")?;
            }
            Command::Usage => render::usage(out, session.tracker())?,
            Command::Help => render::help(out)?,
            Command::Quit => break,
            Command::Unknown(input) => {
                writeln!(out, "未知命令：{input}")?;
                render::help(out)?;
            }
        }
        prompt(out)?;
    }

    info!(
        session = %session.id().short(),
        questions = session.tracker().call_count(),
        "interactive session ended"
    );
    Ok(())
}

/// Ask one question and print both sides of the exchange.
pub async fn ask<W: Write>(
    session: &mut Session,
    fetcher: &AdviceFetcher,
    question: impl Into<String>,
    out: &mut W,
) -> Result<(), YukangError> {
    let question = question.into();
    render::message(out, &yukang_ai::Message::user(question.as_str()))?;
    writeln!(out, "思考中...")?;
    out.flush()?;

    let reply = session.ask(fetcher, question).await;
    render::message(out, &reply)?;
    Ok(())
}

fn prompt(out: &mut impl Write) -> std::io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
