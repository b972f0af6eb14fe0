use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use casekit::cli::{CliArgs, InputSource, RunMode, StatsFormat};
use casekit::commands::{Cmd, Operation};
use casekit::config::Config;
use casekit::config_paths;
use casekit::input::{self, filename_for_display};
use casekit::messages::Msg;
use casekit::model::AppModel;
use casekit::runtime::{apply_operations, dispatch, Clipboard, Effects, Session, SystemClipboard};

fn main() -> Result<()> {
    casekit::tracing::init();

    let args = CliArgs::parse();
    let startup = args
        .into_config(io::stdin().is_terminal())
        .map_err(anyhow::Error::msg)?;

    let mut config = Config::load();
    if let Some(limit) = startup.history_limit {
        config.history_limit = limit;
    }

    match startup.mode {
        RunMode::WriteConfig => write_config(&config),
        RunMode::Interactive => {
            let (text, _) = load_input(&startup.input)?;
            run_interactive(AppModel::with_text(config, text), Effects::system())
        }
        RunMode::Batch {
            operations,
            output,
            copy,
            stats,
        } => {
            let (text, line_ending) = load_input(&startup.input)?;
            // The process exits right after a batch copy
            let clipboard = if copy {
                SystemClipboard::new().holding_until_pasted()
            } else {
                SystemClipboard::new()
            };
            let batch = Batch {
                operations,
                output,
                copy,
                stats,
                line_ending,
            };
            run_batch(AppModel::with_text(config, text), Effects::new(clipboard), batch)
        }
    }
}

/// Batch-mode options after input loading
struct Batch {
    operations: Vec<Operation>,
    output: Option<PathBuf>,
    copy: bool,
    stats: Option<StatsFormat>,
    /// Line ending stripped from the input, restored on output
    line_ending: Option<&'static str>,
}

fn run_batch<C: Clipboard>(mut model: AppModel, mut effects: Effects<C>, batch: Batch) -> Result<()> {
    for status in apply_operations(&mut model, &mut effects, &batch.operations) {
        tracing::info!("{}", status);
    }

    if let Some(format) = batch.stats {
        print_stats(&model, format)?;
    }

    match &batch.output {
        None => write_stdout(model.text(), batch.line_ending)?,
        Some(path) => {
            let mut content = model.text().to_string();
            content.push_str(batch.line_ending.unwrap_or_default());
            if let Msg::DownloadCompleted(Err(e)) = effects.execute(Cmd::SaveFile {
                path: path.clone(),
                content,
            }) {
                bail!("Failed to write {}: {}", path.display(), e);
            }
        }
    }

    // Last, since the clipboard write may block until the text is pasted
    if batch.copy {
        if cfg!(target_os = "linux") && !model.text().is_empty() {
            eprintln!("Holding the clipboard until it is pasted (Ctrl-C to give up)");
        }
        dispatch(&mut model, &mut effects, Msg::Copy);
        if let Some(status) = model.ui.take_status() {
            eprintln!("{}", status);
        }
    }

    Ok(())
}

fn write_config(config: &Config) -> Result<()> {
    let path = config_paths::config_file().context("No config directory available")?;
    config.save_to(&path).map_err(anyhow::Error::msg)?;
    eprintln!("Wrote {}", path.display());
    Ok(())
}

fn load_input(source: &InputSource) -> Result<(String, Option<&'static str>)> {
    let raw = match source {
        InputSource::Empty => return Ok((String::new(), None)),
        InputSource::File(path) => input::read_text_file(path)
            .map_err(|e| anyhow::anyhow!(e.user_message(&filename_for_display(path))))?,
        InputSource::Stdin => input::read_text(io::stdin().lock())
            .map_err(|e| anyhow::anyhow!(e.user_message("stdin")))?,
    };
    Ok(input::strip_trailing_newline(raw))
}

fn print_stats(model: &AppModel, format: StatsFormat) -> Result<()> {
    let stats = model.stats();
    match format {
        StatsFormat::Text => eprintln!("{}", stats.summary()),
        StatsFormat::Json => {
            let json = serde_json::to_string(&stats).context("Failed to serialize stats")?;
            eprintln!("{}", json);
        }
    }
    Ok(())
}

fn write_stdout(text: &str, line_ending: Option<&str>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(text.as_bytes())
        .context("Failed to write to stdout")?;
    let ending = match line_ending {
        Some(ending) => ending,
        None if !text.is_empty() && !text.ends_with('\n') => "\n",
        None => "",
    };
    out.write_all(ending.as_bytes())
        .context("Failed to write to stdout")?;
    out.flush().context("Failed to flush stdout")
}

fn run_interactive(model: AppModel, effects: Effects<SystemClipboard>) -> Result<()> {
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let mut session = Session::new(model, effects).with_prompt(prompt);

    if prompt {
        eprintln!("casekit interactive session. Type :help for commands, :quit to exit.");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    session
        .run(stdin.lock(), &mut out)
        .context("Interactive session failed")?;

    Ok(())
}
