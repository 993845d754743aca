//! Interactive lookup shell

use std::io::{self, BufRead, Write};

use kinship_core::FamilyTree;

use crate::output::{self, OutputFormat};
use crate::AppContext;

/// Prompt-and-answer loop over any line reader and writer
pub struct Shell<'a> {
    tree: &'a FamilyTree,
    exit_command: String,
    format: OutputFormat,
}

impl<'a> Shell<'a> {
    pub fn new(tree: &'a FamilyTree, exit_command: impl Into<String>, format: OutputFormat) -> Self {
        Self {
            tree,
            exit_command: exit_command.into(),
            format,
        }
    }

    pub fn prompt(&self) -> String {
        format!(
            "Enter a name to look up relatives (or '{}' to quit): ",
            self.exit_command
        )
    }

    fn is_exit(&self, line: &str) -> bool {
        line.to_lowercase() == self.exit_command.to_lowercase()
    }

    /// Run until the exit command or end of input
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> anyhow::Result<()> {
        let mut buf: Vec<u8> = Vec::new();
        let mut queries = 0usize;

        loop {
            write!(output, "{}", self.prompt())?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(output)?;
                tracing::debug!("End of input after {} queries", queries);
                break;
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!("Ignoring input line that is not valid UTF-8: {}", e);
                    writeln!(output, "Error: input is not valid UTF-8")?;
                    continue;
                }
            };

            let name = line.strip_suffix('\n').unwrap_or(line);
            let name = name.strip_suffix('\r').unwrap_or(name);

            if self.is_exit(name) {
                tracing::debug!("Exit command received after {} queries", queries);
                break;
            }
            if name.is_empty() {
                continue;
            }

            queries += 1;
            match output::answer(self.tree, name, self.format) {
                Ok(answer) => writeln!(output, "{}", answer.text())?,
                Err(e) => {
                    tracing::error!("Failed to answer query '{}': {}", name, e);
                    writeln!(output, "Error: {}", e)?;
                }
            }
        }

        Ok(())
    }
}

pub fn run(ctx: &AppContext) -> anyhow::Result<()> {
    tracing::info!("Starting interactive shell over {} people", ctx.tree.len());

    let shell = Shell::new(&ctx.tree, ctx.config.exit_command.as_str(), ctx.format);
    let stdin = io::stdin();
    let stdout = io::stdout();
    shell.run(stdin.lock(), stdout.lock())
}
