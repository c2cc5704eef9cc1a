// gen-handlers
//
// Reads an event binding table as JSON and prints the listeners block of a
// render function.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use template_compiler::{CodegenOptions, EventBindingTable, HandlerGenerator};

/// Parsed command line of `gen-handlers`
#[derive(Debug, Clone, Default)]
pub struct GenHandlersArgs {
    /// Binding table file; stdin when absent
    pub input: Option<PathBuf>,
    /// Codegen options file
    pub config: Option<PathBuf>,
    /// Output file; stdout when absent
    pub output: Option<PathBuf>,
    /// Emit `nativeOn` instead of `on`
    pub native: bool,
}

pub fn load_options(config: Option<&PathBuf>) -> Result<CodegenOptions> {
    match config {
        Some(path) => CodegenOptions::load(path)
            .with_context(|| format!("invalid codegen options in {}", path.display())),
        None => Ok(CodegenOptions::default()),
    }
}

/// Generate the listeners block for a JSON binding table
pub fn render_table(table_json: &str, native: bool, options: &CodegenOptions) -> Result<String> {
    let table =
        EventBindingTable::from_json_str(table_json).context("invalid event binding table")?;
    tracing::debug!(events = table.len(), native, "generating handlers");
    Ok(HandlerGenerator::new(options.clone()).gen_handlers(&table, native))
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            Ok(content)
        }
    }
}

fn write_output(output: Option<&PathBuf>, code: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, format!("{}\n", code))
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", code).context("failed to write stdout")
        }
    }
}

pub fn perform_gen_handlers(args: &GenHandlersArgs) -> Result<()> {
    let options = load_options(args.config.as_ref())?;
    let content = read_input(args.input.as_ref())?;
    let code = render_table(&content, args.native, &options)?;
    write_output(args.output.as_ref(), &code)
}
