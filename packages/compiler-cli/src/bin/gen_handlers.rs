/**
 * Template Compiler CLI - gen-handlers
 *
 * Generate render-function event listeners from a binding table
 */
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use std::process;
use template_compiler_cli::gen_handlers::{perform_gen_handlers, GenHandlersArgs};

fn main() {
    template_compiler_cli::logging::init();

    let matches = Command::new("gen-handlers")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate event handler code from an event binding table")
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("JSON event binding table (reads stdin when omitted)"),
        )
        .arg(
            Arg::new("native")
                .long("native")
                .action(ArgAction::SetTrue)
                .help("Bind listeners to the native element (nativeOn)"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Path to a JSON codegen options file"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .help("Write the generated code to PATH instead of stdout"),
        )
        .get_matches();

    let args = GenHandlersArgs {
        input: matches.get_one::<String>("input").map(PathBuf::from),
        config: matches.get_one::<String>("config").map(PathBuf::from),
        output: matches.get_one::<String>("output").map(PathBuf::from),
        native: matches.get_flag("native"),
    };

    if let Err(err) = perform_gen_handlers(&args) {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}
