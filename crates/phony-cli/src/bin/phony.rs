use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use phony::trace_init::{init_tracing, TraceOutput};
use phony_cli::commands::config_ops;
use phony_cli::commands::translate_ops::{
    build_engine, read_message, translate_cmd, Direction, TranslateRequest,
};
use phony_core::TranslateOptions;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(
    name = "phony",
    version = phony_core::VERSION,
    about = "Translate text to and from phonetic alphabets"
)]
struct Cli {
    /// Write JSON trace events to DIR/phony-trace.jsonl instead of stderr
    #[arg(long, global = true, value_name = "DIR")]
    trace_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Spell a message out in the phonetic alphabet
    To(TranslateArgs),
    /// Read a phonetic message back into text
    From(TranslateArgs),
    /// Inspect or validate alphabet tables
    Alphabets {
        #[command(subcommand)]
        command: AlphabetsCommand,
    },
    /// Inspect or validate settings files
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

#[derive(Args)]
struct TranslateArgs {
    /// Message to translate (read from stdin when omitted)
    message: Option<String>,
    /// Alphabet name (default from settings, normally "itu")
    #[arg(short, long)]
    alphabet: Option<String>,
    /// Separator between letters (a regex fragment when reading)
    #[arg(short, long)]
    letter_splitter: Option<String>,
    /// Separator between words (a regex fragment when reading)
    #[arg(short, long)]
    word_splitter: Option<String>,
    /// Extra alphabet TOML merged over the builtins
    #[arg(long)]
    alphabets: Option<PathBuf>,
    /// Settings TOML with default options and extra alphabets
    #[arg(long)]
    settings: Option<PathBuf>,
}

#[derive(Subcommand)]
enum AlphabetsCommand {
    /// List available alphabets and their fallback chains
    List {
        /// Extra alphabet TOML merged over the builtins
        #[arg(long)]
        alphabets: Option<PathBuf>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the builtin alphabet TOML
    Export,
    /// Check an alphabet TOML file
    Validate {
        /// Alphabet TOML file
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Print the default settings TOML
    Export,
    /// Check a settings TOML file
    Validate {
        /// Settings TOML file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    match cli.trace_dir.as_deref() {
        Some(dir) => init_tracing(TraceOutput::JsonFile(dir)),
        None => init_tracing(TraceOutput::Stderr),
    }

    match cli.command {
        Command::To(args) => run_translate(Direction::To, args),
        Command::From(args) => run_translate(Direction::From, args),
        Command::Alphabets { command } => match command {
            AlphabetsCommand::List { alphabets, json } => {
                let request = TranslateRequest {
                    alphabets,
                    ..TranslateRequest::default()
                };
                let phony = die!(build_engine(&request), "Error: {}");
                let out = die!(config_ops::alphabets_list(phony.alphabets(), json), "Error: {}");
                print!("{out}");
                if json {
                    println!();
                }
            }
            AlphabetsCommand::Export => print!("{}", config_ops::alphabets_export()),
            AlphabetsCommand::Validate { file } => {
                println!("{}", die!(config_ops::alphabets_validate(&file), "Error: {}"));
            }
        },
        Command::Settings { command } => match command {
            SettingsCommand::Export => print!("{}", config_ops::settings_export()),
            SettingsCommand::Validate { file } => {
                println!("{}", die!(config_ops::settings_validate(&file), "Error: {}"));
            }
        },
    }
}

fn run_translate(direction: Direction, args: TranslateArgs) {
    let request = TranslateRequest {
        options: TranslateOptions {
            alphabet: args.alphabet,
            letter_splitter: args.letter_splitter,
            word_splitter: args.word_splitter,
        },
        alphabets: args.alphabets,
        settings: args.settings,
    };
    let phony = die!(build_engine(&request), "Error: {}");
    let message = die!(read_message(args.message, io::stdin().lock()), "Error: {}");
    let out = die!(
        translate_cmd(&phony, direction, &message, &request.options),
        "Error: {}"
    );
    println!("{out}");
}
