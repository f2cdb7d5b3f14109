use clap::{ArgGroup, Parser, ValueEnum};
use cryptflow::{Mode, OutputSink, Pipeline, Request};
use std::path::PathBuf;

/// Literal output value selecting standard output instead of a file.
const PRINT_SINK: &str = "print";

// --- Define Command-Line Interface ---
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Encrypts or decrypts a string or a file with a DES-family key.",
    group(ArgGroup::new("source").required(true).args(["string", "file"]))
)]
struct Cli {
    /// The key to use when encrypting or decrypting; must be 8, 16 or 24
    /// bytes long
    key: String,

    /// The string that needs to be encrypted or decrypted
    #[arg(short, long)]
    string: Option<String>,

    /// The file whose contents need to be encrypted or decrypted
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// The output of the program: 'print' (default) or a file path
    #[arg(short, long, default_value = PRINT_SINK)]
    output: String,

    /// The mode to run in: 'en' encrypts (default), 'de' decrypts
    #[arg(short, long, value_enum, default_value_t = CliMode::En)]
    mode: CliMode,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CliMode {
    /// Encryption mode
    En,
    /// Decryption mode
    De,
}

impl Cli {
    fn into_request(self) -> Request {
        let mode = match self.mode {
            CliMode::En => Mode::Encrypt,
            CliMode::De => Mode::Decrypt,
        };
        let sink = if self.output == PRINT_SINK {
            OutputSink::Print
        } else {
            OutputSink::File(PathBuf::from(self.output))
        };
        let key = self.key.into_bytes();

        match (self.string, self.file) {
            (Some(string), None) => Request::inline(mode, key, string.into_bytes(), sink),
            (None, Some(path)) => Request::from_file(mode, key, path, sink),
            // The clap group requires exactly one source argument.
            _ => unreachable!("clap enforces exactly one of --string/--file"),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let mut request = cli.into_request();

    let pipeline = Pipeline::with_des();
    if let Err(err) = pipeline.run(&mut request) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
