use clap::{Parser, Subcommand};

/// Returns the version string, including git hash and commit date for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "ditdah", bin_name = "ditdah", version = get_version())]
#[command(about = "Translate between plain text and Morse code", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate to and from morse code
    ///
    /// `--target m` takes text and translates it into morse code;
    /// `--target p` takes morse and translates it into plain text.
    /// Add `--american` to use American Morse instead of international.
    #[command(alias = "t")]
    Translate {
        /// Translation target: morse (m) or plain (p)
        #[arg(short, long, default_value = "morse")]
        target: String,

        /// Use American Morse code instead of international
        #[arg(short, long)]
        american: bool,

        /// The text (or morse string) to translate; quote it as one argument
        #[arg(required = true, num_args = 1..)]
        input: Vec<String>,
    },
}
