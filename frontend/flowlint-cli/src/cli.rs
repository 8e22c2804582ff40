use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "flowlint", about = "Static linter for chatbot flow definitions")]
pub struct Cli {
    /// Path to the flow definition to lint.
    #[arg(long, default_value = "AlexChatBot.json")]
    pub flow: String,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
