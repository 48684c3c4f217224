use anyhow::Result;

fn main() -> Result<()> {
    chat_analyzer::cli::commands::run()
}
