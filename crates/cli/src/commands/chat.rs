//! `docchat chat` — Interactive or single-message chat about a document.

use std::io::Write;
use std::path::PathBuf;

use docchat_agent::{ChatAgent, ResponseGenerator};
use docchat_config::AppConfig;
use docchat_core::session::Session;
use tokio::io::{AsyncBufReadExt, BufReader};

/// One line typed at the interactive prompt.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Blank,
    Exit,
    NewChat,
    Prompt(&'a str),
}

impl<'a> Input<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            "" => Self::Blank,
            "/exit" => Self::Exit,
            "/new" => Self::NewChat,
            prompt => Self::Prompt(prompt),
        }
    }
}

pub async fn run(
    document: Option<PathBuf>,
    message: Option<String>,
    model: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    // Check for API key early — give a clear error
    if config.missing_required_api_key() {
        eprintln!();
        eprintln!("  ERROR: No API key configured!");
        eprintln!();
        eprintln!("  Set one of these environment variables:");
        eprintln!("    AZURE_OPENAI_API_KEY   (with AZURE_OPENAI_ENDPOINT)");
        eprintln!("    OPENAI_API_KEY         (for OpenAI-compatible endpoints)");
        eprintln!("    DOCCHAT_API_KEY        (generic)");
        eprintln!();
        eprintln!("  Or add it to your config file:");
        eprintln!("    {}", AppConfig::config_dir().join("config.toml").display());
        eprintln!();
        return Err("No API key found. See above for setup instructions.".into());
    }

    let provider = docchat_providers::build_from_config(&config.provider)?;
    let model = model.unwrap_or_else(|| config.model.clone());
    let agent = ChatAgent::new(ResponseGenerator::new(provider), model)
        .with_greeting(config.greeting.clone());

    let mut session = Session::new();
    if let Some(path) = &document {
        let text = docchat_extract::extract_file(path)
            .map_err(|e| format!("Failed to extract {}: {e}", path.display()))?;
        tracing::info!(path = %path.display(), chars = text.len(), "Document loaded");
        session.load_document(text);
    }

    if let Some(msg) = message {
        // Single message mode
        eprint!("  Thinking...");
        let response = agent.respond(&mut session, &msg).await;
        eprint!("\r              \r");
        println!("{}", response?);
        return Ok(());
    }

    // Interactive mode
    println!();
    println!("  {}", config.title);
    println!();
    println!("  Model:     {}", agent.model());
    match &document {
        Some(path) => println!("  Document:  {}", path.display()),
        None => println!("  Document:  (none)"),
    }
    println!();
    println!("  Type your question and press Enter.");
    println!("  Type '/new' to start over, '/exit' or Ctrl+C to quit.");
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print!("  You > ");
    std::io::stdout().flush()?;

    while let Some(line) = lines.next_line().await? {
        match Input::parse(&line) {
            Input::Blank => {}
            Input::Exit => break,
            Input::NewChat => {
                session.reset();
                println!("  Started a new chat. Document context cleared.");
                println!();
            }
            Input::Prompt(prompt) => {
                eprint!("  ...");
                match agent.respond(&mut session, prompt).await {
                    Ok(response) => {
                        eprint!("\r     \r");
                        println!();
                        for line in response.lines() {
                            println!("  Assistant > {line}");
                        }
                        println!();
                    }
                    Err(e) => {
                        eprint!("\r     \r");
                        eprintln!("  [Error] Error generating response: {e}");
                        println!();
                    }
                }
            }
        }

        print!("  You > ");
        std::io::stdout().flush()?;
    }

    println!();
    println!("  Goodbye!");
    println!();

    Ok(())
}
