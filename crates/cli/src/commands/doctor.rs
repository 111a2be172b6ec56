//! `docchat doctor` — Diagnose configuration.

use docchat_config::AppConfig;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("DocChat Doctor");
    println!("==============\n");

    let mut issues = 0;

    let config_path = AppConfig::config_dir().join("config.toml");
    if !config_path.exists() {
        println!("  -  No config file, using defaults (run `docchat onboard` to create one)");
    }

    match AppConfig::load() {
        Ok(config) => {
            println!("  ok Config valid (model: {})", config.model);

            if config.has_api_key() {
                println!("  ok API key configured");
            } else if config.missing_required_api_key() {
                println!("  !! No API key configured");
                issues += 1;
            } else {
                println!("  -  No API key (fine for keyless OpenAI-compatible servers)");
            }

            if let Err(e) = docchat_providers::build_from_config(&config.provider) {
                println!("  !! Provider cannot be built: {e}");
                issues += 1;
            }
        }
        Err(e) => {
            println!("  !! Config invalid: {e}");
            issues += 1;
        }
    }

    println!();
    if issues == 0 {
        println!("  All checks passed!");
    } else {
        println!("  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
