//! `docchat extract` — Print a document's extracted text.

use std::path::Path;

pub fn run(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = docchat_extract::extract_file(file)
        .map_err(|e| format!("Failed to extract {}: {e}", file.display()))?;
    print!("{text}");
    if !text.ends_with('\n') {
        println!();
    }
    Ok(())
}
