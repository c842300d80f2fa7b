use crate::config::Paths;
use crate::converter::{GenerateSource, I18nConverter};
use crate::core::{validate_file, ValidationReport};
use crate::error::{I18nError, I18nResult};
use crate::types::I18nMap;
use colored::Colorize;
use std::path::PathBuf;

/// Print the first keys of a map (verbose mode)
fn print_preview(map: &I18nMap, limit: usize) {
    for (key, content) in map.iter().take(limit) {
        println!("   {} = {}", key.bright_blue(), content);
    }
    if map.len() > limit {
        println!("   ... {} more", map.len() - limit);
    }
}

/// Execute the parse command
pub fn parse(input: PathBuf, output: Option<PathBuf>, verbose: bool) -> I18nResult<()> {
    println!("{}", "🔥 i18n-forge - Parse Excel".bold().green());
    println!("   Input:  {}", input.display());
    if let Some(ref output) = output {
        println!("   Output: {}", output.display());
    }
    println!();

    if verbose {
        println!("{}", "📖 Reading Excel file...".cyan());
    }

    let converter = I18nConverter::xlsx();
    let map = match converter.parse(&input, output.as_deref()) {
        Ok(map) => map,
        Err(e) => {
            println!("{}", format!("❌ Parse failed: {e}").bold().red());
            return Err(e);
        }
    };

    if verbose {
        print_preview(&map, 10);
        println!();
    }

    println!(
        "{}",
        format!("✅ Parsed {} i18n entries", map.len()).bold().green()
    );
    if let Some(output) = output {
        println!("   JSON file: {}\n", output.display());
    }

    Ok(())
}

/// Execute the generate command
pub fn generate(input: PathBuf, output: PathBuf, verbose: bool) -> I18nResult<()> {
    println!("{}", "🔥 i18n-forge - Generate Excel".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    if verbose {
        println!("{}", "📊 Writing Excel file...".cyan());
    }

    let converter = I18nConverter::xlsx();
    if let Err(e) = converter.generate(GenerateSource::File(input), &output) {
        println!("{}", format!("❌ Generate failed: {e}").bold().red());
        return Err(e);
    }

    println!("{}", "✅ Excel file generated".bold().green());
    println!("   Excel file: {}\n", output.display());

    Ok(())
}

/// Execute the validate command
pub fn validate(file: PathBuf) -> I18nResult<()> {
    println!("{}", "✅ Validating i18n keys".bold().green());
    println!("   File: {}\n", file.display());

    match validate_file(&file)? {
        ValidationReport::Skipped => {
            println!(
                "{}",
                "⚠️  i18n file not found, validation skipped".yellow()
            );
            Ok(())
        }
        ValidationReport::Valid { keys } => {
            println!(
                "{}",
                format!("✅ All {keys} keys are unique!").bold().green()
            );
            Ok(())
        }
        ValidationReport::Duplicates { keys } => {
            println!(
                "{}",
                format!("❌ Found {} duplicate keys!", keys.len())
                    .bold()
                    .red()
            );
            for key in &keys {
                println!("   {}", key.bright_blue().bold());
            }
            println!();
            Err(I18nError::DuplicateKeys(keys))
        }
    }
}

/// Default action without a subcommand: parse the conventional sheet
pub fn run_default(paths: &Paths) -> I18nResult<()> {
    println!("{}", "🔥 i18n-forge".bold().green());

    let converter = I18nConverter::xlsx();
    let map = converter.parse(&paths.excel_input, Some(&paths.json_output))?;

    println!(
        "\n{}",
        format!("✅ Parsed {} i18n entries", map.len()).bold().green()
    );
    println!("\nMore commands:");
    println!("   i18n-forge parse     Parse an Excel sheet into JSON");
    println!("   i18n-forge generate  Generate an Excel sheet from JSON");
    println!("   i18n-forge validate  Check JSON keys are unique\n");

    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
