//! List command implementation

use crate::error::CliResult;
use texttools_engine::list_builtin_languages;

/// Print the embedded languages, one per line
pub fn languages() -> CliResult<()> {
    println!("Available languages:");
    for (code, name) in list_builtin_languages() {
        println!("  {code:<8} {name}");
    }
    println!();
    println!("Other languages can be loaded with --language-config <FILE>.");
    Ok(())
}
