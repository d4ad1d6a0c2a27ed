//! `sitedog init`

use std::path::Path;

use crate::commands::CommandError;
use crate::config::scaffold::write_example;

/// Write the starter configuration, refusing to overwrite an existing file.
pub fn run(path: &Path) -> Result<(), CommandError> {
    write_example(path)?;
    println!("Created {} configuration file", path.display());
    Ok(())
}
