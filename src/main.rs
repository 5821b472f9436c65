//! Inn - A small terminal text editor
//! Main entry point

use std::path::Path;

use anyhow::{Context, Result};
use inn::editor::Editor;
use inn::term::unix::UnixTerminal;

fn main() -> Result<()> {
    let path = std::env::args().nth(1);

    let mut editor =
        Editor::new(UnixTerminal::new()).context("failed to initialize editor")?;

    if let Some(ref p) = path {
        editor
            .open(Path::new(p))
            .with_context(|| format!("failed to open {}", p))?;
    }

    editor.run().context("editor session failed")?;
    Ok(())
}
