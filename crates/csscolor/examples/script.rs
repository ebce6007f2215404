use std::io::Result;

use csscolor::host::ScriptWriter;
use csscolor::Emitter;

fn main() -> Result<()> {
    // Write a sourceable script defining all named colors to stdout.
    let stdout = std::io::stdout().lock();
    let mut emitter = Emitter::new(ScriptWriter::new(stdout));
    emitter.define_named_colors()?;
    drop(emitter.into_host().into_inner()?);

    Ok(())
}
