use anyhow::Result;
use vergen::EmitBuilder;

// Embeds VERGEN_GIT_SHA for the CLI's --version string
fn main() -> Result<()> {
    EmitBuilder::builder().git_sha(true).emit()?;
    Ok(())
}
