use std::error::Error;

// Emits VERGEN_* variables used by `--version` long output.
fn main() -> Result<(), Box<dyn Error>> {
    vergen_gitcl::Emitter::default()
        .add_instructions(
            &vergen_gitcl::BuildBuilder::default()
                .build_date(true)
                .build()?,
        )?
        .add_instructions(
            &vergen_gitcl::CargoBuilder::default()
                .target_triple(true)
                .build()?,
        )?
        .add_instructions(&vergen_gitcl::GitclBuilder::default().sha(true).build()?)?
        .emit()?;
    Ok(())
}
