use anyhow::Result;

fn main() -> Result<()> {
    synth_cli::main_entry()
}
