use anyhow::Result;

fn main() -> Result<()> {
    fileorder_cli::main_entry()
}
