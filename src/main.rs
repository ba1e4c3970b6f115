fn main() -> anyhow::Result<()> {
    ao_cli::run()
}
