fn main() -> anyhow::Result<()> {
    lariat::main()
}
