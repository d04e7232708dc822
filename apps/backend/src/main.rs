#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ink_memory_backend::run().await
}
