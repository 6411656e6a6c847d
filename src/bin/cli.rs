use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    journal_wiki::cli::run().await
}
