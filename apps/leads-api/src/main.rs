use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = leads_api::Args::parse();
	leads_api::run(args).await
}
