use clap::Parser;
use pagepatch::{Result, collection_drive_rewrites, patch_page};
use simple_fs::SPath;
use tracing_subscriber::EnvFilter;

/// Applies the collection drive update to a static HTML page, in place.
#[derive(Parser)]
#[command(version, about)]
struct Args {
	/// Path of the HTML page to rewrite
	page: String,
}

fn main() -> Result<()> {
	tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

	let args = Args::parse();
	let page = SPath::new(&args.page);

	let report = patch_page(&page, &collection_drive_rewrites())?;

	// -- Print Result
	for status in report.skipped() {
		println!("  - skipped: {} (anchor not found)", status.label());
	}
	println!("✅ {page} updated with collection drive integration");

	Ok(())
}
