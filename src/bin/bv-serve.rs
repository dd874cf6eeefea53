//! bv-serve - HTTP byte source for one file
//!
//! Serves `GET /meta` and `GET /bytes?offset=O&length=L`.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use bv::cli::ServeArgs;
use bv::logging;
use bv::serve;
use bv::source::{ByteSource, FileSource};

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServeArgs::parse();
    logging::init_console()?;

    let source = FileSource::open(&args.file)?;
    let size = source.size()?;
    let path = args.file.display().to_string();
    info!(%path, size, "opened source");

    serve::run(args.addr(), Arc::new(source), path).await
}
