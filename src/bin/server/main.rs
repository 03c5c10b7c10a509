#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Email relay HTTP server

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use mail_relay::{
    domain::communication::{
        messages::MailServiceImpl,
        templates::{AssetStore, Composer},
    },
    infrastructure::{
        email::smtp::{SMTPConfig, SMTPMailer, SenderConfig},
        http::{HttpServer, HttpServerConfig},
        templates::{DirectoryAssets, EmbeddedAssets, TemplateConfig},
    },
};
use tracing::info;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The SMTP relay configuration
    #[clap(flatten)]
    pub smtp: SMTPConfig,

    /// The sender identity
    #[clap(flatten)]
    pub sender: SenderConfig,

    /// The template configuration
    #[clap(flatten)]
    pub templates: TemplateConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    match args.templates.templates_dir.clone() {
        Some(dir) => {
            info!("loading templates from {}", dir.display());
            serve(args, DirectoryAssets::new(dir)).await
        }
        None => serve(args, EmbeddedAssets).await,
    }
}

#[mutants::skip]
async fn serve<A: AssetStore>(args: Args, assets: A) -> Result<()> {
    let composer = Composer::new(
        Arc::new(assets),
        &args.templates.layout,
        &args.templates.section,
        &args.templates.layout_props(),
    )
    .with_context(|| format!("failed to load layout \"{}\"", args.templates.layout))?;

    let sender = args.sender.sender().context("invalid MAIL_FROM address")?;

    let mail_service = MailServiceImpl::new(
        Arc::new(SMTPMailer::new(args.smtp)),
        Arc::new(composer),
        sender,
    );

    HttpServer::new(mail_service, &args.server)?.run().await
}
