// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

mod app;
mod cli;
mod logging;
mod logic;
mod models;
mod mvu;
mod ui;
mod utils;

use anyhow::Context;
use clap::Parser;
use url::Url;

use crate::cli::Args;
use crate::logic::link;
use crate::mvu::AppModel;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.log_level());

    if args.print {
        let url = print_link(args.number.as_deref().unwrap_or_default())?;
        println!("{url}");
        return Ok(());
    }

    let model = args
        .number
        .map(AppModel::with_phone_number)
        .unwrap_or_default();
    app::run(model)
}

/// Chat link for `--print`; an input without digits is an error (non-zero exit).
fn print_link(raw: &str) -> anyhow::Result<Url> {
    link::build_link(&link::normalize(raw))
        .with_context(|| format!("cannot build chat link from {raw:?}"))
}
