//! The interactive store session.

use std::io;

use anyhow::{Context as _, Result};
use tracing::{debug, info};

use crate::context::Context;
use crate::prompt::{self, LinePrompt, Prompt, TermPrompt};
use crate::session::Session;

/// Run the shop until the user quits at the login prompt.
pub fn run(ctx: &Context) -> Result<()> {
    ctx.config.validate().context("Invalid configuration")?;

    if prompt::is_interactive() {
        run_with(ctx, TermPrompt::new())
    } else {
        debug!("Input is not a terminal, reading plain lines");
        run_with(ctx, LinePrompt::new(io::stdin().lock(), io::stdout()))
    }
}

fn run_with<P: Prompt>(ctx: &Context, prompt: P) -> Result<()> {
    let auth = ctx.config.credential_store()?;
    let platform = ctx.config.build_platform()?;
    info!(
        store = %ctx.config.store.name,
        currency = platform.currency().code(),
        products = platform.catalog().len(),
        "Store opened"
    );

    let mut session = Session::new(platform, &auth, prompt, &ctx.output, &ctx.config.store);
    session.run()?;

    let orders = session.platform().view_order_history().len();
    info!(orders, "Store closed");
    Ok(())
}
