//! # Product Commands
//!
//! Each mutation opens a form controller, feeds it the flag values the way a
//! user would type them, and submits. When the controller reports success
//! through its refresh hook, the full list is fetched again and printed.

use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Args;
use inventory_client::{FormResult, ProductFormController, RefreshHook};
use inventory_core::validation::validate_product_id;
use inventory_core::Product;
use tracing::{debug, info};

use super::Context;
use crate::error::{CliError, CliResult};
use crate::render;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Product name
    #[arg(long)]
    pub name: String,

    /// Units in stock (whole number)
    #[arg(long)]
    pub quantity: String,

    /// Unit price, at most two decimals
    #[arg(long)]
    pub price: String,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// ID of the product to edit
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New quantity
    #[arg(long)]
    pub quantity: Option<String>,

    /// New price
    #[arg(long)]
    pub price: Option<String>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the product to delete
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short)]
    pub yes: bool,
}

/// Remembers that the form asked for a list refresh.
#[derive(Debug, Default)]
struct RefreshFlag(AtomicBool);

impl RefreshHook for RefreshFlag {
    fn refresh(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

impl RefreshFlag {
    fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

// =============================================================================
// Handlers
// =============================================================================

pub async fn list(ctx: &Context, out: &mut impl Write) -> CliResult<()> {
    let products = ctx.api.list().await?;
    debug!(count = products.len(), "Products fetched");
    render::write_products(out, &products)?;
    Ok(())
}

pub async fn add(ctx: &Context, args: AddArgs, out: &mut impl Write) -> CliResult<()> {
    let refresh = Arc::new(RefreshFlag::default());
    let form = ProductFormController::for_add(Arc::clone(&ctx.api), &ctx.config)
        .with_refresh_hook(refresh.clone());

    form.open()?;
    form.set_name(args.name);
    apply_quantity(&form, &args.quantity)?;
    apply_price(&form, &args.price)?;

    let result = form.submit().await.map(|product| {
        info!(id = %product.id, "Product created");
    });

    complete(ctx, &form, &refresh, result, out).await
}

pub async fn edit(ctx: &Context, args: EditArgs, out: &mut impl Write) -> CliResult<()> {
    let product = find_product(ctx, &args.id).await?;

    let refresh = Arc::new(RefreshFlag::default());
    let form = ProductFormController::for_product(Arc::clone(&ctx.api), product, &ctx.config)
        .with_refresh_hook(refresh.clone());

    form.open()?;
    if let Some(name) = args.name {
        form.set_name(name);
    }
    if let Some(quantity) = &args.quantity {
        apply_quantity(&form, quantity)?;
    }
    if let Some(price) = &args.price {
        apply_price(&form, price)?;
    }

    let result = form.submit().await.map(|product| {
        info!(id = %product.id, "Product updated");
    });

    complete(ctx, &form, &refresh, result, out).await
}

pub async fn delete(
    ctx: &Context,
    args: DeleteArgs,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> CliResult<()> {
    let product = find_product(ctx, &args.id).await?;
    let prompt = format!("Delete {} ({})? [y/N] ", product.name, product.id);

    let refresh = Arc::new(RefreshFlag::default());
    let form = ProductFormController::for_product(Arc::clone(&ctx.api), product, &ctx.config)
        .with_refresh_hook(refresh.clone());

    form.request_delete()?;

    if !args.yes && !confirm(&prompt, input, out)? {
        form.cancel_delete();
        writeln!(out, "Delete cancelled")?;
        return Ok(());
    }

    let result = form.confirm_delete().await;
    complete(ctx, &form, &refresh, result, out).await
}

// =============================================================================
// Helpers
// =============================================================================

async fn find_product(ctx: &Context, id: &str) -> CliResult<Product> {
    validate_product_id(id)?;

    ctx.api
        .list()
        .await?
        .into_iter()
        .find(|product| product.id == id)
        .ok_or_else(|| CliError::NotFound(id.to_string()))
}

fn apply_quantity(form: &ProductFormController, text: &str) -> CliResult<()> {
    if form.set_quantity(text) {
        return Ok(());
    }
    Err(CliError::InvalidInput {
        field: "quantity",
        value: text.to_string(),
    })
}

fn apply_price(form: &ProductFormController, text: &str) -> CliResult<()> {
    if form.set_price(text) {
        return Ok(());
    }
    Err(CliError::InvalidInput {
        field: "price",
        value: text.to_string(),
    })
}

/// Prints the form's notification, then the refreshed list on success.
async fn complete(
    ctx: &Context,
    form: &ProductFormController,
    refresh: &RefreshFlag,
    result: FormResult<()>,
    out: &mut impl Write,
) -> CliResult<()> {
    if let Some(notification) = form.notification() {
        writeln!(out, "{}", notification.text)?;
    }

    result?;

    if refresh.take() {
        list(ctx, out).await?;
    }
    Ok(())
}

/// Asks a yes/no question; anything but `y` or `yes` is a no.
fn confirm(prompt: &str, input: &mut impl BufRead, out: &mut impl Write) -> CliResult<bool> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
