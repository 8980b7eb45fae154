//! # CLI Layer
//!
//! One possible UI client for prodcat. This is the only place that knows
//! about stdout, stderr, exit codes and argument parsing.
//!
//! ## Catalog location
//!
//! The catalog directory is, in order of precedence:
//! 1. `--dir <DIR>`
//! 2. the user data directory, with `--global`
//! 3. `$PRODCAT_HOME`
//! 4. `./.prodcat`
//!
//! The backing file is `<dir>/<file-name>` unless `--file` is given.
//!
//! ## Ids across runs
//!
//! Every invocation is a new process with a new id counter. With the
//! `resume-ids` setting (on by default) commands that add products first
//! move the counter past the highest id on disk.

use super::print::{
    print_config, print_messages, print_product, print_products, print_section,
};
use super::setup::{Cli, Commands, ProductFields};
use clap::Parser;
use directories::ProjectDirs;
use prodcat::api::{CatalogApi, CatalogPaths, CmdMessage, CmdResult, ConfigAction};
use prodcat::config::{CatalogConfig, CONFIG_FILENAME};
use prodcat::error::{CatalogError, Result};
use prodcat::model::{ProductDraft, ProductId, ProductPatch};
use prodcat::store::fs::FileStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "PRODCAT_HOME";

struct AppContext {
    api: CatalogApi<FileStore>,
    resume_ids: bool,
}

impl AppContext {
    /// Called before any command that assigns ids.
    fn prepare_ids(&mut self) -> Result<()> {
        if self.resume_ids {
            self.api.resume_ids()?;
        }
        Ok(())
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add(fields)) => handle_add(&mut ctx, fields),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Get { id }) => handle_get(&ctx, id),
        Some(Commands::Find { code }) => handle_find(&ctx, &code),
        Some(Commands::Update { id, fields }) => handle_update(&mut ctx, id, fields),
        Some(Commands::Remove { id }) => handle_remove(&mut ctx, id),
        Some(Commands::Seed) => handle_seed(&mut ctx),
        Some(Commands::Demo) => handle_demo(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&mut ctx),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("prodcat=debug,info")
    } else {
        EnvFilter::new("prodcat=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let root = catalog_dir(cli)?;
    // Only a missing config means defaults; an unreadable one is an error.
    let config = CatalogConfig::load(&root).map_err(|e| {
        CatalogError::Config(format!(
            "cannot read {}: {}",
            root.join(CONFIG_FILENAME).display(),
            e
        ))
    })?;

    let data_file = cli
        .file
        .clone()
        .unwrap_or_else(|| config.data_file(&root));
    let store = FileStore::new(data_file);
    let api = CatalogApi::new(store, CatalogPaths::new(root))
        .with_load_policy(config.load_policy());

    Ok(AppContext {
        api,
        resume_ids: config.resume_ids,
    })
}

fn catalog_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.dir {
        return Ok(dir.clone());
    }
    if cli.global {
        let proj_dirs = ProjectDirs::from("com", "prodcat", "prodcat").ok_or_else(|| {
            CatalogError::Config("Could not determine the user data directory".to_string())
        })?;
        return Ok(proj_dirs.data_dir().to_path_buf());
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(".prodcat"))
}

fn draft_from(fields: ProductFields) -> Result<ProductDraft> {
    let base = match &fields.json {
        Some(json) => serde_json::from_str::<ProductDraft>(json)?,
        None => ProductDraft::default(),
    };
    let flags = ProductDraft {
        title: fields.title,
        description: fields.description,
        price: fields.price,
        thumbnail: fields.thumbnail,
        code: fields.code,
        stock: fields.stock,
    };
    Ok(flags.or(base))
}

fn patch_from(fields: ProductFields) -> Result<ProductPatch> {
    let base = match &fields.json {
        Some(json) => serde_json::from_str::<ProductPatch>(json)?,
        None => ProductPatch::default(),
    };
    let flags = ProductPatch {
        title: fields.title,
        description: fields.description,
        price: fields.price,
        thumbnail: fields.thumbnail,
        code: fields.code,
        stock: fields.stock,
    };
    Ok(flags.or(base))
}

fn not_found(id: ProductId) -> CmdMessage {
    CmdMessage::info(format!("No product with id {}", id))
}

fn handle_add(ctx: &mut AppContext, fields: ProductFields) -> Result<()> {
    let draft = draft_from(fields)?;
    ctx.prepare_ids()?;
    let result = ctx.api.add_product(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_products()?;
    print_products(&result.listed_products);
    print_messages(&result.messages);
    Ok(())
}

fn handle_get(ctx: &AppContext, id: ProductId) -> Result<()> {
    let result = ctx.api.get_product(id)?;
    match result.listed_products.first() {
        Some(product) => print_product(product),
        None => print_messages(&[not_found(id)]),
    }
    Ok(())
}

fn handle_find(ctx: &AppContext, code: &str) -> Result<()> {
    let result = ctx.api.get_product_by_code(code)?;
    match result.listed_products.first() {
        Some(product) => print_product(product),
        None => print_messages(&[CmdMessage::info(format!("No product with code {}", code))]),
    }
    Ok(())
}

fn handle_update(ctx: &mut AppContext, id: ProductId, fields: ProductFields) -> Result<()> {
    let patch = patch_from(fields)?;
    if patch.is_empty() {
        return Err(CatalogError::Api(
            "Nothing to update: give at least one field".into(),
        ));
    }

    let result = ctx.api.update_product(id, &patch)?;
    print_outcome(&result, id);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, id: ProductId) -> Result<()> {
    let result = ctx.api.remove_product(id)?;
    print_outcome(&result, id);
    Ok(())
}

fn print_outcome(result: &CmdResult, id: ProductId) {
    if result.messages.is_empty() {
        print_messages(&[not_found(id)]);
    } else {
        print_messages(&result.messages);
    }
}

fn handle_seed(ctx: &mut AppContext) -> Result<()> {
    ctx.prepare_ids()?;
    let result = ctx.api.seed()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_demo(ctx: &mut AppContext) -> Result<()> {
    ctx.prepare_ids()?;

    print_section("Seeding sample products");
    let seeded = ctx.api.seed()?;
    print_messages(&seeded.messages);

    print_section("All products");
    print_products(&ctx.api.list_products()?.listed_products);

    print_section("Find by code BVCD15");
    let coffee = ctx.api.get_product_by_code("BVCD15")?.listed_products;
    let Some(coffee) = coffee.first() else {
        print_messages(&[CmdMessage::warning("Sample product BVCD15 is missing")]);
        return Ok(());
    };
    print_product(coffee);

    print_section(&format!("Product {}", coffee.id));
    if let Some(product) = ctx.api.get_product(coffee.id)?.listed_products.first() {
        print_product(product);
    }

    print_section(&format!("Set price of product {} to 1600", coffee.id));
    let patch = ProductPatch::default().with_price(1600.0);
    print_messages(&ctx.api.update_product(coffee.id, &patch)?.messages);
    if let Some(product) = ctx.api.get_product(coffee.id)?.listed_products.first() {
        print_product(product);
    }

    if let Some(milk) = ctx.api.get_product_by_code("ASDF12")?.listed_products.first() {
        print_section(&format!("Remove product {}", milk.id));
        print_messages(&ctx.api.remove_product(milk.id)?.messages);
    }

    print_section("Remaining products");
    print_products(&ctx.api.list_products()?.listed_products);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}
