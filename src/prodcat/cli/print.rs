use colored::Colorize;
use prodcat::api::{CmdMessage, MessageLevel};
use prodcat::config::CatalogConfig;
use prodcat::model::Product;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 5;
const CODE_WIDTH: usize = 12;
const PRICE_WIDTH: usize = 12;
const STOCK_WIDTH: usize = 8;
const RULE: &str = "--------------------------------";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_section(title: &str) {
    println!();
    println!("{}", title.bold());
    println!("{}", RULE.dimmed());
}

pub(super) fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("No products found.");
        return;
    }

    let title_width = title_column_width();
    let header = format!(
        "{:>id$} {} {} {:>price$} {:>stock$}",
        "ID",
        pad_to_width("CODE", CODE_WIDTH),
        pad_to_width("TITLE", title_width),
        "PRICE",
        "STOCK",
        id = ID_WIDTH,
        price = PRICE_WIDTH,
        stock = STOCK_WIDTH,
    );
    println!("{}", header.dimmed());

    for product in products {
        let id = format!("{:>width$}", product.id, width = ID_WIDTH);
        let code = pad_to_width(&truncate_to_width(&product.code, CODE_WIDTH), CODE_WIDTH);
        let title = pad_to_width(&truncate_to_width(&product.title, title_width), title_width);
        let price = format!("{:>width$}", format_price(product.price), width = PRICE_WIDTH);
        let stock = format!("{:>width$}", product.stock, width = STOCK_WIDTH);
        let stock = if product.stock <= 0 {
            stock.red()
        } else {
            stock.normal()
        };

        println!("{} {} {} {} {}", id.yellow(), code.cyan(), title, price, stock);
    }
}

pub(super) fn print_product(product: &Product) {
    println!(
        "{} {} {}",
        format!("#{}", product.id).yellow(),
        product.title.bold(),
        format!("[{}]", product.code).cyan()
    );
    println!("{}", RULE);
    println!("{}", product.description);
    println!();
    println!("{:<10} {}", "price", format_price(product.price));
    println!("{:<10} {}", "stock", product.stock);
    println!("{:<10} {}", "thumbnail", product.thumbnail);
}

pub(super) fn print_config(config: &CatalogConfig) {
    for key in CatalogConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn title_column_width() -> usize {
    // Four single-space separators between five columns.
    LINE_WIDTH.saturating_sub(ID_WIDTH + CODE_WIDTH + PRICE_WIDTH + STOCK_WIDTH + 4)
}

fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
