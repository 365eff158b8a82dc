//! Output formatting for the CLI.

use console::style;
use dressline_commerce::catalog::{Product, ProductTag};
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// One row per product: id, name, brand, price, tag.
    pub fn product_rows<'a>(&self, products: impl IntoIterator<Item = &'a Product>) {
        const WIDTHS: [usize; 5] = [4, 30, 22, 24, 11];
        self.table_row(&["ID", "NAME", "BRAND", "PRICE", "TAG"], &WIDTHS);
        for product in products {
            let id = format!("#{}", product.id);
            let price = format_price(product);
            let tag = product.tag.map(tag_badge).unwrap_or_default();
            self.table_row(&[&id, &product.name, &product.brand, &price, &tag], &WIDTHS);
        }
    }

    /// Bar tracking the carousel position.
    pub fn position_bar(&self, len: u64, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        if let Ok(bar_style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(bar_style.progress_chars("#>-"));
        }
        pb.set_message(msg.to_string());
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Colored label for a product tag.
pub fn tag_badge(tag: ProductTag) -> String {
    match tag {
        ProductTag::Sale => style(tag.as_str()).red().to_string(),
        ProductTag::New => style(tag.as_str()).green().to_string(),
        ProductTag::BestSeller => style(tag.as_str()).yellow().to_string(),
    }
}

/// Selling price, with the original price and discount when on sale.
pub fn format_price(product: &Product) -> String {
    match product.original_price {
        Some(original) if product.is_on_sale() => format!(
            "{} (was {}, -{}%)",
            product.price.display(),
            original.display_amount(),
            product.discount_percent()
        ),
        _ => product.price.display(),
    }
}

/// Five-character star bar for a rating.
pub fn stars(filled: &[bool]) -> String {
    filled.iter().map(|&on| if on { '★' } else { '☆' }).collect()
}
