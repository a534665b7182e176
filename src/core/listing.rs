//! `dork engines`: registry listing grouped by category.

use anyhow::{Context, Result};
use ptree::TreeBuilder;
use ptree::item::StringItem;

use crate::cli::{AppContext, EnginesArgs};
use crate::core::engines::{self, Category};
use crate::infra::utils::Paint;

pub fn run(args: EnginesArgs, ctx: &AppContext) -> Result<()> {
    let filter = match args.category.as_deref() {
        Some(name) => Some(Category::from_name(name).with_context(|| {
            let known: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
            format!("Unknown category '{name}'. Known: {}", known.join(", "))
        })?),
        None => None,
    };

    if ctx.quiet {
        return Ok(());
    }

    let tree = build_tree(filter, &Paint::new(!ctx.no_color));
    ptree::print_tree(&tree).context("Failed to print engine tree")?;
    Ok(())
}

/// Root → categories → engine ids. With a filter, leaves also show base URLs.
pub fn build_tree(filter: Option<Category>, paint: &Paint) -> StringItem {
    let title = format!(
        "DorkScript v{} - {} Search Engines",
        env!("CARGO_PKG_VERSION"),
        engines::count()
    );
    let mut builder = TreeBuilder::new(paint.bold(&title));

    for (category, list) in engines::by_category() {
        if filter.is_some_and(|f| f != category) {
            continue;
        }

        builder.begin_child(paint.cyan(category.label()));
        for eng in list {
            let label = if filter.is_some() {
                format!("{}  {}", eng.id, paint.dim(eng.base_url))
            } else {
                eng.id.to_string()
            };
            builder.add_empty_child(label);
        }
        builder.end_child();
    }

    builder.build()
}
