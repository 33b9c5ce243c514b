#[cfg(test)]
#[path = "culture_test.rs"]
mod tests;

use std::collections::BTreeSet;

use anyhow::Result;
use owo_colors::OwoColorize;
use owo_colors::Stream;

use super::dimmed;
use super::fetch_error;
use super::heading;
use crate::domain::models::Product;
use crate::domain::services::Preferences;
use crate::domain::services::Translator;
use crate::infrastructure::api::http::HttpApi;

fn favorite_marker(translator: &Translator) -> String {
    let text = format!("♥ {}", translator.t("culture.favorite", None));
    return format!(
        "{}",
        text.if_supports_color(Stream::Stdout, |t| return t.magenta())
    );
}

pub fn render(
    translator: &Translator,
    res: &Result<Vec<Product>>,
    favorites: &BTreeSet<u64>,
) -> String {
    let mut lines = vec![
        heading(&translator.t("culture.title", None)),
        translator.t("culture.description", None),
        "".to_string(),
    ];

    let products = match res {
        Ok(products) => products,
        Err(err) => {
            lines.push(fetch_error(translator, err));
            return lines.join("\n");
        }
    };

    for product in products {
        let mut title = format!("[{}] {}  {}", product.id, product.name, product.price_label());
        if favorites.contains(&product.id) {
            title = format!("{title}  {}", favorite_marker(translator));
        }

        lines.push(heading(&title));
        lines.push(format!(
            "    {} {}",
            translator.t("culture.by", None),
            product.artisan
        ));
        lines.push(format!("    {}", dimmed(&product.description)));
    }

    return lines.join("\n");
}

/// Toggles a favourite when asked to, then lists the marketplace.
pub async fn run(
    translator: &Translator,
    preferences: &Preferences,
    favorite: Option<u64>,
) -> Result<()> {
    if let Some(product_id) = favorite {
        let key = if preferences.toggle_favorite(product_id)? {
            "culture.favoriteAdded"
        } else {
            "culture.favoriteRemoved"
        };
        println!("{}: {product_id}\n", translator.t(key, None));
    }

    let products = HttpApi::default().products().await;
    let favorites = preferences.favorites()?;
    println!("{}", render(translator, &products, &favorites));

    return Ok(());
}
