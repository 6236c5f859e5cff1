//! Plain-text rendering of the retained views, for the `fairway` binary.

use std::io::{self, Write};

use crate::spec_panel::SpecPanel;
use crate::view::memory::CatalogContent;
use crate::view::{DetailField, DetailPanel, MemoryCatalogView, MemoryDetailView};

pub fn print_catalog<W: Write>(view: &MemoryCatalogView, out: &mut W) -> io::Result<()> {
    if !view.categories().is_empty() || !view.brands().is_empty() {
        let categories: Vec<&str> = view.categories().iter().map(|c| c.label()).collect();
        writeln!(out, "Categorías: {}", categories.join(", "))?;
        writeln!(out, "Marcas: {}", view.brands().join(", "))?;
        writeln!(out)?;
    }

    match view.content() {
        CatalogContent::Blank => {}
        CatalogContent::Loading(message) | CatalogContent::Empty(message) => {
            writeln!(out, "{message}")?;
        }
        CatalogContent::Cards(cards) => {
            for card in cards {
                let reference = card
                    .reference
                    .as_ref()
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "-".to_string());
                writeln!(out, "[{reference}] {}  {}", card.name, card.price)?;
                writeln!(out, "    imagen: {}", card.image)?;
                if !card.size_badges.is_empty() {
                    let sizes: Vec<&str> = card.size_badges.iter().map(|s| s.as_str()).collect();
                    writeln!(out, "    tallas: {}", sizes.join(" "))?;
                }
                if let Some(href) = &card.href {
                    writeln!(out, "    -> {href}")?;
                }
            }
        }
    }
    Ok(())
}

pub fn print_detail<W: Write>(view: &MemoryDetailView, out: &mut W) -> io::Result<()> {
    if view.is_visible(DetailPanel::Loading) {
        writeln!(out, "Cargando producto...")?;
        return Ok(());
    }

    if view.is_visible(DetailPanel::Error) {
        writeln!(out, "{}", view.text(DetailField::Error).unwrap_or("-"))?;
        return Ok(());
    }

    if !view.is_visible(DetailPanel::Main) {
        return Ok(());
    }

    let field = |f| view.text(f).unwrap_or("-");
    writeln!(out, "{} ({})", field(DetailField::Name), field(DetailField::Reference))?;
    writeln!(out, "Marca: {}", field(DetailField::Brand))?;
    writeln!(out, "Modelo: {}", field(DetailField::Model))?;
    writeln!(out, "Categoría: {}", field(DetailField::Category))?;
    writeln!(out, "Precio: {}", field(DetailField::Price))?;
    writeln!(out, "Imagen: {}", view.main_image().unwrap_or("-"))?;
    for thumbnail in view.thumbnails() {
        writeln!(out, "    miniatura {:?}: {}", thumbnail.angle, thumbnail.src)?;
    }

    match view.spec_panel() {
        Some(SpecPanel::Clubs(rows)) => {
            for row in rows {
                writeln!(out, "{}: {}", row.label, row.value)?;
            }
        }
        Some(SpecPanel::Gloves { tags, hint }) => {
            let rendered: Vec<String> = tags
                .iter()
                .map(|tag| match (tag.available, tag.selected) {
                    (_, true) => format!("[{}]", tag.size),
                    (true, false) => tag.size.to_string(),
                    (false, false) => format!("({})", tag.size),
                })
                .collect();
            writeln!(out, "Tallas: {}", rendered.join(" "))?;
            let marker = if hint.is_error { "! " } else { "" };
            writeln!(out, "{marker}{}", hint.text)?;
        }
        Some(SpecPanel::Balls { units_per_package }) => {
            writeln!(out, "Unidades por paquete: {units_per_package}")?;
        }
        None => {}
    }

    if view.is_visible(DetailPanel::Description) {
        writeln!(out)?;
        writeln!(out, "{}", field(DetailField::Description))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::catalog::{CatalogPage, PageSettings};
    use crate::collaborators::LocationNavigator;
    use crate::source::InMemoryCatalog;
    use crate::spec_panel::GloveSizePicker;
    use crate::view::{CatalogView, DetailView, ImageAngle, ProductCard, Thumbnail};
    use fairway_products::{GloveSize, GloveStock, Product};
    use serde_json::json;

    fn printed(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_cards_with_badges_and_links() {
        let mut view = MemoryCatalogView::new();
        view.show_cards(&[ProductCard {
            reference: Some("AFG-G001".parse().unwrap()),
            name: "Guante".to_string(),
            price: "$ 89.900".to_string(),
            image: "img/g.jpg".to_string(),
            size_badges: vec![GloveSize::M, GloveSize::L],
            href: Some("producto.html?ref=AFG-G001".to_string()),
        }]);

        let text = printed(|out| print_catalog(&view, out));
        assert!(text.contains("[AFG-G001] Guante  $ 89.900"));
        assert!(text.contains("tallas: M L"));
        assert!(text.contains("-> producto.html?ref=AFG-G001"));
    }

    #[test]
    fn prints_empty_state() {
        let mut view = MemoryCatalogView::new();
        view.show_empty("No hay productos disponibles");
        assert_eq!(
            printed(|out| print_catalog(&view, out)),
            "No hay productos disponibles\n"
        );
    }

    #[test]
    fn prints_glove_detail_with_size_tags() {
        let mut picker = GloveSizePicker::new(GloveStock {
            s: 0,
            m: 3,
            l: 1,
            xl: 0,
            xxl: 0,
        });
        picker.select(GloveSize::M);

        let mut view = MemoryDetailView::new();
        view.set_text(DetailField::Name, "Guante Weathersof");
        view.set_text(DetailField::Reference, "AFG-G001");
        view.set_text(DetailField::Price, "$ 89.900");
        view.set_main_image("img/g001.jpg");
        view.set_thumbnails(&[Thumbnail {
            angle: ImageAngle::Side,
            src: "img/g001-side.jpg".to_string(),
        }]);
        view.show_spec_panel(&picker.panel());
        view.set_visible(DetailPanel::Specs, true);
        view.set_visible(DetailPanel::Main, true);

        let text = printed(|out| print_detail(&view, out));
        assert!(text.starts_with("Guante Weathersof (AFG-G001)\n"));
        assert!(text.contains("Marca: -"));
        assert!(text.contains("Precio: $ 89.900"));
        assert!(text.contains("miniatura Side: img/g001-side.jpg"));
        assert!(text.contains("Tallas: (S) [M] L (XL) (XXL)"));
        assert!(text.contains("Talla M seleccionada"));
    }

    #[tokio::test]
    async fn prints_a_loaded_catalog_page() {
        let products: Vec<Product> = serde_json::from_value(json!([
            {
                "referencia": "AFG-G001", "nombre": "Guante Weathersof", "categoria": "gloves",
                "precio": 89900, "stock_m": 3, "stock_xl": 2
            }
        ]))
        .unwrap();
        let page = CatalogPage::new(
            Arc::new(InMemoryCatalog::new(products)),
            Arc::new(LocationNavigator::new("index.html")),
            PageSettings {
                detail_page: "producto.html".to_string(),
                placeholder_image: "img/placeholder.png".to_string(),
            },
            MemoryCatalogView::new(),
        );
        page.load().await;

        let mut out = Vec::new();
        print_catalog(&*page.view().await, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Categorías: Palos, Guantes, Bolas"));
        assert!(text.contains("[AFG-G001] Guante Weathersof  $ 89.900"));
        assert!(text.contains("imagen: img/placeholder.png"));
        assert!(text.contains("tallas: M XL"));
    }

    #[test]
    fn error_state_prints_only_the_message() {
        let mut view = MemoryDetailView::new();
        view.set_text(DetailField::Name, "stale");
        view.set_visible(DetailPanel::Main, false);
        view.set_visible(DetailPanel::Error, true);
        view.set_text(DetailField::Error, "Producto no encontrado");

        assert_eq!(
            printed(|out| print_detail(&view, out)),
            "Producto no encontrado\n"
        );
    }
}
