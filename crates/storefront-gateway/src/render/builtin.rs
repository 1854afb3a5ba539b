use std::fmt::Write;

use serde::Deserialize;
use storefront_core::Product;

use super::{PageRenderer, RenderError, INDEX_TEMPLATE, PRODUCT_TEMPLATE};

/// Escape text for HTML element content and double-quoted attributes.
fn escape_html(v: &str) -> String {
    let mut out = String::with_capacity(v.len());
    for c in v.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn image_src(p: &Product) -> String {
    format!("/static/images/{}", escape_html(&p.image))
}

#[derive(Deserialize)]
struct IndexContext {
    products: Vec<Product>,
}

#[derive(Deserialize)]
struct ProductContext {
    product: Product,
    is_available: bool,
}

/// Renderer for the storefront's own `index.html` / `product.html` pages.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinPages;

impl BuiltinPages {
    pub fn new() -> Self {
        Self
    }
}

impl PageRenderer for BuiltinPages {
    fn render(&self, template: &str, ctx: &serde_json::Value) -> Result<String, RenderError> {
        match template {
            INDEX_TEMPLATE => {
                let ctx = IndexContext::deserialize(ctx).map_err(|source| RenderError::Context {
                    template: INDEX_TEMPLATE,
                    source,
                })?;
                Ok(render_index(&ctx))
            }
            PRODUCT_TEMPLATE => {
                let ctx = ProductContext::deserialize(ctx).map_err(|source| RenderError::Context {
                    template: PRODUCT_TEMPLATE,
                    source,
                })?;
                Ok(render_product(&ctx))
            }
            other => Err(RenderError::UnknownTemplate(other.to_string())),
        }
    }
}

fn open_document(out: &mut String, title: &str) {
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<link rel=\"stylesheet\" href=\"/static/css/style.css\">\n\
         </head>\n<body>\n",
        escape_html(title)
    );
}

fn close_document(out: &mut String) {
    out.push_str("</body>\n</html>\n");
}

fn render_index(ctx: &IndexContext) -> String {
    let mut out = String::new();
    open_document(&mut out, "Storefront");
    out.push_str("<h1>Products</h1>\n<ul class=\"products\">\n");
    for p in &ctx.products {
        let name = escape_html(&p.name);
        let _ = writeln!(
            out,
            "<li class=\"product\"><a href=\"/product/{id}\"><img src=\"{img}\" alt=\"{name}\">\
             <h2>{name}</h2></a><p class=\"price\">${price:.2}</p></li>",
            id = p.id,
            img = image_src(p),
            name = name,
            price = p.price,
        );
    }
    out.push_str("</ul>\n");
    close_document(&mut out);
    out
}

fn render_product(ctx: &ProductContext) -> String {
    let p = &ctx.product;
    let name = escape_html(&p.name);

    let mut out = String::new();
    open_document(&mut out, &p.name);
    let _ = writeln!(out, "<a href=\"/\">Back to products</a>");
    let _ = writeln!(out, "<h1>{name}</h1>");
    let _ = writeln!(out, "<img src=\"{}\" alt=\"{name}\">", image_src(p));
    let _ = writeln!(out, "<p class=\"price\">${:.2}</p>", p.price);
    if ctx.is_available {
        out.push_str("<p class=\"stock in-stock\">In Stock</p>\n");
    } else {
        out.push_str("<p class=\"stock out-of-stock\">Out of Stock</p>\n");
    }
    let _ = writeln!(out, "<p class=\"description\">{}</p>", escape_html(&p.description));

    if !p.specs.is_empty() {
        out.push_str("<h2>Specifications</h2>\n<table class=\"specs\">\n");
        for (k, v) in &p.specs {
            let _ = writeln!(out, "<tr><th>{}</th><td>{}</td></tr>", escape_html(k), escape_html(v));
        }
        out.push_str("</table>\n");
    }
    close_document(&mut out);
    out
}
