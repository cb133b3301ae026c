//! Tera rendering of the embedded HTML templates.
//!
//! Templates are compiled once per process. Names end in `.html`, so Tera
//! autoescapes every interpolated value.

use std::sync::LazyLock;

use serde::Serialize;
use tera::{Context, Tera};

static TEMPLATES: LazyLock<Result<Tera, tera::Error>> = LazyLock::new(load);

fn load() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("index.html", include_str!("../templates/index.html")),
        ("result.html", include_str!("../templates/result.html")),
        ("privacy.html", include_str!("../templates/privacy.html")),
        ("terms.html", include_str!("../templates/terms.html")),
        ("error.html", include_str!("../templates/error.html")),
    ])?;
    Ok(tera)
}

/// The compiled template set, or the error that prevented compiling it.
pub fn templates() -> Result<&'static Tera, tera::Error> {
    TEMPLATES
        .as_ref()
        .map_err(|e| tera::Error::msg(format!("templates failed to load: {e}")))
}

/// Render `name` with `data` serialized as the template context.
pub fn render<T: Serialize>(name: &str, data: &T) -> Result<String, tera::Error> {
    let context = Context::from_serialize(data)?;
    templates()?.render(name, &context)
}
