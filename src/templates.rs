use tera::Tera;

use crate::config::TEMPLATE_GLOB;
use crate::error::AppError;

/// Initialize the Tera template engine
pub fn init_templates() -> Result<Tera, AppError> {
    let tera = Tera::new(TEMPLATE_GLOB)?;
    Ok(tera)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_template_renders_version() {
        let tera = init_templates().expect("templates should load from templates/");

        let mut context = tera::Context::new();
        context.insert("config", &crate::config::UiConfig::default());
        context.insert("app_version", "9.9.9");

        let html = tera.render("home.html", &context).unwrap();
        assert!(html.contains("9.9.9"));
    }

    #[test]
    fn unknown_template_is_an_error() {
        let tera = init_templates().unwrap();
        let context = tera::Context::new();
        assert!(tera.render("nope.html", &context).is_err());
    }
}
