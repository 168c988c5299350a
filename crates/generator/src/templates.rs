//! Template loading and registration

use swagger_client_generator_common::{GeneratorError, Result};
use tera::Tera;

/// Load all templates
pub fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();

    add(&mut tera, "mod.rs", include_str!("../templates/mod.rs.tera"))?;
    add(
        &mut tera,
        "transport.rs",
        include_str!("../templates/transport.rs.tera"),
    )?;
    add(
        &mut tera,
        "client.rs",
        include_str!("../templates/client.rs.tera"),
    )?;
    add(
        &mut tera,
        "model_unit.rs",
        include_str!("../templates/model_unit.rs.tera"),
    )?;
    add(
        &mut tera,
        "models_mod.rs",
        include_str!("../templates/models_mod.rs.tera"),
    )?;
    add(
        &mut tera,
        "models_umbrella.rs",
        include_str!("../templates/models_umbrella.rs.tera"),
    )?;
    add(
        &mut tera,
        "README.md",
        include_str!("../templates/README.md.tera"),
    )?;

    Ok(tera)
}

fn add(tera: &mut Tera, name: &str, source: &str) -> Result<()> {
    tera.add_raw_template(name, source)
        .map_err(|e| GeneratorError::Generation(format!("Failed to load {} template: {}", name, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_load() {
        let tera = load_templates().unwrap();
        let names: Vec<&str> = tera.get_template_names().collect();
        assert!(names.contains(&"client.rs"));
        assert!(names.contains(&"transport.rs"));
    }
}
