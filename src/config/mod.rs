mod loader;

pub use loader::{
    find_default_template_file, load_template, template_from_toml_str, template_from_yaml_str,
    validate_template,
};
