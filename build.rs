use std::fs;

fn main() {
    // Validate default config at compile time
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    for (section, value) in &table {
        let Some(entries) = value.as_table() else {
            panic!("[{}] in default_config.toml must be a table", section);
        };
        match section.as_str() {
            "render" => check_render(entries),
            "languages" => check_languages(entries),
            _ => panic!("Unknown section [{}] in default_config.toml", section),
        }
    }
}

fn check_render(render: &toml::Table) {
    for (key, value) in render {
        match key.as_str() {
            "allow_links" if value.is_bool() => {}
            "allow_links" => panic!("render.allow_links must be a boolean"),
            _ => panic!("Unknown key render.{}", key),
        }
    }
}

fn check_languages(languages: &toml::Table) {
    for (key, value) in languages {
        if key != "extra" {
            panic!("Unknown key languages.{}", key);
        }
        let Some(extra) = value.as_table() else {
            panic!("languages.extra must be a table of id = \"Display Name\"");
        };
        for (id, name) in extra {
            if !name.is_str() {
                panic!("languages.extra.{} must be a string", id);
            }
            if *id != id.to_lowercase() {
                panic!("languages.extra.{} must be lower-case", id);
            }
        }
    }
}
