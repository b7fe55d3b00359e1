/// Display a banner with version information
pub fn print_banner() {
    let version = env!("CARGO_PKG_VERSION");
    let name = env!("CARGO_PKG_NAME");

    let banner = format!(
        r#"
╭────────────────────────────────────────────────────────╮
│  {:<52}  │
│  Version: {:<43}  │
│  Industry benchmarks for subscription apps             │
╰────────────────────────────────────────────────────────╯
"#,
        capitalize(name),
        version,
    );

    println!("{}", banner);
}

/// Display startup information
pub fn print_startup_info(host: &str, port: u16, frontend: Option<&str>) {
    let frontend = frontend.unwrap_or("disabled (API only)");
    let info = format!(
        r#"
📋 Configuration Loaded
  🌐 Server Address: http://{}:{}
  🖥  Frontend: {}
  📦 Ready to accept connections
"#,
        host, port, frontend
    );

    println!("{}", info);
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
