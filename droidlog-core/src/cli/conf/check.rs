use crate::conf::{DEFAULT_CONFIG_FILE, resolve_config};
use std::path::Path;

pub fn check(path: Option<&Path>) -> anyhow::Result<()> {
    let cfg = resolve_config(path)?;
    let source = match path {
        Some(p) => p.display().to_string(),
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => DEFAULT_CONFIG_FILE.to_string(),
        None => "built-in defaults".to_string(),
    };

    println!("✔ Config loaded successfully ({source})");
    println!("✔ input: {}", cfg.input.display());
    println!("✔ report file: {}", cfg.report_file.display());
    println!("✔ filter prefix: {}", cfg.output_prefix);
    println!(
        "✔ adb: {} ({})",
        cfg.adb.program,
        cfg.adb.serial.as_deref().unwrap_or("any device")
    );
    println!(
        "✔ capture {}s, monitor {}s",
        cfg.capture.duration_secs, cfg.monitor.duration_secs
    );

    Ok(())
}
