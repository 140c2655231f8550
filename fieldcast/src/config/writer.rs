//! Serialization of [`ConfigFile`] back to INI text.

use super::settings::ConfigFile;
use std::fmt::Write;

/// Renders the configuration as INI text, one section per settings struct.
pub fn to_config_string(config: &ConfigFile) -> String {
    let mut out = String::new();

    // write! to a String cannot fail.
    let _ = writeln!(out, "[scheduler]");
    let _ = writeln!(out, "pool_size = {}", config.scheduler.pool_size);
    let _ = writeln!(out, "timeout_seconds = {}", config.scheduler.timeout_seconds);
    let _ = writeln!(out);

    let _ = writeln!(out, "[cache]");
    let _ = writeln!(out, "directory = {}", config.cache.directory.display());
    let _ = writeln!(out);

    let _ = writeln!(out, "[source]");
    let _ = writeln!(
        out,
        "spool_directory = {}",
        config.source.spool_directory.display()
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "[stations]");
    let list = config
        .stations
        .entries
        .iter()
        .map(|e| format!("{}:{}", e.ident, e.cameras))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "list = {}", list);
    let _ = writeln!(out);

    let _ = writeln!(out, "[logging]");
    let _ = writeln!(out, "level = {}", config.logging.level);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ini::Ini;

    #[test]
    fn test_round_trip_through_parser() {
        let mut config = ConfigFile::default();
        config.scheduler.pool_size = 6;
        config.stations.entries.push(super::super::StationEntry {
            ident: "kspb".into(),
            cameras: 2,
        });

        let text = to_config_string(&config);
        let reparsed = super::super::parser::parse_ini(&Ini::load_from_str(&text).unwrap()).unwrap();

        assert_eq!(reparsed.scheduler.pool_size, 6);
        assert_eq!(reparsed.stations.entries, config.stations.entries);
    }
}
