#![allow(dead_code)]

use std::path::PathBuf;

use advent::config::{ConfigFile, DayConfig, RawConfigFile};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn with_inputs_dir(mut self, dir: &str) -> Self {
        self.config.config.inputs_dir = PathBuf::from(dir);
        self
    }

    pub fn with_cross_check(mut self, val: bool) -> Self {
        self.config.config.cross_check = val;
        self
    }

    pub fn with_day_input(mut self, key: &str, input: &str) -> Self {
        self.config.day.insert(
            key.to_string(),
            DayConfig {
                input: Some(PathBuf::from(input)),
            },
        );
        self
    }

    /// Render the same settings as TOML text.
    pub fn to_toml(&self) -> String {
        let mut out = format!(
            "[config]\ninputs_dir = {:?}\ncross_check = {}\n",
            self.config.config.inputs_dir.to_string_lossy(),
            self.config.config.cross_check
        );
        for (key, day) in &self.config.day {
            out.push_str(&format!("\n[day.{key}]\n"));
            if let Some(input) = &day.input {
                out.push_str(&format!("input = {:?}\n", input.to_string_lossy()));
            }
        }
        out
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for day 5 input text: rules, a blank line, then updates.
pub struct PrintQueueInputBuilder {
    rules: Vec<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

impl PrintQueueInputBuilder {
    pub fn new() -> Self {
        Self {
            rules: vec![],
            updates: vec![],
        }
    }

    pub fn rule(mut self, before: u32, after: u32) -> Self {
        self.rules.push((before, after));
        self
    }

    /// Add `before|after` for every pair consistent with `order`.
    pub fn total_order(mut self, order: &[u32]) -> Self {
        for (i, &before) in order.iter().enumerate() {
            for &after in &order[i + 1..] {
                self.rules.push((before, after));
            }
        }
        self
    }

    pub fn update(mut self, pages: &[u32]) -> Self {
        self.updates.push(pages.to_vec());
        self
    }

    pub fn build(self) -> String {
        let mut out = String::new();
        for (before, after) in &self.rules {
            out.push_str(&format!("{before}|{after}\n"));
        }
        out.push('\n');
        for update in &self.updates {
            let line: Vec<String> = update.iter().map(|p| p.to_string()).collect();
            out.push_str(&line.join(","));
            out.push('\n');
        }
        out
    }
}

impl Default for PrintQueueInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Height map text from rows of heights; `None` renders as `.`.
pub fn height_map_text(rows: &[Vec<Option<u8>>]) -> String {
    let mut out = String::new();
    for row in rows {
        for cell in row {
            match cell {
                Some(h) => out.push(char::from(b'0' + h)),
                None => out.push('.'),
            }
        }
        out.push('\n');
    }
    out
}
