use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "movement_tui", version, about = "Movement Map forecast viewer")]
pub struct CliArgs {
    /// Print the circles for one selection and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the forecast dataset path
    #[arg(long, value_name = "PATH")]
    pub data: Option<String>,

    /// Slider position (0-31) used by headless mode
    #[arg(long, value_name = "N", default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=31))]
    pub position: u8,

    /// Write log output to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(data) = &self.data {
            std::env::set_var("MOVEMENT_DATA", data);
        }
        if let Some(path) = &self.log_file {
            std::env::set_var("MOVEMENT_LOG_FILE", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_dawn_position() {
        let args = CliArgs::parse_from(["movement_tui"]);
        assert_eq!(args.position, 2);
        assert!(!args.headless);
        assert!(args.data.is_none());
    }

    #[test]
    fn rejects_positions_past_the_slider() {
        assert!(CliArgs::try_parse_from(["movement_tui", "--position", "32"]).is_err());
        let args = CliArgs::try_parse_from(["movement_tui", "--headless", "--json", "--position", "31"]);
        assert!(args.is_ok_and(|args| args.headless && args.json && args.position == 31));
    }

    #[test]
    fn help_lists_flags() {
        let help = CliArgs::help_text();
        assert!(help.contains("--headless"));
        assert!(help.contains("--data"));
    }
}
