use clap::Parser;
use passgen::GenerationConfig;
use passgen::pass::Category;
use passgen::settings::{DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};

/// Generate passwords from selectable character categories and score
/// their strength.
///
/// Run without arguments for the interactive TUI.
#[derive(Parser, Debug, Clone)]
#[command(name = "passgen", author, version, about, long_about = None)]
pub struct Args {
    /// Characters per password.
    #[arg(
        short,
        long,
        env = "PASSGEN_LENGTH",
        default_value_t = DEFAULT_LENGTH as u8,
        value_parser = clap::value_parser!(u8).range((MIN_LENGTH as i64)..=(MAX_LENGTH as i64))
    )]
    pub length: u8,

    /// Add uppercase letters (A-Z).
    #[arg(short = 'U', long)]
    pub upper: bool,

    /// Add lowercase letters (a-z).
    #[arg(short = 'L', long)]
    pub lower: bool,

    /// Include numbers (0-9).
    #[arg(short, long)]
    pub digits: bool,

    /// Include symbols.
    #[arg(short, long)]
    pub symbols: bool,

    /// Include every category.
    #[arg(short, long)]
    pub all: bool,

    /// How many passwords to generate.
    #[arg(
        short,
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub number: u32,

    /// Copy to the clipboard instead of printing.
    #[arg(short = 'b', long = "board", conflicts_with_all = ["json", "strength"])]
    pub clipboard: bool,

    /// Print the strength assessment next to each password.
    #[arg(long)]
    pub strength: bool,

    /// Print one JSON object per password.
    #[arg(long, conflicts_with = "strength")]
    pub json: bool,

    /// Seed a deterministic generator instead of the OS source.
    #[arg(long, env = "PASSGEN_SEED", hide_env_values = true)]
    pub seed: Option<u64>,

    /// Score an existing password instead of generating one.
    #[arg(long, value_name = "PASSWORD", conflicts_with_all = ["clipboard", "interactive"])]
    pub assess: Option<String>,

    /// Suppress notices and prompts.
    #[arg(short, long)]
    pub quiet: bool,

    /// Open the interactive TUI with these flags as initial settings.
    #[arg(short, long)]
    pub interactive: bool,
}

impl Args {
    pub fn config(&self) -> GenerationConfig {
        let selected = [
            (Category::Digits, self.digits),
            (Category::Uppercase, self.upper),
            (Category::Lowercase, self.lower),
            (Category::Symbols, self.symbols),
        ];
        selected.into_iter().fold(
            GenerationConfig::default().with_length(usize::from(self.length)),
            |config, (category, on)| config.with_category(category, on || self.all),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn flags_map_to_config() {
        let args = Args::try_parse_from(["passgen", "-U", "-d", "-l", "12"]).unwrap();
        let config = args.config();
        assert_eq!(config.length(), 12);
        assert!(config.include_upper && config.include_digits);
        assert!(!config.include_lower && !config.include_symbols);
    }

    #[test]
    fn all_enables_everything() {
        let args = Args::try_parse_from(["passgen", "--all"]).unwrap();
        assert_eq!(args.config(), GenerationConfig::all().with_length(DEFAULT_LENGTH));
    }

    #[test]
    fn length_out_of_range_is_rejected() {
        assert!(Args::try_parse_from(["passgen", "-l", "7"]).is_err());
        assert!(Args::try_parse_from(["passgen", "-l", "51"]).is_err());
        assert!(Args::try_parse_from(["passgen", "-l", "50"]).is_ok());
    }

    #[test]
    fn clipboard_rejects_output_formats() {
        assert!(Args::try_parse_from(["passgen", "-a", "-b", "--json"]).is_err());
        assert!(Args::try_parse_from(["passgen", "-a", "-b", "--strength"]).is_err());
        assert!(Args::try_parse_from(["passgen", "-a", "-b"]).is_ok());
    }

    #[test]
    fn number_must_be_positive() {
        assert!(Args::try_parse_from(["passgen", "-a", "-n", "0"]).is_err());
    }
}
