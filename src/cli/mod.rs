// src/cli/mod.rs
use clap::Parser;

use crate::models::GenerationOptions;

#[derive(Parser, Debug)]
#[command(name = "passgen", version, about = "Creates secure random passwords")]
pub struct Args {
    /// Password length (minimum 4)
    #[arg(short = 'n', env = "PASSGEN_LENGTH", default_value_t = 10)]
    pub length: usize,

    /// Copy the generated password to the clipboard
    #[arg(short = 'c')]
    pub copy: bool,

    /// Include special characters in the password
    #[arg(short = 's')]
    pub special: bool,

    /// Use only lowercase letters and digits
    #[arg(short = 'l')]
    pub lowercase_only: bool,
}

impl Args {
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            length: self.length,
            include_uppercase: !self.lowercase_only,
            include_special: self.special,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_surface() {
        let args = Args::try_parse_from(["passgen"]).unwrap();
        assert_eq!(args.length, 10);
        assert!(!args.copy);
        assert!(!args.special);
        assert!(!args.lowercase_only);
    }

    #[test]
    fn flags_parse() {
        let args = Args::try_parse_from(["passgen", "-n", "24", "-c", "-s", "-l"]).unwrap();
        assert_eq!(args.length, 24);
        assert!(args.copy);
        assert!(args.special);
        assert!(args.lowercase_only);
    }

    #[test]
    fn lowercase_only_suppresses_uppercase() {
        let args = Args::try_parse_from(["passgen", "-l"]).unwrap();
        let options = args.generation_options();
        assert!(!options.include_uppercase);
        assert!(!options.include_special);
    }

    #[test]
    fn non_numeric_length_is_rejected() {
        assert!(Args::try_parse_from(["passgen", "-n", "lots"]).is_err());
    }
}
