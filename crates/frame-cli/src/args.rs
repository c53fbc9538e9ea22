//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "framegen")]
#[command(about = "Generate picture frame geometry from a moulding profile", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generate: GenerateOptions,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List the built-in profiles
    Presets,
}

/// Where the profile comes from
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileSource {
    Preset(String),
    File(PathBuf),
}

/// Inputs and outputs of a frame build (defaults to the classic_moulding preset)
#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct GenerateOptions {
    /// Built-in profile (see `framegen presets`)
    #[arg(long, conflicts_with = "profile")]
    pub preset: Option<String>,

    /// Profile file (.json or .ron)
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Frame parameters file (.json or .ron)
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Project file holding profile and parameters
    #[arg(long, conflicts_with_all = ["preset", "profile", "params"])]
    pub project: Option<PathBuf>,

    /// Write the frame as binary STL
    #[arg(long)]
    pub stl: Option<PathBuf>,

    /// Only export the four moulding sides
    #[arg(long)]
    pub sides_only: bool,

    /// Save the resolved profile and parameters
    #[arg(long)]
    pub save_project: Option<PathBuf>,

    /// Print dimensions and materials as JSON
    #[arg(long)]
    pub summary: bool,
}

impl GenerateOptions {
    pub fn profile_source(&self) -> Option<ProfileSource> {
        match (&self.preset, &self.profile) {
            (Some(name), _) => Some(ProfileSource::Preset(name.clone())),
            (None, Some(path)) => Some(ProfileSource::File(path.clone())),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("framegen").chain(args.iter().copied()))
    }

    #[test]
    fn test_empty_args_generate_defaults() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.generate, GenerateOptions::default());
        assert_eq!(cli.generate.profile_source(), None);
    }

    #[test]
    fn test_generate_options() {
        let cli = parse(&["--preset", "wedge", "--stl", "out.stl", "--sides-only", "--summary"]).unwrap();
        let options = cli.generate;
        assert_eq!(options.profile_source(), Some(ProfileSource::Preset("wedge".to_string())));
        assert_eq!(options.stl, Some(PathBuf::from("out.stl")));
        assert!(options.sides_only);
        assert!(options.summary);
    }

    #[test]
    fn test_profile_file_source() {
        let cli = parse(&["--profile", "lip.json", "--params", "p.ron"]).unwrap();
        assert_eq!(cli.generate.profile_source(), Some(ProfileSource::File(PathBuf::from("lip.json"))));
        assert_eq!(cli.generate.params, Some(PathBuf::from("p.ron")));
    }

    #[test]
    fn test_presets_subcommand() {
        assert_eq!(parse(&["presets"]).unwrap().command, Some(Command::Presets));
    }

    #[test]
    fn test_help_flag() {
        assert_eq!(parse(&["--help"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_missing_value() {
        assert!(parse(&["--stl"]).is_err());
    }

    #[test]
    fn test_conflicting_inputs() {
        let err = parse(&["--project", "a.ron", "--params", "p.json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
        let err = parse(&["--preset", "wedge", "--profile", "p.json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
        assert_eq!(parse(&["--bogus"]).unwrap_err().kind(), ErrorKind::UnknownArgument);
    }
}
