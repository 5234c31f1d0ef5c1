use std::path::PathBuf;

use clap::Parser;

use genzrun_core::config::{
    SweepConfig, DEFAULT_ANALYSIS_COMPONENTS, DEFAULT_DIMENSION, DEFAULT_METHOD,
    DEFAULT_NB_OF_SAMPLES, DEFAULT_SEED, DEFAULT_TEMPLATE_FILE,
};

#[derive(Parser, Debug)]
#[command(
    name = "genzrun",
    version,
    about = "Runs the Dakota 'Genz' example: renders an input template, executes the sampler, reports the mean response"
)]
pub struct Cli {
    /// Dakota input file template
    #[arg(
        short = 't',
        long,
        alias = "template_file",
        default_value = DEFAULT_TEMPLATE_FILE
    )]
    pub template_file: PathBuf,

    /// Number of sampled dimensions
    #[arg(
        short = 'd',
        long,
        default_value_t = DEFAULT_DIMENSION,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub dimension: u32,

    /// Coefficient decay label, passed through to the analysis driver
    #[arg(
        short = 'a',
        long,
        alias = "analysis_components",
        default_value = DEFAULT_ANALYSIS_COMPONENTS
    )]
    pub analysis_components: String,

    /// Sampling method: random, lhs, halton or hammersley
    #[arg(short = 'm', long, default_value = DEFAULT_METHOD)]
    pub method: String,

    /// Number of samples
    #[arg(
        short = 'n',
        long,
        alias = "nb_of_samples",
        default_value_t = DEFAULT_NB_OF_SAMPLES,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub nb_of_samples: u64,

    /// Random seed (only used with random and lhs)
    #[arg(short = 's', long, default_value_t = DEFAULT_SEED, allow_negative_numbers = true)]
    pub seed: i64,

    /// Latinize samples (only used with halton and hammersley)
    #[arg(short = 'l', long)]
    pub latinize: bool,
}

impl Cli {
    pub fn into_config(self) -> SweepConfig {
        SweepConfig {
            template_file: self.template_file,
            dimension: self.dimension,
            analysis_components: self.analysis_components,
            nb_of_samples: self.nb_of_samples,
            method: self.method,
            seed: self.seed,
            latinize: self.latinize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_defaults_record() {
        let cfg = Cli::parse_from(["genzrun"]).into_config();
        assert_eq!(cfg.template_file, PathBuf::from(DEFAULT_TEMPLATE_FILE));
        assert_eq!(cfg.dimension, DEFAULT_DIMENSION);
        assert_eq!(cfg.analysis_components, DEFAULT_ANALYSIS_COMPONENTS);
        assert_eq!(cfg.nb_of_samples, DEFAULT_NB_OF_SAMPLES);
        assert_eq!(cfg.method, DEFAULT_METHOD);
        assert_eq!(cfg.seed, DEFAULT_SEED);
        assert!(!cfg.latinize);
    }

    #[test]
    fn short_flags_cover_the_whole_surface() {
        let cfg = Cli::parse_from([
            "genzrun", "-t", "other.template", "-d", "3", "-a", "os2", "-m", "halton", "-n",
            "256", "-s", "7", "-l",
        ])
        .into_config();
        assert_eq!(cfg.template_file, PathBuf::from("other.template"));
        assert_eq!(cfg.dimension, 3);
        assert_eq!(cfg.analysis_components, "os2");
        assert_eq!(cfg.method, "halton");
        assert_eq!(cfg.nb_of_samples, 256);
        assert_eq!(cfg.seed, 7);
        assert!(cfg.latinize);
    }

    #[test]
    fn underscore_aliases_are_accepted() {
        let cfg = Cli::parse_from([
            "genzrun",
            "--template_file",
            "x.in",
            "--nb_of_samples",
            "2",
        ])
        .into_config();
        assert_eq!(cfg.template_file, PathBuf::from("x.in"));
        assert_eq!(cfg.nb_of_samples, 2);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(Cli::try_parse_from(["genzrun", "-d", "0"]).is_err());
    }

    #[test]
    fn zero_samples_are_rejected() {
        assert!(Cli::try_parse_from(["genzrun", "-n", "0"]).is_err());
    }
}
