use crate::cropping::{Margins, Method, Pipeline};
use crate::output::Naming;
use crate::Args;
use std::path::PathBuf;

/// Run configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub method: Method,
    pub threshold: u8,
    pub margins: Option<Margins>,
    pub naming: Naming,
    pub quality: u8,
    pub force: bool,
    pub report: Option<PathBuf>,
}

impl Config {
    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new(self.method, self.threshold, self.margins)
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let method = args.method;
        let output_dir = args
            .output_dir
            .unwrap_or_else(|| args.input_dir.join("cropped"));

        let margins = match (args.trim_landscape, args.trim_portrait) {
            (None, None) => method.default_margins(),
            (landscape, portrait) => {
                let defaults = method.default_margins().unwrap_or(Margins {
                    landscape: 0,
                    portrait: 0,
                });
                Some(Margins {
                    landscape: landscape.unwrap_or(defaults.landscape),
                    portrait: portrait.unwrap_or(defaults.portrait),
                })
            }
        };

        Self {
            input_dir: args.input_dir,
            output_dir,
            method,
            threshold: args.threshold.unwrap_or_else(|| method.default_threshold()),
            margins,
            naming: Naming {
                prefix: args.prefix,
                suffix: args.suffix,
                format: args.format,
            },
            quality: args.quality,
            force: args.force,
            report: args.report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(argv: &[&str]) -> Config {
        let mut full = vec!["bbox-crop"];
        full.extend_from_slice(argv);
        Config::from(Args::parse_from(full))
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&["images"]);
        assert_eq!(cfg.input_dir, PathBuf::from("images"));
        assert_eq!(cfg.output_dir, PathBuf::from("images/cropped"));
        assert_eq!(cfg.method, Method::DarkTol);
        assert_eq!(cfg.threshold, 50);
        assert_eq!(cfg.margins, None);
        assert_eq!(cfg.naming, Naming::default());
        assert_eq!(cfg.quality, 90);
        assert!(!cfg.force);
    }

    #[test]
    fn test_method_sets_threshold_and_margins() {
        let cfg = config(&["images", "--method", "fixed"]);
        assert_eq!(cfg.threshold, 0);
        assert_eq!(cfg.margins, Some(Margins::RIG));

        let cfg = config(&["images", "--method", "contour", "--threshold", "25"]);
        assert_eq!(cfg.threshold, 25);
    }

    #[test]
    fn test_partial_margin_override() {
        let cfg = config(&["images", "--method", "fixed", "--trim-portrait", "100"]);
        assert_eq!(
            cfg.margins,
            Some(Margins {
                landscape: 1661,
                portrait: 100
            })
        );

        let cfg = config(&["images", "--trim-landscape", "40"]);
        assert_eq!(
            cfg.margins,
            Some(Margins {
                landscape: 40,
                portrait: 0
            })
        );
    }

    #[test]
    fn test_quality_out_of_range_is_rejected() {
        assert!(Args::try_parse_from(["bbox-crop", "images", "--quality", "0"]).is_err());
        assert!(Args::try_parse_from(["bbox-crop", "images", "--quality", "101"]).is_err());
    }
}
