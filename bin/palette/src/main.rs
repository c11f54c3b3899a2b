//! Print everything tinct knows about a color.
//!
//! ```text
//! tinct-palette <hex> [complementary|analogous|triadic|monochromatic] [--json]
//! ```
//!
//! Without a harmony all four harmonies are printed.

use std::{process::ExitCode, str::FromStr};

use clap::Parser;
use tinct::{
    contrast_ratio, create_color_info, generate_color_variations, generate_harmony, ColorInfo,
    Conformance, Harmony,
};

#[derive(Parser, Debug)]
#[command(name = "tinct-palette")]
#[command(version, about = "Print the notations, variations, harmonies and contrast of a color", long_about = None)]
struct Args {
    /// The color as 3 or 6 hexadecimal digits with an optional leading `#`
    hex: String,

    /// Only print this harmony: complementary, analogous, triadic or monochromatic
    #[arg(value_parser = Harmony::from_str)]
    harmony: Option<Harmony>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,
}

impl Args {
    fn harmonies(&self) -> Vec<Harmony> {
        self.harmony
            .map_or_else(|| Harmony::ALL.to_vec(), |harmony| vec![harmony])
    }
}

fn describe(info: &ColorInfo) -> String {
    format!("{}  {}  {}", info.hex, info.rgb, info.hsl)
}

fn run(args: &Args) -> tinct::Result<()> {
    let info = create_color_info(&args.hex)?;
    let variations = generate_color_variations(&info.hex)?;

    let harmonies = args
        .harmonies()
        .into_iter()
        .map(|harmony| -> tinct::Result<_> {
            Ok((harmony, generate_harmony(&info.hex, harmony)?))
        })
        .collect::<tinct::Result<Vec<_>>>()?;

    let on_black = contrast_ratio(&info.hex, "#000000")?;
    let on_white = contrast_ratio(&info.hex, "#FFFFFF")?;

    if args.json {
        let harmonies = harmonies
            .iter()
            .map(|(harmony, colors)| (harmony.to_string(), colors))
            .collect::<std::collections::BTreeMap<_, _>>();

        let report = serde_json::json!({
            "color": info,
            "variations": variations,
            "harmonies": harmonies,
            "contrast": { "black": on_black, "white": on_white },
        });
        println!("{report:#}");
        return Ok(());
    }

    println!("{}", describe(&info));

    println!();
    println!("variations:");
    for variation in variations.iter() {
        println!("  {:<16}{}", variation.name, describe(&variation.color));
    }

    for (harmony, colors) in &harmonies {
        println!();
        println!("{harmony}:");
        for color in colors {
            println!("  {}", describe(color));
        }
    }

    println!();
    println!("contrast:");
    for (name, ratio) in [("black", on_black), ("white", on_white)] {
        println!(
            "  on {name}: {ratio:.2}:1 {:?}",
            Conformance::from_ratio(ratio)
        );
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("tinct-palette").chain(args.iter().copied()))
    }

    #[test]
    fn parse_hex_only() {
        let args = parse(&["#abc"]).unwrap();
        assert_eq!(args.hex, "#abc");
        assert_eq!(args.harmony, None);
        assert_eq!(args.harmonies(), Harmony::ALL);
        assert!(!args.json);
    }

    #[test]
    fn parse_harmony_and_json() {
        let args = parse(&["--json", "f00", "Triadic"]).unwrap();
        assert_eq!(args.hex, "f00");
        assert_eq!(args.harmonies(), [Harmony::Triadic]);
        assert!(args.json);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            parse(&[]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            parse(&["#abc", "tetradic"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            parse(&["#abc", "triadic", "extra"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
    }

    #[test]
    fn arguments_are_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn run_reports_invalid_hex() {
        let args = parse(&["#abcd"]).unwrap();
        assert_eq!(
            run(&args),
            Err(tinct::ColorError::InvalidHex("#abcd".to_string()))
        );
    }
}
