use std::path::PathBuf;

use crate::config::{DEFAULT_SERVER, config_path_hint};
use crate::theme::ThemeArg;

/// CLI arguments parsed from command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Preloaded into the Original slot
    pub original: Option<PathBuf>,
    /// Preloaded into the Modified slot
    pub modified: Option<PathBuf>,
    pub server: Option<String>,
    pub theme: Option<ThemeArg>,
    pub export_dir: Option<PathBuf>,
    pub show_help: bool,
}

pub fn print_help() -> ! {
    let name = std::env::args()
        .next()
        .and_then(|p| {
            std::path::Path::new(&p)
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "doccmp".to_string());
    let valid_values = ThemeArg::valid_values_display();
    let config_path = config_path_hint();
    println!(
        "doccmp - Compare two PDF or DOCX documents side by side

Usage: {name} [OPTIONS] [ORIGINAL] [MODIFIED]

Arguments:
  [ORIGINAL]             Document to load into the Original slot
  [MODIFIED]             Document to load into the Modified slot

Options:
  --server <URL>         Comparison server [default: {DEFAULT_SERVER}]
  --export-dir <DIR>     Directory for comparison-report.html [default: .]
  --theme <THEME>        Color theme to use [default: dark]
                         Valid values: {valid_values}
  -h, --help             Print this help message

Precedence: command line > {config_path} > defaults.
Press ? in the application for keybinding help."
    );
    std::process::exit(0);
}

/// Parse CLI arguments from command line
///
/// Handrolled to keep the dependency set small.
pub fn parse_cli_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let parsed = parse_cli_args_from(&args).unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        std::process::exit(2);
    });
    if parsed.show_help {
        print_help();
    }
    parsed
}

fn parse_cli_args_from(args: &[String]) -> Result<CliArgs, String> {
    let mut cli_args = CliArgs::default();
    let mut positional = Vec::new();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag, Some(value.to_string())),
            _ => (arg.as_str(), None),
        };

        let mut value_for = |flag: &str| -> Result<String, String> {
            let value = match inline.clone() {
                Some(value) => value,
                None => iter
                    .next()
                    .cloned()
                    .ok_or_else(|| format!("{flag} requires a value"))?,
            };
            if value.is_empty() || value.starts_with('-') {
                return Err(format!("{flag} requires a value"));
            }
            Ok(value)
        };

        match flag {
            "-h" | "--help" => cli_args.show_help = true,
            "--server" => cli_args.server = Some(value_for(flag)?),
            "--export-dir" => cli_args.export_dir = Some(PathBuf::from(value_for(flag)?)),
            "--theme" => {
                let valid_values = ThemeArg::valid_values_display();
                let value = value_for(flag)
                    .map_err(|_| format!("--theme requires a value ({valid_values})"))?;
                cli_args.theme = Some(ThemeArg::from_str(&value).ok_or_else(|| {
                    format!("Unknown theme '{value}'. Valid options: {valid_values}")
                })?);
            }
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(format!("Unknown option '{other}'"));
            }
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    if positional.len() > 2 {
        return Err("At most two documents can be given (ORIGINAL MODIFIED)".to_string());
    }
    let mut positional = positional.into_iter();
    cli_args.original = positional.next();
    cli_args.modified = positional.next();

    Ok(cli_args)
}
