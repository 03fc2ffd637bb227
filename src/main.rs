// SPDX-License-Identifier: MPL-2.0
use media_columns::config;
use media_columns::domain::media::guess_mime_type;
use media_columns::i18n::fluent::I18n;
use media_columns::{ColumnExtension, LocalFile};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "media_columns=warn";

const USAGE: &str = "\
Usage: media-columns [OPTIONS] FILE...

Options:
  --lang LANG      Locale for labels and values (e.g. fr)
  --mime TYPE      MIME type to use instead of guessing from the extension
  --list-columns   Print the available columns and exit
  --show-empty     Also print columns without a value
  --verbose        Log debug output to stderr
  -h, --help       Print this help
";

struct Args {
    lang: Option<String>,
    mime: Option<String>,
    list_columns: bool,
    show_empty: bool,
    verbose: bool,
    files: Vec<PathBuf>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    Ok(Some(Args {
        lang: args.opt_value_from_str("--lang")?,
        mime: args.opt_value_from_str("--mime")?,
        list_columns: args.contains("--list-columns"),
        show_empty: args.contains("--show-empty"),
        verbose: args.contains("--verbose"),
        files: args.finish().into_iter().map(PathBuf::from).collect(),
    }))
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("media_columns=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("media-columns: {err}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(args.verbose);

    let config = config::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "using default settings");
        config::Config::default()
    });
    let show_empty = args.show_empty || config.show_empty.unwrap_or(false);
    let i18n = I18n::new(args.lang, &config);
    tracing::debug!(locale = %i18n.current_locale(), "locale selected");
    let extension = ColumnExtension::new(config, i18n);

    if args.list_columns {
        for column in extension.columns() {
            println!("{}\t{}\t{}", column.attribute, column.label, column.description);
        }
        return ExitCode::SUCCESS;
    }

    if args.files.is_empty() {
        eprint!("media-columns: no input files\n\n{USAGE}");
        return ExitCode::FAILURE;
    }

    let mut status = ExitCode::SUCCESS;
    for (index, path) in args.files.iter().enumerate() {
        let mime = args
            .mime
            .clone()
            .unwrap_or_else(|| guess_mime_type(path).to_string());

        let mut file = match LocalFile::new(path, mime) {
            Ok(file) => file,
            Err(err) => {
                eprintln!("media-columns: {}: {err}", path.display());
                status = ExitCode::FAILURE;
                continue;
            }
        };
        extension.update_file_info(&mut file);

        if index > 0 {
            println!();
        }
        println!("{}", path.display());
        for (name, value) in file.attributes().iter() {
            if show_empty || !value.is_empty() {
                println!("  {name}={value}");
            }
        }
    }
    status
}
