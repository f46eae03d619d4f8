use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use varg_format::{Config, Interpreter, WriteSink};
use varg_runtime::{Activation, ArgValue};

#[derive(Parser)]
#[command(name = "varg")]
#[command(version = "0.2.0")]
#[command(about = "Render printf-style templates over checked variadic arguments", long_about = None)]
struct Cli {
    /// Configuration file (default: varg.json in the current or a parent directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a template once
    Print {
        /// Template with %d/%i, %f and %s directives
        #[arg(value_name = "TEMPLATE")]
        template: String,

        /// Arguments: i:<int>, f:<double>, s:<text>, or untagged (int, then finite double, else text)
        #[arg(value_name = "ARGS", allow_hyphen_values = true)]
        args: Vec<String>,

        /// Open the cursor here and render through a forwarded cursor
        #[arg(long)]
        forward: bool,
    },

    /// Render a template through a cursor and through its duplicate
    Copy {
        #[arg(value_name = "TEMPLATE")]
        template: String,

        #[arg(value_name = "ARGS", allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Render a template, restart the cursor and render it again
    Restart {
        #[arg(value_name = "TEMPLATE")]
        template: String,

        #[arg(value_name = "ARGS", allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Standard deviation of the given values
    Stddev {
        #[arg(value_name = "VALUES", allow_hyphen_values = true)]
        values: Vec<f64>,
    },

    /// Print the default configuration
    Config,
}

/// Parse one command-line argument into a tagged value.
///
/// `i:`, `f:` and `s:` force the kind; anything else is an int if it parses
/// as one, then a finite double, then text. Words such as `nan` or `inf`
/// stay text unless written with `f:`.
fn parse_arg(raw: &str) -> Result<ArgValue> {
    if let Some(v) = raw.strip_prefix("i:") {
        let n = v
            .parse::<i64>()
            .with_context(|| format!("`{}` is not an integer", v))?;
        return Ok(ArgValue::Int(n));
    }
    if let Some(v) = raw.strip_prefix("f:") {
        let n = v
            .parse::<f64>()
            .with_context(|| format!("`{}` is not a number", v))?;
        return Ok(ArgValue::Double(n));
    }
    if let Some(v) = raw.strip_prefix("s:") {
        return Ok(ArgValue::Text(v.to_string()));
    }

    if let Ok(n) = raw.parse::<i64>() {
        Ok(ArgValue::Int(n))
    } else if let Some(n) = raw.parse::<f64>().ok().filter(|n| n.is_finite()) {
        Ok(ArgValue::Double(n))
    } else {
        Ok(ArgValue::Text(raw.to_string()))
    }
}

fn activation(args: &[String]) -> Result<Activation> {
    args.iter().map(|raw| parse_arg(raw)).collect()
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path),
        None => Config::from_dir(std::env::current_dir()?),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(cli.config)?;
    let interpreter = Interpreter::from_config(&config);

    let stdout = io::stdout();
    let mut sink = WriteSink::with_float_style(stdout.lock(), config.float_style());

    match cli.command {
        Commands::Print {
            template,
            args,
            forward,
        } => {
            let va = activation(&args)?;
            log::info!("Rendering {:?} with {} argument(s)", template, va.len());
            if forward {
                varg_format::call_vprint(&interpreter, &mut sink, &template, &va)?;
            } else {
                varg_format::print(&interpreter, &mut sink, &template, &va)?;
            }
        }

        Commands::Copy { template, args } => {
            let va = activation(&args)?;
            log::info!("Rendering {:?} through a duplicated cursor", template);
            varg_format::print_copied(&interpreter, &mut sink, &template, &va)?;
        }

        Commands::Restart { template, args } => {
            let va = activation(&args)?;
            log::info!("Rendering {:?} with a restart", template);
            varg_format::print_restarted(&interpreter, &mut sink, &template, &va)?;
        }

        Commands::Stddev { values } => {
            let count = i64::try_from(values.len())?;
            let va: Activation = values.into_iter().map(ArgValue::from).collect();
            let sd = varg_runtime::sample_stddev(count, &va)?;
            writeln!(sink.get_mut(), "{}", sd)?;
        }

        Commands::Config => {
            writeln!(sink.get_mut(), "{}", Config::example()?)?;
        }
    }

    sink.flush()?;
    Ok(())
}
