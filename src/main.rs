use anyhow::{Context, Result};
use clap::Parser;

use datapath::config::{Config, OutputFormat};
use datapath::file::loader::{load_file, load_stdin};
use datapath::{PathExpression, ResolveOptions, Step, Value, ValueType};

/// Datapath - resolve a path into a JSON or YAML document
#[derive(Parser)]
#[command(name = "datapath")]
#[command(version)]
#[command(about = "Resolve a path into a JSON or YAML document", long_about = None)]
struct Cli {
    /// Document to read (JSON, JSONL, or YAML, optionally .gz); reads stdin if omitted
    #[arg(short, long)]
    file: Option<String>,

    /// Path steps, one per argument: `[N]` is an array index, anything else a field name
    steps: Vec<String>,

    /// Value to print if the path does not resolve (JSON; bare words are strings)
    #[arg(long, allow_hyphen_values = true)]
    default: Option<String>,

    /// Required type of the result, e.g. `integer` or `string|null`
    #[arg(short = 't', long = "type", value_parser = parse_value_type)]
    type_: Option<ValueType>,

    /// Nullable type of the result; prints null if the path does not resolve
    #[arg(long, value_parser = parse_value_type)]
    optional: Option<ValueType>,

    /// Skip type assertions on the result
    #[arg(long)]
    no_check_type: bool,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Print JSON on a single line (overrides config)
    #[arg(long)]
    compact: bool,
}

fn parse_value_type(name: &str) -> Result<ValueType, String> {
    ValueType::from_name(name).ok_or_else(|| {
        format!(
            "unknown type '{}' (expected any, null, boolean, integer, float, number, string, array, object)",
            name
        )
    })
}

/// Converts one command-line argument into a step.
///
/// `[3]` and `[-1]` are index steps; everything else, including `3`, is a
/// field name.
fn step_from_arg(arg: &str) -> Step {
    arg.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .and_then(|inner| inner.trim().parse::<i64>().ok())
        .map(Step::Index)
        .unwrap_or_else(|| Step::Field(arg.to_string()))
}

/// Interprets a `--default` argument as JSON, falling back to a plain string.
fn default_from_arg(arg: &str) -> Value {
    serde_json::from_str::<serde_json::Value>(arg)
        .map(Value::from)
        .unwrap_or_else(|_| Value::from(arg))
}

fn render(value: &Value, format: OutputFormat, pretty: bool) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(rendered.trim_end().to_string())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::load();

    let data = match &cli.file {
        Some(file_path) => {
            load_file(file_path).with_context(|| format!("Failed to load {}", file_path))?
        }
        None => load_stdin()?,
    };

    let path: PathExpression = cli.steps.iter().map(|arg| step_from_arg(arg)).collect();

    let options = ResolveOptions {
        default: cli.default.as_deref().map(default_from_arg),
        type_: cli.type_,
        optional: cli.optional,
        check_type: config.check_type && !cli.no_check_type,
    };
    log::debug!("resolving {} with {:?}", path, options);

    let result = path.resolve(&data, &options)?;

    let format = cli.output.unwrap_or(config.output_format);
    let pretty = config.pretty && !cli.compact;
    println!("{}", render(&result, format, pretty)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_from_arg() {
        assert_eq!(step_from_arg("foo"), Step::from("foo"));
        assert_eq!(step_from_arg("[0]"), Step::Index(0));
        assert_eq!(step_from_arg("[-2]"), Step::Index(-2));
        assert_eq!(step_from_arg("0"), Step::from("0"));
        assert_eq!(step_from_arg("[x]"), Step::from("[x]"));
        assert_eq!(step_from_arg("[]"), Step::from("[]"));
    }

    #[test]
    fn test_default_from_arg() {
        assert_eq!(default_from_arg("42"), Value::from(42));
        assert_eq!(default_from_arg("\"42\""), Value::from("42"));
        assert_eq!(default_from_arg("null"), Value::Null);
        assert_eq!(default_from_arg("fallback"), Value::from("fallback"));
    }

    #[test]
    fn test_parse_value_type() {
        assert_eq!(parse_value_type("integer"), Ok(ValueType::Integer));
        assert!(parse_value_type("nope").unwrap_err().contains("unknown type"));
    }

    #[test]
    fn test_render() {
        let value = Value::from(vec![Value::from(1), Value::from("a")]);
        assert_eq!(
            render(&value, OutputFormat::Json, false).unwrap(),
            r#"[1,"a"]"#
        );
        assert_eq!(
            render(&value, OutputFormat::Yaml, true).unwrap(),
            "- 1\n- a"
        );
    }

    #[test]
    fn test_cli_accepts_negative_default() {
        let cli = Cli::parse_from(["datapath", "foo", "--default", "-1"]);
        assert_eq!(cli.steps, vec!["foo"]);
        assert_eq!(cli.default.as_deref(), Some("-1"));
        assert_eq!(default_from_arg("-1"), Value::from(-1));

        let cli = Cli::parse_from(["datapath", "--default", "-2.5", "foo"]);
        assert_eq!(cli.default.as_deref(), Some("-2.5"));
        assert_eq!(cli.steps, vec!["foo"]);
    }

    #[test]
    fn test_cli_parses_steps_and_options() {
        let cli = Cli::parse_from([
            "datapath", "-f", "data.json", "foo", "bar", "[0]", "--type", "integer", "--compact",
        ]);
        assert_eq!(cli.file.as_deref(), Some("data.json"));
        assert_eq!(cli.steps, vec!["foo", "bar", "[0]"]);
        assert_eq!(cli.type_, Some(ValueType::Integer));
        assert!(cli.compact);
        assert!(!cli.no_check_type);
    }
}
