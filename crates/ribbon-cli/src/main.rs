use ribbon::{DataValue, InterpolationConfig, Path, PathElement, ValueData};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Ribbon(ribbon::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Ribbon(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ribbon::Error> for CliError {
    fn from(value: ribbon::Error) -> Self {
        Self::Ribbon(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    interpolation: Option<String>,
    tension: Option<f64>,
    alpha: Option<f64>,
    fill_holes: bool,
    accuracy: Option<u8>,
    json: bool,
    pretty: bool,
    out: Option<String>,
}

fn usage() -> &'static str {
    "ribbon-cli\n\
\n\
USAGE:\n\
  ribbon-cli [--interpolation none|cardinal] [--tension <t>] [--alpha <a>] [--fill-holes] [--accuracy <digits>] [--json] [--pretty] [--out <path>] [<path>|-]\n\
\n\
INPUT:\n\
  A JSON array of points, or an object {\"points\": [...], \"interpolation\": {...}}.\n\
  Each point is [x, y], {\"x\": .., \"y\": .., \"meta\": ..}, a bare y number, or null (a hole).\n\
  Points without an x use their index.\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Flags override the input's \"interpolation\" object; the default is cardinal.\n\
  - Output is the SVG path data; --json prints {\"d\": .., \"elements\": [..]} instead.\n\
"
}

fn next_value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String, CliError> {
    it.next().ok_or(CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--json" => args.json = true,
            "--pretty" => args.pretty = true,
            "--fill-holes" => args.fill_holes = true,
            "--interpolation" => {
                let kind = next_value(&mut it)?;
                if !matches!(kind.as_str(), "none" | "cardinal") {
                    return Err(CliError::Usage(usage()));
                }
                args.interpolation = Some(kind.clone());
            }
            "--tension" => {
                let t = next_value(&mut it)?;
                args.tension = Some(t.parse::<f64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--alpha" => {
                let a = next_value(&mut it)?;
                args.alpha = Some(a.parse::<f64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--accuracy" => {
                let digits = next_value(&mut it)?;
                args.accuracy = Some(digits.parse::<u8>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--out" => {
                args.out = Some(next_value(&mut it)?.clone());
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PointIn {
    Pair([f64; 2]),
    Number(f64),
    Object {
        #[serde(default)]
        x: Option<f64>,
        #[serde(default)]
        y: Option<f64>,
        #[serde(default)]
        meta: Option<Value>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SeriesIn {
    Points(Vec<Option<PointIn>>),
    Document {
        points: Vec<Option<PointIn>>,
        #[serde(default)]
        interpolation: Option<Value>,
    },
}

/// Flattens the input points into the coordinate/value pair the strategies consume.
///
/// Holes keep their slot (at their x, with a placeholder y of 0).
fn flatten_points(points: &[Option<PointIn>]) -> (Vec<f64>, Vec<ValueData>) {
    let mut coords = Vec::with_capacity(points.len() * 2);
    let mut values = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        let index = i as f64;
        let (x, y, data) = match p {
            None => (index, 0.0, ValueData::hole()),
            Some(PointIn::Pair([x, y])) => (
                *x,
                *y,
                ValueData::new(DataValue::Point {
                    x: Some(*x),
                    y: Some(*y),
                }),
            ),
            Some(PointIn::Number(y)) => (index, *y, ValueData::new(*y)),
            Some(PointIn::Object { x, y, meta }) => (
                x.unwrap_or(index),
                y.filter(|v| v.is_finite()).unwrap_or(0.0),
                ValueData {
                    value: Some(DataValue::Point { x: *x, y: *y }),
                    meta: meta.clone(),
                },
            ),
        };
        coords.push(x);
        coords.push(y);
        values.push(data);
    }
    (coords, values)
}

/// Applies command line overrides on top of the input's interpolation object.
fn interpolation_config(base: Option<Value>, args: &Args) -> Result<InterpolationConfig, CliError> {
    let mut cfg = match base {
        Some(Value::Object(map)) => map,
        Some(_) => {
            return Err(CliError::Usage(
                "\"interpolation\" must be a JSON object with a \"type\" field",
            ));
        }
        None => Map::new(),
    };

    if let Some(kind) = &args.interpolation {
        cfg.insert("type".to_string(), Value::from(kind.as_str()));
    }
    cfg.entry("type").or_insert_with(|| Value::from("cardinal"));
    if let Some(t) = args.tension {
        cfg.insert("tension".to_string(), Value::from(t));
    }
    if let Some(a) = args.alpha {
        cfg.insert("alpha".to_string(), Value::from(a));
    }
    if args.fill_holes {
        cfg.insert("fillHoles".to_string(), Value::Bool(true));
    }

    Ok(InterpolationConfig::from_value(&Value::Object(cfg))?)
}

#[derive(Serialize)]
struct PathOut<'a> {
    d: String,
    elements: &'a [PathElement],
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            println!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn render(path: &Path, args: &Args) -> Result<String, CliError> {
    if !args.json {
        return Ok(path.stringify());
    }
    let out = PathOut {
        d: path.stringify(),
        elements: path.elements(),
    };
    Ok(if args.pretty {
        serde_json::to_string_pretty(&out)?
    } else {
        serde_json::to_string(&out)?
    })
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let (points, base) = match serde_json::from_str::<SeriesIn>(&text)? {
        SeriesIn::Points(points) => (points, None),
        SeriesIn::Document {
            points,
            interpolation,
        } => (points, interpolation),
    };

    let config = interpolation_config(base, &args)?;
    let (coords, values) = flatten_points(&points);
    ribbon::segment::check_input(&coords, &values)?;

    let mut path = config.build().interpolate(&coords, &values);
    if let Some(accuracy) = args.accuracy {
        path = path.with_accuracy(accuracy);
    }

    let rendered = render(&path, &args)?;
    write_text(&rendered, args.out.as_deref())
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
