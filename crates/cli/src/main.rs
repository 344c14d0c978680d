use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;
use vecgeom::{
    apply, cartesian_to_polar, degrees_to_radians, polar_to_cartesian, radians_to_degrees,
    rotate, OpKind, Value, Vector,
};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Vector geometry helpers: conversions, arithmetic and rotation")]
struct Cmd {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Cartesian (x, y) to polar (length, angle)
    Polar {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        /// Report the angle in degrees
        #[arg(long)]
        degrees: bool,
    },
    /// Polar (length, angle) to Cartesian (x, y)
    Cartesian {
        #[arg(long)]
        length: f64,
        #[arg(long, allow_negative_numbers = true)]
        angle: f64,
        /// Read the angle as degrees
        #[arg(long)]
        degrees: bool,
    },
    /// Vector arithmetic: LHS is "x,y"; RHS is "x,y" or a number
    Calc {
        /// add | subtract | multiply
        #[arg(long)]
        op: OpKind,
        #[arg(long, allow_hyphen_values = true)]
        lhs: String,
        #[arg(long, allow_hyphen_values = true)]
        rhs: String,
    },
    /// Rotate vectors about the origin, keeping their order
    Rotate {
        #[arg(long, allow_negative_numbers = true)]
        angle: f64,
        #[arg(long)]
        degrees: bool,
        /// Vector "x,y"; repeat for several
        #[arg(long = "vector", required = true, allow_hyphen_values = true)]
        vectors: Vec<Vector>,
    },
}

#[derive(Serialize)]
struct PolarOut {
    length: f64,
    angle: f64,
    unit: &'static str,
}

#[derive(Serialize)]
struct CartesianOut {
    x: f64,
    y: f64,
}

impl From<Vector> for CartesianOut {
    fn from(v: Vector) -> Self {
        Self { x: v.x, y: v.y }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let out = match cmd.action {
        Action::Polar { x, y, degrees } => polar(x, y, degrees, cmd.json)?,
        Action::Cartesian {
            length,
            angle,
            degrees,
        } => cartesian(length, angle, degrees, cmd.json)?,
        Action::Calc { op, lhs, rhs } => calc(op, &lhs, &rhs, cmd.json)?,
        Action::Rotate {
            angle,
            degrees,
            vectors,
        } => rotate_vectors(angle, degrees, &vectors, cmd.json)?,
    };
    println!("{out}");
    Ok(())
}

fn to_radians(angle: f64, degrees: bool) -> f64 {
    if degrees {
        degrees_to_radians(angle)
    } else {
        angle
    }
}

fn polar(x: f64, y: f64, degrees: bool, as_json: bool) -> Result<String> {
    let (length, angle) = cartesian_to_polar(Vector::new(x, y));
    let out = PolarOut {
        length,
        angle: if degrees { radians_to_degrees(angle) } else { angle },
        unit: if degrees { "deg" } else { "rad" },
    };
    if as_json {
        return Ok(serde_json::to_string_pretty(&out)?);
    }
    Ok(format!(
        "PolarVector(length={:?}, angle={:?}{})",
        out.length,
        out.angle,
        if degrees { "°" } else { "" }
    ))
}

fn cartesian(length: f64, angle: f64, degrees: bool, as_json: bool) -> Result<String> {
    let v = polar_to_cartesian(length, to_radians(angle, degrees));
    if as_json {
        return Ok(serde_json::to_string_pretty(&CartesianOut::from(v))?);
    }
    Ok(v.to_string())
}

/// Parse `lhs` as a vector and apply `op` with the raw `rhs` text.
fn evaluate(op: OpKind, lhs: &str, rhs: &str) -> Result<Value> {
    let lhs: Vector = match lhs.parse() {
        Ok(v) => v,
        Err(err) => bail!("left-hand side: {err}"),
    };
    tracing::info!(%op, %lhs, rhs, "calc");
    Ok(apply(op, lhs, rhs)?)
}

fn calc(op: OpKind, lhs: &str, rhs: &str, as_json: bool) -> Result<String> {
    let value = evaluate(op, lhs, rhs)?;
    if !as_json {
        return Ok(value.to_string());
    }
    let doc = match value {
        Value::Scalar(s) => json!({ "scalar": s }),
        Value::Vector(v) => json!(CartesianOut::from(v)),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

fn rotate_vectors(angle: f64, degrees: bool, vectors: &[Vector], as_json: bool) -> Result<String> {
    let radians = to_radians(angle, degrees);
    tracing::info!(angle, degrees, count = vectors.len(), "rotate");
    let rotated = rotate(radians, vectors);
    if as_json {
        let rows: Vec<CartesianOut> = rotated.into_iter().map(CartesianOut::from).collect();
        return Ok(serde_json::to_string_pretty(&rows)?);
    }
    Ok(rotated
        .iter()
        .map(Vector::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}
