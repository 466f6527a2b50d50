//! Subcommand handlers

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde_json::json;
use tracing::info;

use tqec::{
    default_indices, render_array, AlternatingRectangleTemplate, Dimension, InstantiationContext,
    LinearFunction, PlaquetteIndex, ScalableCorner, Template,
};

/// How the instantiated template is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plaquette grid, `.` for empty cells
    Text,
    /// JSON document with the shape and the cells
    Json,
    /// One line with the shape and plaquette counts
    Summary,
}

/// Options shared by every subcommand
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Scale parameter
    #[arg(short, long, default_value_t = 2, allow_negative_numbers = true)]
    pub k: i64,

    /// Plaquette indices, comma separated (default: 1..=n)
    #[arg(long, value_delimiter = ',')]
    pub indices: Option<Vec<PlaquetteIndex>>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Maximum number of cells of the instantiated array
    #[arg(long, conflicts_with = "unbounded")]
    pub max_cells: Option<usize>,

    /// Allow arrays of any size
    #[arg(long)]
    pub unbounded: bool,
}

impl OutputArgs {
    fn context(&self) -> InstantiationContext {
        match (self.unbounded, self.max_cells) {
            (true, _) => InstantiationContext::unbounded(),
            (false, Some(max_cells)) => InstantiationContext::with_max_cells(max_cells),
            (false, None) => InstantiationContext::default(),
        }
    }
}

/// Options of the `corner` subcommand
#[derive(Debug, Args)]
pub struct CornerArgs {
    /// Slope of the corner side as a function of k
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    pub slope: i64,

    /// Intercept of the corner side as a function of k
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub intercept: i64,
}

/// Options of the `rectangle` subcommand
#[derive(Debug, Args)]
pub struct RectangleArgs {
    /// Slope of the width as a function of k
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    pub width_slope: i64,

    /// Intercept of the width as a function of k
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub width_intercept: i64,

    /// Slope of the height as a function of k
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    pub height_slope: i64,

    /// Intercept of the height as a function of k
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub height_intercept: i64,
}

/// Build and print a scalable corner.
pub fn corner(args: &CornerArgs, output: &OutputArgs) -> Result<String> {
    let function = LinearFunction::new(args.slope, args.intercept)
        .context("invalid corner scale function")?;
    let corner = ScalableCorner::new(function, output.k)
        .with_context(|| format!("cannot build a corner of side {function} at k = {}", output.k))?;
    instantiate(&corner, output)
}

/// Build and print an alternating rectangle.
pub fn rectangle(args: &RectangleArgs, output: &OutputArgs) -> Result<String> {
    let width = Dimension::linear(args.width_slope, args.width_intercept)
        .context("invalid rectangle width")?;
    let height = Dimension::linear(args.height_slope, args.height_intercept)
        .context("invalid rectangle height")?;
    let rectangle = AlternatingRectangleTemplate::new(width, height, output.k)
        .with_context(|| format!("cannot build a rectangle at k = {}", output.k))?;
    instantiate(&rectangle, output)
}

fn instantiate(template: &dyn Template, output: &OutputArgs) -> Result<String> {
    let indices = output
        .indices
        .clone()
        .unwrap_or_else(|| default_indices(template));
    let array = template
        .instantiate_with(&indices, &output.context())
        .context("instantiation failed")?;
    info!(shape = %array.shape(), "instantiated template");

    let text = match output.format {
        OutputFormat::Text => render_array(&array),
        OutputFormat::Json => {
            let document = json!({
                "shape": array.shape(),
                "expected_plaquettes_number": template.expected_plaquettes_number(),
                "array": array,
            });
            let mut text = serde_json::to_string_pretty(&document)?;
            text.push('\n');
            text
        }
        OutputFormat::Summary => format!(
            "shape {} | expected plaquettes {} | non-empty cells {}\n",
            array.shape(),
            template.expected_plaquettes_number(),
            array.count_non_empty()
        ),
    };
    Ok(text)
}
