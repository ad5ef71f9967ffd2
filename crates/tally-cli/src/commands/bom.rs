//! Bill-of-materials command implementation.
//!
//! Reads a JSON file of the form:
//!
//! ```json
//! {
//!   "ingredients": [{"unit_price": 4.20, "quantity": 0.5}],
//!   "packaging":   [{"unit_price": 0.35, "quantity": 1}]
//! }
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::{Deserialize, Serialize};

use tally_core::types::LineItem;

use crate::commands::{read_json, Context};
use crate::output::{KeyValue, Rendered};

/// Arguments for the bom command.
#[derive(Args, Debug)]
pub struct BomArgs {
    /// JSON file with `ingredients` and `packaging` lists
    #[arg(long)]
    pub file: PathBuf,
}

/// Bill of materials for one product.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BillOfMaterials {
    /// Ingredient rows.
    pub ingredients: Vec<LineItem>,
    /// Packaging rows.
    pub packaging: Vec<LineItem>,
}

#[derive(Serialize)]
struct BomOutput {
    ingredient_lines: usize,
    packaging_lines: usize,
    unit_cost: rust_decimal::Decimal,
}

/// Execute the bom command.
pub fn execute(args: BomArgs, ctx: &Context) -> Result<()> {
    let bom: BillOfMaterials = read_json(&args.file)?;
    let unit_cost = ctx
        .calc
        .cost_from_bill_of_materials(&bom.ingredients, &bom.packaging);
    tracing::debug!(
        ingredients = bom.ingredients.len(),
        packaging = bom.packaging.len(),
        "computed bill-of-materials cost"
    );

    let output = BomOutput {
        ingredient_lines: bom.ingredients.len(),
        packaging_lines: bom.packaging.len(),
        unit_cost,
    };

    Rendered {
        title: "Bill of Materials",
        rows: vec![
            KeyValue::new("Ingredient Lines", output.ingredient_lines.to_string()),
            KeyValue::new("Packaging Lines", output.packaging_lines.to_string()),
            KeyValue::amount("Unit Cost", unit_cost),
        ],
        value: &output,
        minimal: unit_cost.to_string(),
    }
    .print(ctx.format, ctx.quiet)
}
