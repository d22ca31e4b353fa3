//! Selection summary report

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::Selection;

/// Counts and per-feature scores of one selection run
#[derive(Debug, Default)]
pub struct SelectionSummary {
    pub initial_features: usize,
    pub final_features: usize,
    pub below_threshold: Vec<String>,
    pub redundant: Vec<(String, String)>,
    pub selected: Vec<(String, f64)>,
    pub pairs_compared: usize,
}

impl SelectionSummary {
    pub fn new(initial_features: usize) -> Self {
        Self {
            initial_features,
            final_features: initial_features,
            ..Default::default()
        }
    }

    pub fn from_selection(selection: &Selection) -> Self {
        let initial = selection.relevant.len() + selection.irrelevant.len();
        let mut summary = Self::new(initial);
        summary.final_features = selection.relevant.len();
        summary.below_threshold = selection.below_threshold.clone();
        summary.redundant = selection
            .redundancies
            .iter()
            .map(|r| (r.feature.clone(), r.dominated_by.clone()))
            .collect();
        summary.selected = selection
            .relevant
            .iter()
            .map(|f| (f.name.clone(), f.su_label))
            .collect();
        summary.pairs_compared = selection.correlations.pair_count();
        summary
    }

    pub fn reduction_pct(&self) -> f64 {
        if self.initial_features > 0 {
            ((self.initial_features - self.final_features) as f64 / self.initial_features as f64)
                * 100.0
        } else {
            0.0
        }
    }

    fn count_cell(count: usize) -> Cell {
        Cell::new(count).fg(if count == 0 { Color::White } else { Color::Red })
    }

    pub fn render_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📁 Initial Features"),
            Cell::new(self.initial_features),
        ]);
        table.add_row(vec![
            Cell::new("🔍 Below Threshold"),
            Self::count_cell(self.below_threshold.len()),
        ]);
        table.add_row(vec![
            Cell::new("🔗 Redundant"),
            Self::count_cell(self.redundant.len()),
        ]);
        table.add_row(vec![
            Cell::new("↔  Pairs Compared"),
            Cell::new(self.pairs_compared),
        ]);
        table.add_row(vec![
            Cell::new("✅ Selected Features"),
            Cell::new(self.final_features)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        let reduction_pct = self.reduction_pct();
        let color = if reduction_pct > 30.0 {
            Color::Green
        } else if reduction_pct > 10.0 {
            Color::Yellow
        } else {
            Color::Cyan
        };
        table.add_row(vec![
            Cell::new("📉 Reduction"),
            Cell::new(format!("{:.1}%", reduction_pct))
                .fg(color)
                .add_attribute(Attribute::Bold),
        ]);

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("SELECTION SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        // Indent the table
        for line in self.render_table().to_string().lines() {
            println!("    {}", line);
        }

        if !self.selected.is_empty() {
            println!();
            println!(
                "    {} {}",
                style("🏆").cyan(),
                style("SELECTED FEATURES").white().bold()
            );
            println!("    {}", style("─".repeat(50)).dim());
            for (rank, (name, su)) in self.selected.iter().enumerate() {
                println!(
                    "      {:>3}. {} {}",
                    rank + 1,
                    name,
                    style(format!("(SU = {:.4})", su)).dim()
                );
            }
        }

        if !self.below_threshold.is_empty() || !self.redundant.is_empty() {
            println!();
            println!(
                "    {} {}",
                style("📝").cyan(),
                style("DROPPED FEATURES").white().bold()
            );
            println!("    {}", style("─".repeat(50)).dim());

            if !self.below_threshold.is_empty() {
                println!();
                println!(
                    "      {} {}:",
                    style("Below SU Threshold").yellow(),
                    style(format!("({})", self.below_threshold.len())).dim()
                );
                for feature in &self.below_threshold {
                    println!("        {} {}", style("•").dim(), feature);
                }
            }

            if !self.redundant.is_empty() {
                println!();
                println!(
                    "      {} {}:",
                    style("Redundant").yellow(),
                    style(format!("({})", self.redundant.len())).dim()
                );
                for (feature, by) in &self.redundant {
                    println!(
                        "        {} {} {}",
                        style("•").dim(),
                        feature,
                        style(format!("(dominated by {})", by)).dim()
                    );
                }
            }
        }
    }
}
