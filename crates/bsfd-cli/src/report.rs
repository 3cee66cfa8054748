//! Human-readable summary and the price-grid text artifact.

use bsfd_methods::{BlackScholesParameters, PriceTable};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const RULE: &str = "---------------------------------------------------------------";

/// Figures reported at the end of a run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub params: BlackScholesParameters,
    pub stability_ratio: f64,
    pub spot_index: usize,
    pub fd_price: f64,
    pub interpolated_price: f64,
    pub closed_form_price: f64,
}

/// Print the run summary in the driver's fixed layout.
pub fn print_summary<W: Write>(out: &mut W, summary: &RunSummary) -> io::Result<()> {
    let p = &summary.params;
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out)?;
    writeln!(out, "Title: Call option pricing using the Black-Scholes PDE")?;
    writeln!(out, "Methodology: Finite difference")?;
    writeln!(out)?;
    writeln!(out, "Grid: [0, {}] x [0, {}]", p.spatial_steps(), p.time_steps())?;
    writeln!(out, "Spatial range: [0, {}]", p.spatial_upper_bound())?;
    writeln!(out, "Temporal range: [0, {}]", p.maturity())?;
    writeln!(out, "Stability ratio: {:.4}", summary.stability_ratio)?;
    writeln!(out)?;
    writeln!(out, "Spot: {}", p.spot())?;
    writeln!(out, "Strike: {}", p.strike())?;
    writeln!(out, "Rate: {}", p.rate())?;
    writeln!(out, "Volatility: {}", p.volatility())?;
    writeln!(out, "Maturity: {}", p.maturity())?;
    writeln!(out)?;
    writeln!(
        out,
        "Call option price: {} (node {})",
        summary.fd_price, summary.spot_index
    )?;
    writeln!(out, "Interpolated at spot: {}", summary.interpolated_price)?;
    writeln!(out, "Closed-form price: {}", summary.closed_form_price)?;
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out)?;
    Ok(())
}

/// Write the table one spatial index per line, time layers joined by `", "`.
pub fn write_price_grid<W: Write>(table: &PriceTable, out: &mut W) -> io::Result<()> {
    for i in 0..table.spatial_points() {
        for (j, value) in table.row(i).enumerate() {
            if j > 0 {
                out.write_all(b", ")?;
            }
            write!(out, "{value}")?;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Write the price grid to `path`, replacing any existing file.
pub fn write_price_grid_file(table: &PriceTable, path: &Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_price_grid(table, &mut out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bsfd_methods::FiniteDifferenceSolver;

    fn tiny() -> FiniteDifferenceSolver {
        // S_max = 4, dS = 2, strike 2: payoff [0, 0, 2]
        FiniteDifferenceSolver::from_inputs(2.0, 2.0, 0.0, 0.5, 1.0, 1, 2).unwrap()
    }

    #[test]
    fn grid_text_has_one_line_per_spatial_index() {
        let mut solver = tiny();
        let table = solver.compute_prices();
        let mut buf = Vec::new();
        write_price_grid(table, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        // r = 0: upper boundary stays 4 − 2 = 2; node 1 is ½·0.25·cur[2] = 0.25
        assert_eq!(text, "0, 0\n0, 0.25\n2, 2\n");
    }

    #[test]
    fn grid_text_round_trips_every_value() {
        let mut solver = FiniteDifferenceSolver::from_inputs(100.0, 100.0, 0.05, 0.2, 1.0, 50, 10)
            .unwrap();
        let table = solver.compute_prices().clone();
        let mut buf = Vec::new();
        write_price_grid(&table, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), table.spatial_points());
        for (i, line) in lines.iter().enumerate() {
            let values: Vec<f64> = line.split(", ").map(|v| v.parse().unwrap()).collect();
            assert_eq!(values.len(), table.time_points());
            for (j, v) in values.iter().enumerate() {
                assert_eq!(v.to_bits(), table.get(i, j).to_bits(), "({i}, {j})");
            }
        }
        assert!(text.ends_with('\n'));
        assert!(!text.contains(", \n"));
    }

    #[test]
    fn file_output_matches_in_memory_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("BlackScholesFD.txt");
        let mut solver = tiny();
        let table = solver.compute_prices();

        write_price_grid_file(table, &path).unwrap();
        let mut expected = Vec::new();
        write_price_grid(table, &mut expected).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), expected);
    }

    #[test]
    fn summary_lists_grid_inputs_and_prices() {
        let params =
            BlackScholesParameters::new(1150.0, 1072.0, 0.05, 0.2, 5.0, 10_000, 221).unwrap();
        let summary = RunSummary {
            params,
            stability_ratio: 0.9778,
            spot_index: 110,
            fd_price: 300.5,
            interpolated_price: 301.25,
            closed_form_price: 301.0,
        };
        let mut buf = Vec::new();
        print_summary(&mut buf, &summary).unwrap();
        let text = String::from_utf8(buf).unwrap();

        for needle in [
            "Title: Call option pricing using the Black-Scholes PDE",
            "Methodology: Finite difference",
            "Grid: [0, 221] x [0, 10000]",
            "Spatial range: [0, 2300]",
            "Temporal range: [0, 5]",
            "Stability ratio: 0.9778",
            "Spot: 1150",
            "Strike: 1072",
            "Rate: 0.05",
            "Volatility: 0.2",
            "Maturity: 5",
            "Call option price: 300.5 (node 110)",
            "Interpolated at spot: 301.25",
            "Closed-form price: 301",
        ] {
            assert!(text.contains(needle), "missing {needle:?} in\n{text}");
        }
    }
}
