use anyhow::Result;
use colored::Colorize;
use rps_game::numbers::percent;
use std::io::Write;
use std::time::Duration;

use super::{CHI_SQUARE_LIMIT, DistributionRecord, ScenarioResult};

fn success_rate(results: &[ScenarioResult]) -> (usize, usize, f64) {
    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    let rate = percent(
        u64::try_from(passed).unwrap_or(u64::MAX),
        u64::try_from(total).unwrap_or(u64::MAX),
    );
    (total, passed, rate)
}

pub fn generate_console_report<W: Write + ?Sized>(
    out: &mut W,
    results: &[ScenarioResult],
    distribution: &[DistributionRecord],
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Logic Test Results Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "==============================".cyan())?;

    let (total, passed, rate) = success_rate(results);
    writeln!(out, "Total scenario runs: {total}")?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", (total - passed).to_string().red())?;
    writeln!(out, "Success rate: {rate:.1}%")?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(
            out,
            "{status} {} (seed {})",
            result.scenario_name.bold(),
            result.seed
        )?;
        writeln!(
            out,
            "   Iterations: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(out, "   Average time: {:?}", result.average_duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "   Failures:")?;
            for failure in &result.failures {
                writeln!(out, "     • {}", failure.red())?;
            }
        }
        writeln!(out)?;
    }

    if !distribution.is_empty() {
        writeln!(out, "{}", "🎲 Computer Choice Distribution".bright_yellow().bold())?;
        writeln!(out, "{}", "==============================".yellow())?;
        for record in distribution {
            let verdict = if record.passed {
                "ok".green()
            } else {
                "SKEWED".red()
            };
            let [rock, paper, scissors] = record.counts();
            writeln!(
                out,
                "seed {:>20}: rock {rock:>6} paper {paper:>6} scissors {scissors:>6}  χ² {:>7.3} (limit {CHI_SQUARE_LIMIT}) {verdict}",
                record.seed, record.chi_square
            )?;
        }
    }
    Ok(())
}

pub fn generate_json_report<W: Write + ?Sized>(
    out: &mut W,
    results: &[ScenarioResult],
) -> Result<()> {
    let json_output = serde_json::to_string_pretty(results)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report<W: Write + ?Sized>(
    out: &mut W,
    results: &[ScenarioResult],
) -> Result<()> {
    writeln!(out, "# Rock Paper Scissors Logic Test Results\n")?;

    let (total, passed, rate) = success_rate(results);
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Total scenario runs**: {total}")?;
    writeln!(out, "- **Passed**: {passed}")?;
    writeln!(out, "- **Failed**: {}", total - passed)?;
    writeln!(out, "- **Success rate**: {rate:.1}%\n")?;

    writeln!(out, "## Detailed Results\n")?;
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(out, "### {status} {} (seed {})\n", result.scenario_name, result.seed)?;
        writeln!(
            out,
            "- **Iterations**: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(out, "- **Average time**: {:?}", result.average_duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "- **Failures**:")?;
            for failure in &result.failures {
                writeln!(out, "  - {failure}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn generate_csv_report<W: Write + ?Sized>(
    out: &mut W,
    records: &[DistributionRecord],
) -> Result<()> {
    writeln!(out, "seed,rounds,rock,paper,scissors,chi_square,passed")?;
    for record in records {
        writeln!(
            out,
            "{},{},{},{},{},{:.4},{}",
            record.seed,
            record.rounds,
            record.rock,
            record.paper,
            record.scissors,
            record.chi_square,
            record.passed
        )?;
    }
    Ok(())
}
