//! Ledger audit text.
//!
//! One line per proposal, in append order:
//!
//! ```text
//! # step cell value category source details
//! 1 0 1 baseline baseline rule=30 nbhd=001
//! 1 2 1 pattern-trigger pattern-trigger nbhd=101
//! ```

use std::io::Write;

use isca_core::{Details, Proposal};
use isca_engine::ProposalLedger;
use isca_source::SourcePlan;

use crate::error::RenderError;

fn details(d: &Details) -> String {
    match d {
        Details::Rule {
            rule,
            neighbourhood,
        } => format!("rule={rule} nbhd={neighbourhood}"),
        Details::Pattern { neighbourhood } => format!("nbhd={neighbourhood}"),
        Details::Persistence { origin, run_length } => {
            format!("origin={origin} run={run_length}")
        }
        Details::Draw { value, threshold } => format!("draw={value:.6} p={threshold}"),
        Details::None => "-".to_string(),
    }
}

/// Format one proposal as an audit line, without the trailing newline.
///
/// Sources missing from `plan` are shown by numeric id.
pub fn audit_line(p: &Proposal, plan: &SourcePlan) -> String {
    let source = plan
        .name_of(p.source())
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", p.source()));
    format!(
        "{} {} {} {} {} {}",
        p.step(),
        p.cell(),
        p.value(),
        p.category(),
        source,
        details(p.details())
    )
}

/// Write every retained ledger entry, preceded by a column header.
///
/// Returns the number of proposal lines written.
pub fn write_audit<W: Write>(
    ledger: &ProposalLedger,
    plan: &SourcePlan,
    mut out: W,
) -> Result<usize, RenderError> {
    writeln!(out, "# step cell value category source details")?;
    for p in ledger.entries() {
        writeln!(out, "{}", audit_line(p, plan))?;
    }
    out.flush()?;
    Ok(ledger.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use isca_engine::{RunConfig, StepEngine};
    use isca_source::ProposalSource;
    use isca_sources::{BaselineRule, PatternTrigger};

    #[test]
    fn audit_lists_every_proposal() {
        let sources: Vec<Box<dyn ProposalSource>> = vec![
            Box::new(BaselineRule::from_number(0).unwrap()),
            Box::new(PatternTrigger::builder().pattern("010").build().unwrap()),
        ];
        let mut engine = StepEngine::new(RunConfig::new(3, 2, sources)).unwrap();
        engine.run().unwrap();

        let mut buf = Vec::new();
        let n = write_audit(engine.ledger(), engine.plan(), &mut buf).unwrap();
        assert_eq!(n, 4);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "# step cell value category source details");
        assert_eq!(lines[1], "1 0 0 baseline baseline rule=0 nbhd=001");
        assert_eq!(lines[2], "1 1 0 baseline baseline rule=0 nbhd=010");
        assert_eq!(
            lines[4],
            "1 1 1 pattern-trigger pattern-trigger nbhd=010"
        );
    }
}
