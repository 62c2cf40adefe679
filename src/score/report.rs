use serde::Serialize;

use super::ScoringResult;
use super::interactions::InteractionFlag;
use super::summary::{Summary, TermScore, Verdict, Zone, ZoneCounts, term_score};
use crate::context::DealContext;
use crate::report_helpers;
use crate::terms::{Flexibility, TermGroup, TermId, TermStatus};

fn status_marker(status: TermStatus) -> &'static str {
    match status {
        TermStatus::Scored => "",
        TermStatus::Missing => "missing",
        TermStatus::Unsupported => "not scored",
    }
}

/// Flagged terms that the needs-attention list leaves out, in catalog order.
fn other_flagged<'a>(result: &'a ScoringResult, summary: &Summary) -> Vec<(TermId, &'a [String])> {
    TermId::ALL
        .into_iter()
        .filter(|id| !summary.needs_attention.iter().any(|t| t.id == *id))
        .filter_map(|id| {
            let flags = result.term_flags.get(&id)?;
            (!flags.is_empty()).then_some((id, flags.as_slice()))
        })
        .collect()
}

/// Print the scorecard: verdict, one row per term grouped by category,
/// then the terms needing attention, other flagged terms and cross-term
/// findings.
pub fn print_report(result: &ScoringResult, summary: &Summary, show_flags: bool) {
    let separator = report_helpers::separator(78);
    let ctx = &result.context;

    println!("PPA Term Sheet Scorecard");
    println!("{separator}");
    println!(
        " Deal:     {} / {} / {}",
        ctx.market, ctx.technology, ctx.asset_type
    );
    println!(" Verdict:  {}", summary.verdict);
    println!(" Overall:  {:.1} ({})", summary.score, summary.zone);
    println!(
        " Zones:    {} buyer-favorable, {} at market, {} seller-favorable, {} red flag",
        summary.zones.buyer_favorable,
        summary.zones.at_market,
        summary.zones.seller_favorable,
        summary.zones.red_flag,
    );
    println!(
        " Issues:   {} flexible, {} inflexible    Missing: {}    Not scored: {}",
        summary.flexible_issues, summary.inflexible_issues, summary.missing, summary.unsupported,
    );

    let name_width = report_helpers::max_width(TermId::ALL.iter().map(|id| id.name()), 4);

    for group in &summary.groups {
        println!("{separator}");
        println!(
            " {:<width$}  {:>5}   {}",
            group.title,
            format!("{:.1}", group.score),
            group.zone,
            width = name_width
        );
        println!("{separator}");
        for id in group.group.terms() {
            let t = term_score(result, id);
            println!(
                "   {:<width$}{:>5.0}   {:<16}  {}",
                t.name,
                t.score,
                t.zone.as_str(),
                status_marker(t.status),
                width = name_width
            );
        }
    }
    println!("{separator}");

    if !summary.needs_attention.is_empty() {
        println!();
        println!(" Terms Needing Attention (worst first)");
        println!("{separator}");
        for t in &summary.needs_attention {
            let tag = match t.flexibility {
                Flexibility::Flexible => "flexible",
                Flexibility::Inflexible => "inflexible",
            };
            println!(
                " {:>5.0}  {:<16}  {:<width$}  {tag}",
                t.score,
                t.zone.as_str(),
                t.name,
                width = name_width
            );
            if show_flags {
                for flag in &t.flags {
                    println!("        - {flag}");
                }
            }
        }
        println!("{separator}");
    }

    let others = if show_flags { other_flagged(result, summary) } else { Vec::new() };
    if !others.is_empty() {
        println!();
        println!(" Other Flags");
        println!("{separator}");
        for (id, flags) in others {
            println!(" {}", id.name());
            for flag in flags {
                println!("        - {flag}");
            }
        }
        println!("{separator}");
    }

    if !result.interactions.is_empty() {
        println!();
        println!(" Cross-Term Interactions");
        println!("{separator}");
        for flag in &result.interactions {
            let terms: Vec<&str> = flag.terms.iter().map(|t| t.as_str()).collect();
            println!(" [{}] {}", terms.join(", "), flag.message);
        }
        println!("{separator}");
    }

    if !ctx.notes.is_empty() {
        println!();
        for note in &ctx.notes {
            println!(" note: {}", note.message);
        }
    }
}

/// Print the term catalog, grouped.
pub fn print_catalog() {
    let separator = report_helpers::separator(66);
    let name_width = report_helpers::max_width(TermId::ALL.iter().map(|id| id.name()), 4);

    println!(
        " {:<16} {:<width$}  Flexibility",
        "Id",
        "Term",
        width = name_width
    );
    for group in TermGroup::ALL {
        println!("{separator}");
        println!(" {}", group.title());
        println!("{separator}");
        for id in group.terms() {
            let flexibility = match id.flexibility() {
                Flexibility::Flexible => "flexible",
                Flexibility::Inflexible => "inflexible",
            };
            println!(
                " {:<16} {:<width$}  {flexibility}",
                id.as_str(),
                id.name(),
                width = name_width
            );
        }
    }
    println!("{separator}");
}

/// JSON-serializable representation of one scored term.
#[derive(Serialize)]
struct JsonTerm {
    id: TermId,
    name: &'static str,
    group: TermGroup,
    score: f64,
    zone: Zone,
    status: TermStatus,
    flexibility: Flexibility,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    flags: Vec<String>,
}

impl From<TermScore> for JsonTerm {
    fn from(t: TermScore) -> Self {
        Self {
            id: t.id,
            name: t.name,
            group: t.id.group(),
            score: t.score,
            zone: t.zone,
            status: t.status,
            flexibility: t.flexibility,
            flags: t.flags,
        }
    }
}

#[derive(Serialize)]
struct JsonGroup {
    group: TermGroup,
    title: &'static str,
    score: f64,
    zone: Zone,
}

/// JSON-serializable representation of the full scorecard.
#[derive(Serialize)]
struct JsonScorecard<'a> {
    verdict: Verdict,
    score: f64,
    zone: Zone,
    context: &'a DealContext,
    zones: ZoneCounts,
    flexible_issues: usize,
    inflexible_issues: usize,
    missing: usize,
    unsupported: usize,
    groups: Vec<JsonGroup>,
    terms: Vec<JsonTerm>,
    needs_attention: Vec<TermId>,
    interactions: &'a [InteractionFlag],
}

fn scorecard<'a>(result: &'a ScoringResult, summary: &Summary) -> JsonScorecard<'a> {
    JsonScorecard {
        verdict: summary.verdict,
        score: summary.score,
        zone: summary.zone,
        context: &result.context,
        zones: summary.zones,
        flexible_issues: summary.flexible_issues,
        inflexible_issues: summary.inflexible_issues,
        missing: summary.missing,
        unsupported: summary.unsupported,
        groups: summary
            .groups
            .iter()
            .map(|g| JsonGroup {
                group: g.group,
                title: g.title,
                score: g.score,
                zone: g.zone,
            })
            .collect(),
        terms: TermId::ALL
            .into_iter()
            .map(|id| JsonTerm::from(term_score(result, id)))
            .collect(),
        needs_attention: summary.needs_attention.iter().map(|t| t.id).collect(),
        interactions: &result.interactions,
    }
}

/// Serialize the scorecard to pretty-printed JSON and print to stdout.
pub fn print_json(
    result: &ScoringResult,
    summary: &Summary,
) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(&scorecard(result, summary))
}

#[derive(Serialize)]
struct JsonCatalogEntry {
    id: TermId,
    name: &'static str,
    group: TermGroup,
    flexibility: Flexibility,
}

pub fn print_catalog_json() -> Result<(), Box<dyn std::error::Error>> {
    let entries: Vec<JsonCatalogEntry> = TermId::ALL
        .into_iter()
        .map(|id| JsonCatalogEntry {
            id,
            name: id.name(),
            group: id.group(),
            flexibility: id.flexibility(),
        })
        .collect();
    report_helpers::print_json_stdout(&entries)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
