//! Terminal front end: the same assessment loop over any reader/writer pair.

use std::io::{BufRead, Write};

use anyhow::{Result, bail};
use assess_core::model::{AnswerValue, Question, ResponseFormat};
use services::{AssessmentLoopService, ResultsReport};
use tracing::debug;

/// Walk the whole questionnaire, then print and return the report.
pub fn run_console<R: BufRead, W: Write>(
    assessment_loop: &AssessmentLoopService,
    mut input: R,
    mut out: W,
) -> Result<ResultsReport> {
    let mut run = assessment_loop.start();
    writeln!(out, "{}", run.catalog().title())?;

    let mut shown_section = None;
    loop {
        let progress = run.progress_view();
        let Some(question) = run.current_question() else {
            bail!("assessment has no current question");
        };

        if progress.section_index != shown_section {
            shown_section = progress.section_index;
            if let Some(section) = run.current_section() {
                writeln!(out)?;
                writeln!(out, "== {} ==", section.title())?;
                writeln!(out, "{}", section.description())?;
            }
        }

        let (number, total) = (progress.question_number, progress.total);
        let (percent, kind) = (progress.percent, question.kind().label());
        writeln!(out)?;
        writeln!(out, "Question {number} of {total} ({percent}%) - {kind}")?;
        write_question(&mut out, question)?;

        let value = loop {
            write!(out, "> ")?;
            out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                bail!("input ended before the assessment was complete");
            }
            match parse_answer(question, line.trim()) {
                Some(value) => break value,
                None => writeln!(out, "{}", answer_hint(question))?,
            }
        };

        debug!(question = %question.id(), "console answer");
        match assessment_loop.answer_current(&mut run, value) {
            Ok(result) => {
                if let Some(report) = result.report {
                    write_report(&mut out, &report)?;
                    return Ok(report);
                }
            }
            Err(err) => writeln!(out, "{err}")?,
        }
    }
}

fn write_question<W: Write>(out: &mut W, question: &Question) -> Result<()> {
    writeln!(out, "{}", question.prompt())?;
    if let Some(description) = question.description() {
        writeln!(out, "{description}")?;
    }
    if let Some(scenario) = question.scenario() {
        writeln!(out, "  {scenario}")?;
    }
    if let Some(statement) = question.statement() {
        writeln!(out, "  \"{statement}\"")?;
    }
    match question.format() {
        ResponseFormat::Choice(options) => {
            for (idx, option) in options.iter().enumerate() {
                writeln!(out, "  {}) {}", idx + 1, option.text)?;
            }
        }
        ResponseFormat::Scale(scale) => {
            for (value, label) in scale.positions() {
                writeln!(out, "  {value} = {label}")?;
            }
        }
    }
    Ok(())
}

/// Choices are picked by their 1-based number, scales by their value.
fn parse_answer(question: &Question, raw: &str) -> Option<AnswerValue> {
    let number: i32 = raw.parse().ok()?;
    match question.format() {
        ResponseFormat::Choice(options) => {
            let idx = usize::try_from(number).ok()?.checked_sub(1)?;
            options
                .get(idx)
                .map(|option| AnswerValue::Choice(option.id.clone()))
        }
        ResponseFormat::Scale(scale) => {
            let value = AnswerValue::Scale(number);
            scale.contains(number).then_some(value)
        }
    }
}

fn answer_hint(question: &Question) -> String {
    match question.format() {
        ResponseFormat::Choice(options) => {
            format!("Enter a number from 1 to {}.", options.len())
        }
        ResponseFormat::Scale(scale) => {
            format!("Enter a value from {} to {}.", scale.min(), scale.max())
        }
    }
}

fn write_report<W: Write>(out: &mut W, report: &ResultsReport) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "== Your Feedback Profile ==")?;
    let (overall, tier) = (report.overall(), report.tier.label());
    writeln!(out, "Overall: {overall}/100 ({tier})")?;
    writeln!(out, "Feedback Style: {}", report.style.label())?;

    writeln!(out)?;
    writeln!(out, "COACH Framework")?;
    for point in report.radar_series() {
        writeln!(out, "  {:<14} {:>3}", point.label, point.score)?;
    }

    writeln!(out)?;
    writeln!(out, "Your Strengths")?;
    for strength in &report.strengths {
        writeln!(out, "  * {}: {}", strength.title, strength.description)?;
    }

    if !report.growth_opportunities.is_empty() {
        writeln!(out)?;
        writeln!(out, "Growth Opportunities")?;
        for area in &report.growth_opportunities {
            writeln!(out, "  * {} ({}/100)", area.label, area.score)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Your Growth Plan")?;
    for phase in report.growth_plan() {
        let (weeks, focus) = (phase.weeks, phase.focus);
        writeln!(out, "  {weeks} - {focus}: {}", phase.description)?;
    }
    out.flush()?;
    Ok(())
}
