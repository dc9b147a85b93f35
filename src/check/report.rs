use std::fmt;

use log::info;
use serde::Serialize;

#[cfg(feature = "colorized_output")]
use console::style;

use super::{AnnotatedPairs, CheckError, ClassLevel, FilterStage, LibraryMode, Verdict};
use crate::summary::{format_threshold, proportion, SummaryTable};
use crate::table::{FeatureTable, TableError};

/// Positions of rows in [`ConsistencyReport::annotations`]
pub type RowSubset = Vec<usize>;

/// Molecular formula agreement (regular mode)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaSummary {
    /// Rows with a formula verdict
    pub pairs: RowSubset,
    /// Rows whose partial formulas agree
    pub matches: RowSubset,
    /// Rows whose partial formulas differ
    pub mismatches: RowSubset,
    /// `pairs` above the score threshold
    pub pairs_scored: RowSubset,
    /// `matches` above the score threshold
    pub matches_scored: RowSubset,
    /// `mismatches` above the score threshold
    pub mismatches_scored: RowSubset,
}

/// Class agreement at one level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSummary {
    /// Compared level
    pub level: ClassLevel,
    /// Rows with a verdict at this level
    pub available: RowSubset,
    /// `available` rows above the score threshold
    pub classified: RowSubset,
    /// `classified` rows whose classes agree
    pub matches: RowSubset,
}

impl LevelSummary {
    /// Share of classified pairs that agree
    pub fn match_rate(&self) -> Result<f64, CheckError> {
        proportion(
            self.matches.len(),
            self.classified.len(),
            &format!("{} matches", self.level),
        )
    }
}

/// Result of [`check_matching_annotations`](super::check_matching_annotations)
#[derive(Debug, Clone)]
pub struct ConsistencyReport {
    /// Mode the report was built with
    pub library_mode: LibraryMode,
    /// ZODIAC score threshold of the scored subsets
    pub score_threshold: f64,
    /// Filtered feature table with the derived columns
    pub annotations: FeatureTable,
    /// Row counts of every filter stage
    pub stages: Vec<FilterStage>,
    /// Features annotated by both tools, before quality filters
    pub candidate_pairs: usize,
    /// Rows above the ZODIAC score threshold
    pub scored_pairs: RowSubset,
    /// Formula agreement (regular mode only)
    pub formula: Option<FormulaSummary>,
    /// Superclass agreement
    pub superclass: LevelSummary,
    /// Class agreement
    pub class: LevelSummary,
    /// Subclass agreement
    pub subclass: LevelSummary,
    /// Formula table (regular) or usable pairs table (analogue)
    pub matching_table: SummaryTable,
    /// Chemical class table
    pub class_table: SummaryTable,
}

#[derive(Serialize)]
struct SummaryExport<'a> {
    library_mode: String,
    score_threshold: f64,
    candidate_pairs: usize,
    usable_pairs: usize,
    stages: &'a [FilterStage],
    matching_table: &'a SummaryTable,
    class_table: &'a SummaryTable,
}

fn subset<F>(verdicts: &[Verdict], mut keep: F) -> RowSubset
where
    F: FnMut(usize, Verdict) -> bool,
{
    verdicts
        .iter()
        .enumerate()
        .filter(|&(i, v)| keep(i, *v))
        .map(|(i, _)| i)
        .collect()
}

impl ConsistencyReport {
    pub(crate) fn summarize(pairs: AnnotatedPairs, score_threshold: f64) -> Result<Self, CheckError> {
        let above: Vec<bool> = pairs
            .scores
            .iter()
            .map(|s| s.is_some_and(|s| s > score_threshold))
            .collect();
        let scored_pairs: RowSubset = (0..above.len()).filter(|&i| above[i]).collect();
        info!(
            "Usable GNPS/SIRIUS annot. w. ZodiacScore > {} = {}",
            score_threshold,
            scored_pairs.len()
        );

        let threshold = format_threshold(score_threshold);

        let formula = pairs.formula.as_deref().map(|verdicts| FormulaSummary {
            pairs: subset(verdicts, |_, v| v.is_known()),
            matches: subset(verdicts, |_, v| v == Verdict::Yes),
            mismatches: subset(verdicts, |_, v| v == Verdict::No),
            pairs_scored: subset(verdicts, |i, v| above[i] && v.is_known()),
            matches_scored: subset(verdicts, |i, v| above[i] && v == Verdict::Yes),
            mismatches_scored: subset(verdicts, |i, v| above[i] && v == Verdict::No),
        });

        let [superclass, class, subclass] = ClassLevel::ALL.map(|level| {
            let verdicts = pairs.class_verdicts(level);
            LevelSummary {
                level,
                available: subset(verdicts, |_, v| v.is_known()),
                classified: subset(verdicts, |i, v| above[i] && v.is_known()),
                matches: subset(verdicts, |i, v| above[i] && v.is_yes()),
            }
        });

        let matching_table = match &formula {
            Some(formula) => {
                info!("====== Match for molecular formulas =======");
                info!("MF match = {}", formula.matches.len());
                info!("MF match score = {}", formula.matches_scored.len());
                SummaryTable::with_proportions(
                    "Molecular formula",
                    vec![
                        ("Usable MF pairs".to_string(), formula.pairs.len()),
                        (
                            format!("Usable MF pairs w. ZodiacScore>{}", threshold),
                            formula.pairs_scored.len(),
                        ),
                        ("Matching molecular formula".to_string(), formula.matches.len()),
                        (
                            format!("Matching molecular w. ZodiacScore>{}", threshold),
                            formula.matches_scored.len(),
                        ),
                    ],
                    formula.pairs_scored.len(),
                )?
            }
            None => SummaryTable::with_proportions(
                "Library pairs",
                vec![
                    ("Usable pairs".to_string(), pairs.usable_pairs()),
                    (
                        format!("Usable pairs w. ZodiacScore>{}", threshold),
                        scored_pairs.len(),
                    ),
                ],
                pairs.usable_pairs(),
            )?,
        };

        info!("====== Match between GNPS lib superclass/class/subclass and SIRIUS CANOPUS level(s) =======");
        info!("Classified pairs considered = {}", superclass.classified.len());
        for level in [&superclass, &class, &subclass] {
            let rate = level.match_rate()?;
            info!(
                "{} annotation pairs = {}, match = {} ({:.2})",
                level.level,
                level.classified.len(),
                level.matches.len(),
                rate
            );
        }

        let class_table = SummaryTable::with_proportions(
            "Chemical classes",
            vec![
                ("Available pairs".to_string(), superclass.available.len()),
                (
                    format!("Classified pairs w. ZodiacScore>{}", threshold),
                    superclass.classified.len(),
                ),
                ("Matching superclass".to_string(), superclass.matches.len()),
                ("Matching class".to_string(), class.matches.len()),
                ("Matching subclass".to_string(), subclass.matches.len()),
            ],
            superclass.classified.len(),
        )?;

        Ok(Self {
            library_mode: pairs.library_mode,
            score_threshold,
            annotations: pairs.annotations,
            stages: pairs.stages,
            candidate_pairs: pairs.candidate_pairs,
            scored_pairs,
            formula,
            superclass,
            class,
            subclass,
            matching_table,
            class_table,
        })
    }

    /// Pairs left after all filters
    pub fn usable_pairs(&self) -> usize {
        self.annotations.len()
    }

    /// Summary of one class level
    pub fn level(&self, level: ClassLevel) -> &LevelSummary {
        match level {
            ClassLevel::Superclass => &self.superclass,
            ClassLevel::Class => &self.class,
            ClassLevel::Subclass => &self.subclass,
        }
    }

    /// Materialise a subset of the annotated rows
    pub fn rows(&self, subset: &[usize]) -> FeatureTable {
        self.annotations.select(subset)
    }

    /// Summary tables and stage counts as pretty-printed JSON
    pub fn summary_json(&self) -> Result<String, TableError> {
        let export = SummaryExport {
            library_mode: self.library_mode.to_string(),
            score_threshold: self.score_threshold,
            candidate_pairs: self.candidate_pairs,
            usable_pairs: self.usable_pairs(),
            stages: &self.stages,
            matching_table: &self.matching_table,
            class_table: &self.class_table,
        };
        Ok(serde_json::to_string_pretty(&export)?)
    }

    /// Format the report with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let mut output = String::new();

            output.push_str(&format!("{}\n", style("Annotation Consistency Report").bold().cyan()));
            output.push_str(&format!("{}\n", style("=============================").cyan()));
            output.push_str(&format!(
                "{}: {}\n\n",
                style("Library mode").bold(),
                self.library_mode
            ));

            for stage in &self.stages {
                let removed = if stage.removed() > 0 {
                    style(format!("-{}", stage.removed())).red()
                } else {
                    style(String::from("-0")).dim()
                };
                output.push_str(&format!(
                    "  {:<36} {:>7} {}\n",
                    stage.name, stage.rows_after, removed
                ));
            }

            output.push('\n');
            output.push_str(&format!(
                "{}: {} of {} candidate pairs\n\n",
                style("Usable pairs").bold(),
                style(self.usable_pairs()).green(),
                self.candidate_pairs
            ));
            output.push_str(&format!("{}\n", style(&self.matching_table).yellow()));
            output.push_str(&format!("{}", style(&self.class_table).yellow()));
            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for ConsistencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Annotation Consistency Report")?;
        writeln!(f, "=============================")?;
        writeln!(f, "Library mode: {}", self.library_mode)?;
        writeln!(f)?;

        for stage in &self.stages {
            writeln!(
                f,
                "  {:<36} {:>7} -{}",
                stage.name,
                stage.rows_after,
                stage.removed()
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Usable pairs: {} of {} candidate pairs",
            self.usable_pairs(),
            self.candidate_pairs
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.matching_table)?;
        write!(f, "{}", self.class_table)
    }
}
