use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;

use crate::counter::SlocCounter;
use crate::error::Result;
use crate::language::LanguageRegistry;

use super::{
    FileReport, Metric, MetricMeasure, MetricType, Operator, OperatorLevel, OperatorOutput,
    read_source,
};

const METRICS: &[Metric] = &[
    Metric {
        name: "loc",
        description: "Lines of code",
        metric_type: MetricType::Integer,
        measure: MetricMeasure::Informational,
    },
    Metric {
        name: "sloc",
        description: "Source lines of code",
        metric_type: MetricType::Integer,
        measure: MetricMeasure::Informational,
    },
    Metric {
        name: "comments",
        description: "Comment lines",
        metric_type: MetricType::Integer,
        measure: MetricMeasure::AimHigh,
    },
    Metric {
        name: "blank",
        description: "Blank lines",
        metric_type: MetricType::Integer,
        measure: MetricMeasure::Informational,
    },
];

/// Line counts per file.
pub struct RawOperator {
    languages: Arc<LanguageRegistry>,
}

impl RawOperator {
    #[must_use]
    pub const fn new(languages: Arc<LanguageRegistry>) -> Self {
        Self { languages }
    }

    fn analyze(&self, root: &Path, file: &str) -> Result<Option<FileReport>> {
        let Some(language) = self.languages.detect(Path::new(file)) else {
            return Ok(None);
        };
        let Some(source) = read_source(root, file)? else {
            return Ok(None);
        };

        let stats = SlocCounter::new(&language.comment_syntax).count(&source);
        Ok(Some(
            FileReport::new()
                .with_metric("loc", stats.total)
                .with_metric("sloc", stats.sloc())
                .with_metric("comments", stats.comment)
                .with_metric("blank", stats.blank),
        ))
    }
}

impl Operator for RawOperator {
    fn name(&self) -> &'static str {
        "raw"
    }

    fn description(&self) -> &'static str {
        "Raw line counts"
    }

    fn level(&self) -> OperatorLevel {
        OperatorLevel::File
    }

    fn metrics(&self) -> &[Metric] {
        METRICS
    }

    fn run(&self, root: &Path, files: &[String]) -> Result<OperatorOutput> {
        let reports: Vec<_> = files
            .par_iter()
            .map(|file| Ok(self.analyze(root, file)?.map(|report| (file.clone(), report))))
            .collect::<Result<_>>()?;

        Ok(reports.into_iter().flatten().collect())
    }
}
