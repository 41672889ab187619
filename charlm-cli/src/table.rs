//! Plain-text rendering of experiment reports.

use std::io::{self, Write};

use charlm_core::experiment::ExperimentReport;
use charlm_core::model::NgramOrder;

const BORDER: &str = "+----------------------+---------------------+---------------------+---------------------+";
const RULE: &str = "|----------------------|---------------------|---------------------|---------------------|";
const HEADER: &str = "| Word                 | Unigram Probability | Bigram Probability  | Trigram Probability |";

/// Writes one report as a bordered table followed by the accuracy row.
pub fn write_report<W: Write>(out: &mut W, report: &ExperimentReport) -> io::Result<()> {
    writeln!(
        out,
        "\n# Model: {}, Test Dataset: {}",
        report.experiment.model_language, report.experiment.data_language
    )?;
    writeln!(out, "{}", BORDER)?;
    writeln!(out, "{}", HEADER)?;
    writeln!(out, "{}", RULE)?;

    for row in &report.rows {
        let p = &row.probabilities;
        writeln!(
            out,
            "| {:>20} | {:19.17} | {:19.17} | {:19.17} |",
            row.word, p.unigram, p.bigram, p.trigram
        )?;
    }

    let tally = &report.tally;
    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "| {:>20} | {:18.5}% | {:18.5}% | {:18.5}% |",
        "Accuracy",
        tally.accuracy(NgramOrder::Unigram),
        tally.accuracy(NgramOrder::Bigram),
        tally.accuracy(NgramOrder::Trigram)
    )?;
    writeln!(out, "{}", BORDER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use charlm_core::corpus::MemoryCorpus;
    use charlm_core::experiment::{run_experiment, Experiment};

    fn render(report: &ExperimentReport) -> String {
        let mut out = Vec::new();
        write_report(&mut out, report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_table_layout() {
        let corpus = MemoryCorpus::new()
            .with_document("train", "aaa")
            .with_document("test", "aa b");
        let experiment = Experiment::new("train", "Alpha", "test", "Beta");
        let report = run_experiment(&corpus, &experiment, 10).unwrap();

        let text = render(&report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "# Model: Alpha, Test Dataset: Beta");
        assert_eq!(lines[2], BORDER);
        assert_eq!(lines[3], HEADER);
        assert_eq!(lines[4], RULE);
        assert_eq!(
            lines[5],
            "|                   aa | 1.00000000000000000 | 1.00000000000000000 | 1.00000000000000000 |"
        );
        assert_eq!(
            lines[6],
            "|                    b | 0.00000000000000000 | 1.00000000000000000 | 1.00000000000000000 |"
        );
        assert_eq!(lines[7], RULE);
        assert_eq!(
            lines[8],
            "|             Accuracy |           50.00000% |          100.00000% |          100.00000% |"
        );
        assert_eq!(lines[9], BORDER);
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_rows_keep_column_width() {
        let corpus = MemoryCorpus::new()
            .with_document("train", "abc")
            .with_document("test", "c");
        let report = run_experiment(&corpus, &Experiment::new("train", "A", "test", "B"), 10).unwrap();
        let text = render(&report);
        for line in text.lines().skip(2) {
            assert_eq!(line.chars().count(), BORDER.len());
        }
    }
}
