//! Parsing stage: every candidate to a parse result
//!
//! Candidates are parsed in order and the first failure aborts the stage, so a
//! caller never sees results for only some readings of an input.

use crate::ipa::error::IpaResult;
use crate::ipa::parsing::CandidateParser;
use crate::ipa::transforms::Runnable;
use crate::ipa::units::ParseResult;

pub struct Parsing {
    parser: CandidateParser,
}

impl Parsing {
    pub fn new(parser: CandidateParser) -> Self {
        Parsing { parser }
    }
}

impl Runnable<Vec<String>, Vec<ParseResult>> for Parsing {
    fn run(&self, candidates: Vec<String>) -> IpaResult<Vec<ParseResult>> {
        candidates
            .iter()
            .map(|candidate| self.parser.parse(candidate))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipa::error::{IpaError, SyntaxErrorKind};
    use crate::ipa::mapping::standard::STANDARD;

    fn stage() -> Parsing {
        Parsing::new(CandidateParser::new(STANDARD.clone()))
    }

    #[test]
    fn test_one_result_per_candidate() {
        let results = stage()
            .run(vec!["/a/".to_string(), "/ab/".to_string()])
            .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].units.len(), 2);
    }

    #[test]
    fn test_failing_candidate_fails_the_stage() {
        let err = stage()
            .run(vec!["/a/".to_string(), "/a/b".to_string()])
            .unwrap_err();
        assert!(matches!(err, IpaError::Syntax(_)));
        assert_eq!(err.syntax_kind(), Some(SyntaxErrorKind::DataAfterClose));
    }
}
