//! Expansion stage: normalized input to its alternative-free candidates

use crate::ipa::error::IpaResult;
use crate::ipa::expansion::AlternativeExpander;
use crate::ipa::transforms::Runnable;

pub struct Expansion {
    expander: AlternativeExpander,
}

impl Expansion {
    pub fn new(expander: AlternativeExpander) -> Self {
        Expansion { expander }
    }
}

impl Runnable<String, Vec<String>> for Expansion {
    fn run(&self, input: String) -> IpaResult<Vec<String>> {
        self.expander.expand(&input)
    }
}
