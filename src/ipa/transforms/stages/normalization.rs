//! Normalization stage: raw input to its normalized form

use crate::ipa::error::IpaResult;
use crate::ipa::normalization::Normalizer;
use crate::ipa::transforms::Runnable;

pub struct Normalization {
    normalizer: Normalizer,
}

impl Normalization {
    pub fn new(normalizer: Normalizer) -> Self {
        Normalization { normalizer }
    }
}

impl Runnable<String, String> for Normalization {
    fn run(&self, input: String) -> IpaResult<String> {
        Ok(self.normalizer.normalize(&input))
    }
}
