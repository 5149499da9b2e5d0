//! Transform pipeline infrastructure
//!
//! Each processing stage implements [`Runnable`]; [`Transform`] chains stages
//! whose types line up into one pipeline:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(Normalization::new(normalizer))  // String -> String
//!     .then(Expansion::new(expander))        // String -> Vec<String>
//!     .then(Parsing::new(parser));           // Vec<String> -> Vec<ParseResult>
//! ```
//!
//! The compiler checks that the output of every stage is the input of the next.
//! The first failing stage aborts the run and its [`IpaError`] is returned as is.
//!
//! - [`stages`]: the normalization, expansion and parsing stages

pub mod stages;

use crate::ipa::error::IpaResult;

/// Anything that turns an `I` into an `O`
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> IpaResult<O>;
}

/// A composable transformation from `I` to `O`
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> IpaResult<O> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> IpaResult<O> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Feed this transform's output into `stage`
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    pub fn run(&self, input: I) -> IpaResult<O> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> IpaResult<O> {
        Transform::run(self, input)
    }
}

impl<I, O> std::fmt::Debug for Transform<I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transform").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipa::error::{IpaError, SyntaxErrorKind};

    struct Double;
    impl Runnable<i32, i32> for Double {
        fn run(&self, input: i32) -> IpaResult<i32> {
            Ok(input * 2)
        }
    }

    struct ToText;
    impl Runnable<i32, String> for ToText {
        fn run(&self, input: i32) -> IpaResult<String> {
            Ok(input.to_string())
        }
    }

    struct Failing;
    impl Runnable<i32, i32> for Failing {
        fn run(&self, _input: i32) -> IpaResult<i32> {
            Err(IpaError::syntax(SyntaxErrorKind::DataAfterClose, None, ""))
        }
    }

    #[test]
    fn test_stages_chain_in_order() {
        let transform = Transform::from_fn(|x: i32| Ok(x + 1))
            .then(Double)
            .then(ToText);
        assert_eq!(transform.run(4).unwrap(), "10");
    }

    #[test]
    fn test_first_error_aborts() {
        let transform = Transform::from_fn(Ok).then(Failing).then(Double);
        assert_eq!(
            transform.run(1).unwrap_err().syntax_kind(),
            Some(SyntaxErrorKind::DataAfterClose)
        );
    }

    #[test]
    fn test_transform_is_a_stage() {
        let inner = Transform::from_fn(Ok).then(Double);
        let outer = Transform::from_fn(Ok).then(inner).then(Double);
        assert_eq!(outer.run(3).unwrap(), 12);
    }
}
