use crate::die::Source;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::parser;
use crate::roll::Roll;
use pest::iterators::Pairs;
use pest::Parser;
use rand::Rng;

/// Default random dice roller
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> Source for RandomSource<'_, T> {
    fn pick(&mut self, faces: usize) -> usize {
        self.generator.gen_range(0..faces)
    }
}

/// A dice-notation expression, held with all whitespace stripped
#[derive(Clone, Debug)]
pub struct Expression(String);

impl Expression {
    pub fn new(input: &str) -> Self {
        Expression(input.split_whitespace().collect())
    }

    /// Parse and roll the expression using the thread-local generator
    pub fn roll(&self) -> Result<Roll> {
        self.roll_with(&mut rand::thread_rng())
    }

    /// Parse and roll the expression using the provided Rng
    pub fn roll_with<R: Rng>(&self, generator: &mut R) -> Result<Roll> {
        self.roll_with_source(&mut RandomSource { generator })
    }

    /// Parse and roll the expression using the provided source
    pub fn roll_with_source<S: Source>(&self, source: &mut S) -> Result<Roll> {
        let mut pairs = parser::Parser::parse(parser::Rule::notation, &self.0)?;
        let tokens = pairs.next().unwrap().into_inner();
        Evaluator::eval(&self.0, tokens, source)
    }

    /// Return an iterator over the dice groups in the expression
    pub fn groups(&self) -> Result<GroupIter> {
        let inner = parser::Parser::parse(parser::Rule::notation, &self.0)?
            .next()
            .unwrap()
            .into_inner();
        Ok(GroupIter { inner })
    }

    /// Return the normalized expression string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Iterator that lazily returns each dice group in the expression
pub struct GroupIter<'a> {
    inner: Pairs<'a, parser::Rule>,
}

impl Iterator for GroupIter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        parser::Parser::extract_group(&mut self.inner)
    }
}
