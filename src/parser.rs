use pest::iterators::Pairs;
use pest_derive::Parser;

/// Pest parser for dice notation
#[derive(Parser)]
#[grammar = "notation.pest"]
pub struct Parser;

impl Parser {
    /// Next dice-group substring in the token stream, if any
    pub fn extract_group(tokens: &mut Pairs<Rule>) -> Option<String> {
        tokens.find_map(|pair| match pair.as_rule() {
            Rule::dice_group => Some(pair.as_str().to_owned()),
            _ => None,
        })
    }
}
