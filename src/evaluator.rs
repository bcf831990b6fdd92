use crate::die::Die;
use crate::die::Source;
use crate::error::Error;
use crate::error::Result;
use crate::parser::Rule;
use crate::roll;
use crate::roll::Keep;
use crate::roll::Roll;
use crate::roll::RollConfig;
use pest::iterators::Pair;
use pest::iterators::Pairs;

mod limits {
    /// Caps so a parsed expression can't allocate huge pools
    pub(crate) const MAX_DICE_AMOUNT: u64 = 5000;
    pub(crate) const MAX_DICE_SIDES: u64 = 5000;
}

/// Walks the parsed token stream and assembles the final roll
pub(crate) struct Evaluator;

impl Evaluator {
    /// Build and roll every dice group, merge all modifiers, assemble.
    /// An input with no dice group and no modifier is a parse error.
    pub(crate) fn eval<S: Source>(input: &str, tokens: Pairs<Rule>, source: &mut S) -> Result<Roll> {
        let mut kept = Vec::new();
        let mut dropped = Vec::new();
        let mut modifiers = Vec::new();
        let mut seen_token = false;
        for pair in tokens {
            match pair.as_rule() {
                Rule::dice_group => {
                    seen_token = true;
                    Self::eval_group(pair, source, &mut kept, &mut dropped, &mut modifiers)?;
                }
                Rule::flat_mod => {
                    seen_token = true;
                    modifiers.push(pair.as_str().to_owned());
                }
                Rule::EOI => (),
                _ => unreachable!("{:?}", pair),
            }
        }
        if !seen_token {
            return Err(Error::Parse(format!("no dice or modifiers in `{input}`")));
        }
        let total_mod = crate::add_modifiers(&modifiers)?;
        // dice were rolled group by group, assemble without rerolling so
        // the keep selection stays truthful
        let mut roll = Roll::new(RollConfig {
            dice: kept,
            total_mod,
            ..RollConfig::default()
        });
        roll.add_dropped(dropped);
        Ok(roll)
    }

    /// Roll one dice group, apply its keep spec, stash its modifier
    fn eval_group<S: Source>(
        group: Pair<Rule>,
        source: &mut S,
        kept: &mut Vec<Die>,
        dropped: &mut Vec<Die>,
        modifiers: &mut Vec<String>,
    ) -> Result<()> {
        let text = group.as_str().to_owned();
        let mut inner = group.into_inner();
        let mut pair = inner.next().unwrap();
        if pair.as_rule() == Rule::sign {
            if pair.as_str() == "-" {
                return Err(Error::Unsupported(format!(
                    "negative dice pools are not supported: `{text}`"
                )));
            }
            // a leading `+` is just a separator between groups
            pair = inner.next().unwrap();
        }
        let amount = Self::extract_int(&pair, &text)?;
        if amount > limits::MAX_DICE_AMOUNT {
            return Err(Error::Parse(format!(
                "exceeded max allowed amount of dice `{}`",
                limits::MAX_DICE_AMOUNT
            )));
        }
        let sides = Self::extract_int(&inner.next().unwrap(), &text)?;
        if sides == 0 {
            return Err(Error::Parse(format!("zero-sided die in `{text}`")));
        }
        if sides > limits::MAX_DICE_SIDES {
            return Err(Error::Parse(format!(
                "exceeded max allowed number of dice sides `{}`",
                limits::MAX_DICE_SIDES
            )));
        }
        let mut pool = (0..amount)
            .map(|_| Die::sized(sides))
            .collect::<Result<Vec<_>>>()?;
        for die in &mut pool {
            die.roll(source);
        }
        let mut keep_spec = None;
        for pair in inner {
            match pair.as_rule() {
                Rule::keep => keep_spec = Some(Self::extract_keep(pair, &text)?),
                Rule::group_mod => modifiers.push(pair.as_str().to_owned()),
                _ => unreachable!("{:?}", pair),
            }
        }
        match keep_spec {
            Some((amount, direction)) => {
                let (keep, drop) = roll::partition(pool, amount, direction);
                kept.extend(keep);
                dropped.extend(drop);
            }
            None => kept.extend(pool),
        }
        Ok(())
    }

    fn extract_keep(pair: Pair<Rule>, text: &str) -> Result<(usize, Keep)> {
        let mut inner = pair.into_inner();
        let direction = match inner.next().unwrap().as_str() {
            "^" => Keep::Highest,
            "v" => Keep::Lowest,
            _ => unreachable!(),
        };
        let count = inner.next().unwrap();
        let count = count
            .as_str()
            .parse::<usize>()
            .map_err(|_| Error::Parse(format!("bad keep count `{}` in `{}`", count.as_str(), text)))?;
        Ok((count, direction))
    }

    fn extract_int(pair: &Pair<Rule>, text: &str) -> Result<u64> {
        pair.as_str()
            .parse::<u64>()
            .map_err(|_| Error::Parse(format!("bad integer `{}` in `{}`", pair.as_str(), text)))
    }
}
