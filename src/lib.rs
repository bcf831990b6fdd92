pub mod die;
pub mod error;
mod evaluator;
pub mod expression;
mod parser;
pub mod roll;
pub mod throw;

use crate::die::Die;
use crate::die::Source;
use crate::error::Error;
use crate::error::Result;
use crate::expression::Expression;
use crate::expression::RandomSource;
use crate::roll::Roll;
use crate::roll::RollConfig;

/// Parse a notation string and roll it with the thread-local generator
pub fn roll(input: &str) -> Result<Roll> {
    Expression::new(input).roll()
}

/// Parse a notation string and roll it with the provided source
pub fn roll_with_source<S: Source>(input: &str, source: &mut S) -> Result<Roll> {
    Expression::new(input).roll_with_source(source)
}

/// Roll `n_dice` dice of `x_size` sides plus a flat modifier, bypassing
/// notation parsing
pub fn roll_ndx(n_dice: u64, x_size: u64, total_mod: i64) -> Result<Roll> {
    roll_ndx_with_source(
        n_dice,
        x_size,
        total_mod,
        &mut RandomSource {
            generator: &mut rand::thread_rng(),
        },
    )
}

/// Roll `n_dice` dice of `x_size` sides using the provided source
pub fn roll_ndx_with_source<S: Source>(
    n_dice: u64,
    x_size: u64,
    total_mod: i64,
    source: &mut S,
) -> Result<Roll> {
    let dice = (0..n_dice)
        .map(|_| Die::sized(x_size))
        .collect::<Result<Vec<_>>>()?;
    Ok(Roll::rolled(
        RollConfig {
            dice,
            total_mod,
            n_dice: Some(n_dice),
            x_size: Some(x_size),
        },
        source,
    ))
}

/// Sum an iterable of `+N` / `-N` modifier tokens, e.g. `["+2", "-3"]`
/// gives `-1`. Anything else is a parse error.
pub fn add_modifiers<I>(modifiers: I) -> Result<i64>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    modifiers.into_iter().try_fold(0i64, |total, modifier| {
        let modifier = modifier.as_ref();
        let value = match (modifier.strip_prefix('+'), modifier.strip_prefix('-')) {
            (Some(digits), _) => digits.parse::<i64>(),
            (_, Some(digits)) => digits.parse::<i64>().map(|value| -value),
            _ => {
                return Err(Error::Parse(format!(
                    "not sure what is meant by `{modifier}`"
                )))
            }
        }
        .map_err(|_| Error::Parse(format!("not sure what is meant by `{modifier}`")))?;
        Ok(total + value)
    })
}
