use crate::die::Die;
use crate::die::Source;
use crate::throw::Throw;
use itertools::Itertools;
use serde::Deserialize;
use serde::Serialize;

/// Which end of the pool a keep retains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keep {
    Highest,
    Lowest,
}

/// Recognized options for building a `Roll`
#[derive(Debug, Clone, Default)]
pub struct RollConfig {
    pub dice: Vec<Die>,
    pub total_mod: i64,
    /// Number of dice asked for, when built directly as NdX
    pub n_dice: Option<u64>,
    /// Face count asked for, when built directly as NdX
    pub x_size: Option<u64>,
}

/// Aggregate view of a roll, the wire record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub sum: i64,
    pub total: i64,
    pub faces: Vec<i64>,
    pub throw_mod: i64,
}

/// Stable-sort `dice` by result in `direction` and split off the first
/// `amount` as kept, the rest as dropped. Ties keep their original
/// relative order. `amount` past the end of the pool keeps everything.
pub fn partition(mut dice: Vec<Die>, amount: usize, direction: Keep) -> (Vec<Die>, Vec<Die>) {
    match direction {
        Keep::Highest => dice.sort_by(|a, b| b.result().cmp(&a.result())),
        Keep::Lowest => dice.sort_by(|a, b| a.result().cmp(&b.result())),
    }
    let amount = amount.min(dice.len());
    let dropped = dice.split_off(amount);
    (dice, dropped)
}

/// A throw plus a scalar modifier, with the dice dropped from the pool
/// retained for reporting. Every aggregate recomputes from the current
/// die results on each access, nothing is cached.
#[derive(Debug, Clone)]
pub struct Roll {
    throw: Throw,
    total_mod: i64,
    n_dice: Option<u64>,
    x_size: Option<u64>,
    dropped: Vec<Die>,
}

impl Roll {
    /// Assemble without rolling
    pub fn new(config: RollConfig) -> Self {
        Roll {
            throw: Throw::new(config.dice),
            total_mod: config.total_mod,
            n_dice: config.n_dice,
            x_size: config.x_size,
            dropped: Vec::new(),
        }
    }

    /// Assemble and roll immediately
    pub fn rolled<S: Source>(config: RollConfig, source: &mut S) -> Self {
        let mut roll = Self::new(config);
        roll.throw.roll_all(source);
        roll
    }

    /// Reroll the kept dice in place
    pub fn reroll<S: Source>(&mut self, source: &mut S) {
        self.throw.roll_all(source);
    }

    /// Sum of the kept dice's current results; unrolled dice contribute
    /// nothing
    pub fn sum(&self) -> i64 {
        self.throw.results().into_iter().flatten().sum()
    }

    pub fn total(&self) -> i64 {
        self.sum() + self.total_mod
    }

    /// Kept results sorted ascending
    pub fn faces(&self) -> Vec<i64> {
        let mut faces: Vec<i64> = self.throw.results().into_iter().flatten().collect();
        faces.sort();
        faces
    }

    /// Count kept results satisfying `comparator(result, value)`
    pub fn evaluate<F>(&self, value: i64, comparator: F) -> usize
    where
        F: Fn(i64, i64) -> bool,
    {
        self.throw
            .results()
            .into_iter()
            .flatten()
            .filter(|&result| comparator(result, value))
            .count()
    }

    /// Count kept results equal to `value`
    pub fn count(&self, value: i64) -> usize {
        self.evaluate(value, |result, value| result == value)
    }

    /// Partition the pool, retaining `amount` dice from the `direction`
    /// end and moving the rest to the dropped set. The sort order becomes
    /// the new storage order of the kept dice.
    pub fn keep(&mut self, amount: usize, direction: Keep) {
        let pool = std::mem::take(self.throw.dice_mut());
        let (kept, dropped) = partition(pool, amount, direction);
        *self.throw.dice_mut() = kept;
        self.dropped.extend(dropped);
    }

    /// Kept dice
    pub fn dice(&self) -> &[Die] {
        self.throw.dice()
    }

    /// Dice dropped by a keep, retained for reporting
    pub fn dropped(&self) -> &[Die] {
        &self.dropped
    }

    /// Kept and dropped dice together
    pub fn raw_dice(&self) -> Vec<&Die> {
        self.throw.dice().iter().chain(self.dropped.iter()).collect()
    }

    pub fn total_mod(&self) -> i64 {
        self.total_mod
    }

    pub fn n_dice(&self) -> Option<u64> {
        self.n_dice
    }

    pub fn x_size(&self) -> Option<u64> {
        self.x_size
    }

    pub(crate) fn add_dropped(&mut self, dice: Vec<Die>) {
        self.dropped.extend(dice);
    }

    /// Aggregate record with the wire field names
    pub fn outcome(&self) -> Outcome {
        Outcome {
            sum: self.sum(),
            total: self.total(),
            faces: self.faces(),
            throw_mod: self.total_mod,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.outcome())
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.faces().iter().format(", "))?;
        if !self.dropped.is_empty() {
            write!(
                f,
                " (dropped [{}])",
                self.dropped.iter().filter_map(Die::result).format(", ")
            )?;
        }
        if self.total_mod != 0 {
            write!(
                f,
                " {} {}",
                if self.total_mod < 0 { "-" } else { "+" },
                self.total_mod.abs()
            )?;
        }
        write!(f, " = {}", self.total())
    }
}
